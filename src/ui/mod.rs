//! Line-oriented console I/O.
//!
//! The game loop only talks to a [`Console`], so it can be driven by the real
//! terminal or by a scripted sequence of lines in tests.

pub mod scripted;
pub mod terminal;

pub use scripted::ScriptedConsole;
pub use terminal::TerminalConsole;

use std::io;

pub trait Console {
    /// Shows `prompt` and reads one line without its trailing newline.
    ///
    /// End of input is reported as [`io::ErrorKind::UnexpectedEof`].
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str) -> io::Result<()>;

    fn clear(&mut self) -> io::Result<()>;
}

/// Error returned by consoles when input runs out.
pub(crate) fn end_of_input() -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, "end of input")
}
