use super::{end_of_input, Console};
use std::collections::VecDeque;
use std::io;

/// Console that replays a fixed list of input lines and records everything
/// written to it. Running out of lines behaves like end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: String,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: String::new(),
            clears: 0,
        }
    }

    /// Everything printed so far, prompts and echoed input included.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.output.push_str(prompt);
        let line = self.inputs.pop_front().ok_or_else(end_of_input)?;
        self.output.push_str(&line);
        self.output.push('\n');
        Ok(line)
    }

    fn print(&mut self, text: &str) -> io::Result<()> {
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
