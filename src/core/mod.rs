//! Core game state and logic.

pub mod constants;
pub mod game_loop;
pub mod game_state;
pub mod offline;
pub mod scaling;
pub mod tick;

pub use game_loop::{run_command, run_session, start_game};
pub use game_state::Game;
pub use offline::{process_offline_progression, OfflineReport};
pub use tick::{process_idle_tick, IdleReport};
