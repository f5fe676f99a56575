//! Fishing: sea creatures, bodies of water and encounters.

pub mod data;
pub mod logic;
pub mod types;

pub use data::*;
pub use logic::*;
pub use types::*;
