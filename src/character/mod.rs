//! The player and their aquarium.

pub mod aquarium;
pub mod player;

pub use aquarium::*;
pub use player::*;
