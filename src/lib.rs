//! Fishing Tycoon - Terminal Idle Fishing Game Library
//!
//! This module exposes the game logic for testing and external use.

pub mod build_info;
pub mod character;
pub mod config;
pub mod core;
pub mod error;
pub mod fishing;
pub mod input;
pub mod items;
pub mod save_manager;
pub mod ui;

pub use character::{Aquarium, Player};
pub use config::{CliAction, GameConfig};
pub use crate::core::Game;
pub use error::{TycoonError, TycoonResult};
pub use fishing::{BodyOfWater, Encounter, SeaCreature};
pub use items::{FishingRod, Shop};
pub use save_manager::{SaveError, SaveManager};
