//! Equipment: fishing rods and the shop that sells them.

pub mod rods;
pub mod shop;

pub use rods::*;
pub use shop::*;
