//! The player's aquarium of caught sea creatures.

use crate::fishing::types::SeaCreature;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

/// Append-only collection of caught creatures, in catch order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Aquarium {
    sea_creatures: Vec<SeaCreature>,
}

impl Aquarium {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_sea_creature(&mut self, sea_creature: SeaCreature) {
        self.sea_creatures.push(sea_creature);
    }

    pub fn sea_creatures(&self) -> &[SeaCreature] {
        &self.sea_creatures
    }

    pub fn len(&self) -> usize {
        self.sea_creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sea_creatures.is_empty()
    }

    /// Combined EXP per second of every resident.
    pub fn total_exp_per_second(&self) -> BigDecimal {
        self.sea_creatures.iter().map(|c| &c.exp_per_second).sum()
    }

    /// Combined coins per second of every resident.
    pub fn total_coins_per_second(&self) -> BigDecimal {
        self.sea_creatures.iter().map(|c| &c.coins_per_second).sum()
    }
}
