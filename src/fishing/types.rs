//! Sea creatures and the bodies of water they live in.

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One catchable creature.
///
/// `curr_hp` only matters during an encounter. Once caught, the creature sits
/// in the aquarium and produces `exp_per_second` and `coins_per_second`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeaCreature {
    pub name: String,
    pub curr_hp: BigDecimal,
    pub max_hp: BigDecimal,
    pub catch_exp_reward: BigDecimal,
    pub exp_per_second: BigDecimal,
    pub coins_per_second: BigDecimal,
    /// Probability in [0, 1] of escaping after each attack
    pub flee_chance: f64,
}

impl SeaCreature {
    pub fn new(
        name: impl Into<String>,
        max_hp: BigDecimal,
        catch_exp_reward: BigDecimal,
        exp_per_second: BigDecimal,
        coins_per_second: BigDecimal,
        flee_chance: f64,
    ) -> Self {
        Self {
            name: name.into(),
            curr_hp: max_hp.clone(),
            max_hp,
            catch_exp_reward,
            exp_per_second,
            coins_per_second,
            flee_chance: flee_chance.clamp(0.0, 1.0),
        }
    }

    /// A fresh instance of this template with full HP.
    pub fn spawn(&self) -> Self {
        Self {
            curr_hp: self.max_hp.clone(),
            ..self.clone()
        }
    }

    /// True once HP has dropped to zero or below.
    pub fn is_subdued(&self) -> bool {
        self.curr_hp <= BigDecimal::from(0)
    }

    pub fn take_damage(&mut self, damage: &BigDecimal) {
        self.curr_hp -= damage;
    }
}

impl fmt::Display for SeaCreature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(
            f,
            "EXP Reward for catching this sea creature: {}",
            self.catch_exp_reward
        )?;
        writeln!(f, "HP: {}/{}", self.curr_hp, self.max_hp)?;
        writeln!(f, "EXP per second: {}", self.exp_per_second)?;
        writeln!(f, "Coins per second: {}", self.coins_per_second)?;
        // Tenth-of-a-percent precision
        let flee_percent = (self.flee_chance * 1000.0).round() / 10.0;
        write!(f, "Flee chance: {}%", flee_percent)
    }
}

/// A fishing location. Only players at or above `minimum_player_level` may
/// fish here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyOfWater {
    pub name: String,
    pub minimum_player_level: u32,
    pub potential_sea_creatures: Vec<SeaCreature>,
}

impl BodyOfWater {
    pub fn new(
        name: impl Into<String>,
        minimum_player_level: u32,
        potential_sea_creatures: Vec<SeaCreature>,
    ) -> Self {
        Self {
            name: name.into(),
            minimum_player_level,
            potential_sea_creatures,
        }
    }

    pub fn is_unlocked_for(&self, player_level: u32) -> bool {
        player_level >= self.minimum_player_level
    }
}

impl fmt::Display for BodyOfWater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(
            f,
            "Minimum Player Level to fish here: {}",
            self.minimum_player_level
        )?;
        write!(f, "Below is a list of sea creatures which can be caught here:")?;
        for creature in &self.potential_sea_creatures {
            write!(f, "\n{}\n", creature)?;
        }
        Ok(())
    }
}
