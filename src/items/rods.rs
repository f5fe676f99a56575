//! Fishing rods: the only equipment in the game.

use crate::core::constants::{ROD_BASE_CRIT_DAMAGE_TENTHS, ROD_CRIT_DAMAGE_PER_LEVEL_TENTHS};
use crate::core::scaling::{pow10, tenths};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An upgradable fishing rod.
///
/// `coin_cost` is the purchase price and never changes; it is also what the
/// rod sells back for. `level_up_coin_cost` starts equal to it and grows with
/// every level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishingRod {
    pub name: String,
    pub level: u32,
    pub attack_power: BigDecimal,
    pub critical_damage: BigDecimal,
    pub coin_cost: BigDecimal,
    pub level_up_coin_cost: BigDecimal,
}

impl FishingRod {
    pub fn new(name: impl Into<String>, attack_power: BigDecimal, coin_cost: BigDecimal) -> Self {
        Self {
            name: name.into(),
            level: 1,
            attack_power,
            critical_damage: tenths(ROD_BASE_CRIT_DAMAGE_TENTHS),
            level_up_coin_cost: coin_cost.clone(),
            coin_cost,
        }
    }

    /// Raises the rod one level.
    ///
    /// Attack power and level-up cost are multiplied by 10^(new level);
    /// critical damage grows by 0.1 x (new level). Paying for the level is
    /// the owner's job.
    pub fn level_up(&mut self) {
        self.level += 1;
        let factor = pow10(self.level);
        self.attack_power = &self.attack_power * &factor;
        self.level_up_coin_cost = &self.level_up_coin_cost * &factor;
        self.critical_damage += tenths(ROD_CRIT_DAMAGE_PER_LEVEL_TENTHS * i64::from(self.level));
    }

    /// Damage dealt by a critical hit for the given attack power.
    pub fn critical_hit(&self, attack_power: &BigDecimal) -> BigDecimal {
        attack_power * &self.critical_damage
    }
}

impl fmt::Display for FishingRod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crit_percent = &self.critical_damage * &BigDecimal::from(100);
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "Attack Power: {}", self.attack_power)?;
        writeln!(f, "Critical Damage: {}%", crit_percent.with_scale(0))?;
        writeln!(f, "Purchase Coin Cost: {}", self.coin_cost)?;
        write!(f, "Level Up Coin Cost: {}", self.level_up_coin_cost)
    }
}
