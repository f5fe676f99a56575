//! The player: progression, wallet, rods and aquarium.

use super::aquarium::Aquarium;
use crate::core::constants::{
    STARTING_ATTACK_POWER, STARTING_LEVEL, STARTING_REQUIRED_EXP_EXPONENT,
};
use crate::core::scaling::{pow10, sci, triangular};
use crate::error::{TycoonError, TycoonResult};
use crate::fishing::types::SeaCreature;
use crate::items::rods::FishingRod;
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};
use uuid::Uuid;

/// Player state.
///
/// Attack power is stored as a base value and the equipped rod is an index
/// into `fishing_rods_owned`, so [`Player::attack_power`] is always
/// `base + equipped rod` no matter how rods are swapped, upgraded or sold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: String,
    pub name: String,
    pub level: u32,
    pub exp: BigDecimal,
    pub required_exp: BigDecimal,
    pub coins: BigDecimal,
    pub aquarium: Aquarium,
    base_attack_power: BigDecimal,
    equipped_rod: Option<usize>,
    fishing_rods_owned: Vec<FishingRod>,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            player_id: Uuid::new_v4().to_string(),
            name: name.into(),
            level: STARTING_LEVEL,
            exp: BigDecimal::from(0),
            required_exp: sci(1, STARTING_REQUIRED_EXP_EXPONENT),
            coins: BigDecimal::from(0),
            aquarium: Aquarium::new(),
            base_attack_power: BigDecimal::from(STARTING_ATTACK_POWER),
            equipped_rod: None,
            fishing_rods_owned: Vec::new(),
        }
    }

    // === Combat stats ===

    /// Base attack power plus the equipped rod's attack power.
    pub fn attack_power(&self) -> BigDecimal {
        match self.fishing_rod() {
            Some(rod) => &self.base_attack_power + &rod.attack_power,
            None => self.base_attack_power.clone(),
        }
    }

    /// Attack power without any rod.
    pub fn base_attack_power(&self) -> &BigDecimal {
        &self.base_attack_power
    }

    /// The equipped rod, if any.
    pub fn fishing_rod(&self) -> Option<&FishingRod> {
        self.equipped_rod
            .and_then(|index| self.fishing_rods_owned.get(index))
    }

    pub fn equipped_rod_index(&self) -> Option<usize> {
        self.equipped_rod
    }

    pub fn fishing_rods_owned(&self) -> &[FishingRod] {
        &self.fishing_rods_owned
    }

    // === Progression ===

    /// Runs the level-up pass until EXP is below the threshold.
    ///
    /// Each level multiplies the threshold by 10^(new level) and total attack
    /// power, equipped rod included, by T(new level). The rod keeps its own
    /// attack power, so the gain is folded into the base. EXP itself is not
    /// consumed. Returns the number of levels gained; calling it again at a
    /// fixed point returns 0.
    pub fn level_up(&mut self) -> u32 {
        let mut levels_gained = 0;
        while self.exp >= self.required_exp {
            self.level += 1;
            levels_gained += 1;
            self.required_exp = &self.required_exp * &pow10(self.level);
            let boosted = &self.attack_power() * &BigDecimal::from(triangular(self.level));
            let new_base = match self.fishing_rod() {
                Some(rod) => &boosted - &rod.attack_power,
                None => boosted,
            };
            self.base_attack_power = new_base;
            info!(player = %self.name, level = self.level, "Level up");
        }
        levels_gained
    }

    /// Adds EXP and runs the level-up pass. Returns levels gained.
    pub fn gain_exp(&mut self, amount: &BigDecimal) -> u32 {
        self.exp += amount;
        self.level_up()
    }

    pub fn gain_coins(&mut self, amount: &BigDecimal) {
        self.coins += amount;
    }

    /// Moves a subdued creature into the aquarium and awards its catch EXP.
    ///
    /// Returns levels gained from the reward.
    pub fn catch_sea_creature(&mut self, sea_creature: SeaCreature) -> TycoonResult<u32> {
        if !sea_creature.is_subdued() {
            return Err(TycoonError::NotSubdued(sea_creature.name));
        }
        let reward = sea_creature.catch_exp_reward.clone();
        info!(player = %self.name, creature = %sea_creature.name, "Caught sea creature");
        self.aquarium.add_sea_creature(sea_creature);
        Ok(self.gain_exp(&reward))
    }

    // === Equipment ===

    fn spend(&mut self, cost: &BigDecimal) -> TycoonResult<()> {
        if self.coins < *cost {
            return Err(TycoonError::InsufficientCoins {
                needed: cost.clone(),
                available: self.coins.clone(),
            });
        }
        self.coins -= cost;
        Ok(())
    }

    /// Buys a copy of a catalog rod.
    pub fn buy_fishing_rod(&mut self, fishing_rod: &FishingRod) -> TycoonResult<()> {
        self.spend(&fishing_rod.coin_cost)?;
        self.fishing_rods_owned.push(fishing_rod.clone());
        debug!(player = %self.name, rod = %fishing_rod.name, "Bought fishing rod");
        Ok(())
    }

    /// Sells an owned rod for its original purchase cost.
    ///
    /// Selling the equipped rod unequips it; the equipped slot keeps pointing
    /// at the same rod when an earlier one is sold.
    pub fn sell_fishing_rod(&mut self, index: usize) -> TycoonResult<FishingRod> {
        if index >= self.fishing_rods_owned.len() {
            return Err(TycoonError::RodNotOwned(index));
        }
        match self.equipped_rod {
            Some(equipped) if equipped == index => self.equipped_rod = None,
            Some(equipped) if equipped > index => self.equipped_rod = Some(equipped - 1),
            _ => {}
        }
        let rod = self.fishing_rods_owned.remove(index);
        self.coins += &rod.coin_cost;
        debug!(player = %self.name, rod = %rod.name, "Sold fishing rod");
        Ok(rod)
    }

    /// Equips an owned rod, replacing whatever was equipped.
    pub fn equip_fishing_rod(&mut self, index: usize) -> TycoonResult<()> {
        if index >= self.fishing_rods_owned.len() {
            return Err(TycoonError::RodNotOwned(index));
        }
        self.equipped_rod = Some(index);
        Ok(())
    }

    pub fn unequip_fishing_rod(&mut self) -> TycoonResult<()> {
        match self.equipped_rod.take() {
            Some(_) => Ok(()),
            None => Err(TycoonError::NoRodEquipped),
        }
    }

    /// Pays for and applies one level on the equipped rod. Returns its new level.
    pub fn level_up_fishing_rod(&mut self) -> TycoonResult<u32> {
        let index = self.equipped_rod.ok_or(TycoonError::NoRodEquipped)?;
        self.level_up_owned_rod(index)
    }

    /// Pays for and applies one level on any owned rod. Returns its new level.
    pub fn level_up_owned_rod(&mut self, index: usize) -> TycoonResult<u32> {
        let cost = self
            .fishing_rods_owned
            .get(index)
            .map(|rod| rod.level_up_coin_cost.clone())
            .ok_or(TycoonError::RodNotOwned(index))?;
        self.spend(&cost)?;

        let rod = &mut self.fishing_rods_owned[index];
        rod.level_up();
        info!(rod = %rod.name, level = rod.level, "Fishing rod levelled up");
        Ok(rod.level)
    }

    /// Checks invariants that a deserialized player must satisfy.
    pub fn validate(&self) -> Result<(), String> {
        if self.level < STARTING_LEVEL {
            return Err(format!("player level {} is below 1", self.level));
        }
        if let Some(index) = self.equipped_rod {
            if index >= self.fishing_rods_owned.len() {
                return Err(format!(
                    "equipped rod index {} but only {} rods owned",
                    index,
                    self.fishing_rods_owned.len()
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Player ID: {}", self.player_id)?;
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Level: {}", self.level)?;
        writeln!(f, "EXP: {}", self.exp)?;
        writeln!(f, "Required EXP to reach next level: {}", self.required_exp)?;
        writeln!(f, "Coins: {}", self.coins)?;
        writeln!(f, "Attack Power: {}", self.attack_power())?;
        match self.fishing_rod() {
            Some(rod) => writeln!(f, "Fishing Rod used:\n{}\n", rod)?,
            None => writeln!(f, "Fishing Rod used: None\n")?,
        }
        writeln!(f, "Below is a list of fishing rods owned by this player.")?;
        for rod in &self.fishing_rods_owned {
            writeln!(f, "{}\n", rod)?;
        }
        writeln!(f, "Below is a list of sea creatures in this player's aquarium:")?;
        for creature in self.aquarium.sea_creatures() {
            writeln!(f, "{}\n", creature)?;
        }
        Ok(())
    }
}
