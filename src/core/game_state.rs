use crate::character::player::Player;
use crate::fishing::data::all_bodies_of_water;
use crate::fishing::types::BodyOfWater;
use crate::items::shop::Shop;
use serde::{Deserialize, Serialize};

/// Everything that goes into a save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub player: Player,
    pub bodies_of_water: Vec<BodyOfWater>,
    pub shop: Shop,
    /// Unix timestamp of the last idle accrual
    pub last_tick_time: i64,
}

impl Game {
    /// A new game with the default world for a freshly named player.
    pub fn new(player_name: impl Into<String>, current_time: i64) -> Self {
        Self::with_world(
            Player::new(player_name),
            all_bodies_of_water(),
            Shop::default(),
            current_time,
        )
    }

    pub fn with_world(
        player: Player,
        bodies_of_water: Vec<BodyOfWater>,
        shop: Shop,
        current_time: i64,
    ) -> Self {
        Self {
            player,
            bodies_of_water,
            shop,
            last_tick_time: current_time,
        }
    }

    pub fn body_of_water(&self, index: usize) -> Option<&BodyOfWater> {
        self.bodies_of_water.get(index)
    }

    /// Indices of the waters the player may currently fish in.
    pub fn unlocked_waters(&self) -> Vec<usize> {
        self.bodies_of_water
            .iter()
            .enumerate()
            .filter(|(_, water)| water.is_unlocked_for(self.player.level))
            .map(|(i, _)| i)
            .collect()
    }
}
