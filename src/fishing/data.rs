//! Hardcoded world content: sea creatures and bodies of water.

use super::types::{BodyOfWater, SeaCreature};
use crate::core::scaling::sci;

/// (name, max HP exponent, flee chance).
///
/// Each creature's catch reward is 2e(N-1) and both income rates are 1e(N-1),
/// where 1eN is its max HP.
const SEA_CREATURE_TABLE: [(&str, i64, f64); 10] = [
    ("Pegaklesk", 4, 0.0),
    ("Sunup", 5, 0.05),
    ("Siledraor", 7, 0.1),
    ("Rutind", 10, 0.15),
    ("Sirto", 14, 0.2),
    ("Thotorog", 19, 0.25),
    ("Erok", 25, 0.3),
    ("Aket", 32, 0.35),
    ("Tunaba", 40, 0.4),
    ("Keoyhu", 49, 0.45),
];

/// Number of creatures (from the start of the table) living in the first water.
const SHALLOW_WATER_CREATURES: usize = 5;

/// Every sea creature template in the game, weakest first.
pub fn all_sea_creatures() -> Vec<SeaCreature> {
    SEA_CREATURE_TABLE
        .iter()
        .map(|&(name, hp_exp, flee_chance)| {
            SeaCreature::new(
                name,
                sci(1, hp_exp),
                sci(2, hp_exp - 1),
                sci(1, hp_exp - 1),
                sci(1, hp_exp - 1),
                flee_chance,
            )
        })
        .collect()
}

/// The fishing locations of a new game.
pub fn all_bodies_of_water() -> Vec<BodyOfWater> {
    let mut creatures = all_sea_creatures();
    let deep = creatures.split_off(SHALLOW_WATER_CREATURES);
    vec![
        BodyOfWater::new("Hampswell Gulf", 1, creatures),
        BodyOfWater::new("Beauford Waters", 5, deep),
    ]
}
