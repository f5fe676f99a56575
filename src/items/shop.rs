//! The rod shop and its fixed catalog.

use super::rods::FishingRod;
use crate::core::scaling::sci;
use serde::{Deserialize, Serialize};

const DEFAULT_SHOP_NAME: &str = "Fishing Rod Shop";

/// (attack power exponent, coin cost exponent) for rods #1 to #10.
const CATALOG_EXPONENTS: [(i64, i64); 10] = [
    (3, 5),
    (5, 8),
    (8, 12),
    (12, 17),
    (17, 23),
    (23, 30),
    (30, 38),
    (38, 47),
    (47, 57),
    (57, 68),
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub fishing_rods_sold: Vec<FishingRod>,
}

impl Shop {
    pub fn new(name: impl Into<String>, fishing_rods_sold: Vec<FishingRod>) -> Self {
        Self {
            name: name.into(),
            fishing_rods_sold,
        }
    }

    pub fn get(&self, index: usize) -> Option<&FishingRod> {
        self.fishing_rods_sold.get(index)
    }

    pub fn len(&self) -> usize {
        self.fishing_rods_sold.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fishing_rods_sold.is_empty()
    }
}

impl Default for Shop {
    fn default() -> Self {
        let rods = CATALOG_EXPONENTS
            .iter()
            .enumerate()
            .map(|(i, &(attack_exp, cost_exp))| {
                FishingRod::new(
                    format!("Fishing Rod #{}", i + 1),
                    sci(1, attack_exp),
                    sci(1, cost_exp),
                )
            })
            .collect();
        Self::new(DEFAULT_SHOP_NAME, rods)
    }
}
