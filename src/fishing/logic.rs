//! Fishing encounters.
//!
//! An encounter starts at a body of water with a freshly spawned creature and
//! runs as a small state machine:
//!
//! ```text
//! Engaged --attack--> Engaged      (creature still up, did not flee)
//! Engaged --attack--> Fled         (flee roll succeeded, whatever its HP)
//! Engaged --attack--> Subdued      (HP <= 0, did not flee)
//! Engaged --abandon-> Abandoned
//! Subdued --resolve-> creature moved into the aquarium (consumes the encounter)
//! ```

use super::types::{BodyOfWater, SeaCreature};
use crate::character::player::Player;
use crate::core::constants::CRIT_CHANCE;
use crate::error::{TycoonError, TycoonResult};
use bigdecimal::BigDecimal;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Rolls a probability in [0, 1]. 0 never succeeds and 1 always does.
pub fn roll_chance(probability: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < probability
}

/// Damage of one player attack.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackResult {
    pub damage: BigDecimal,
    pub is_crit: bool,
}

/// Computes the damage of one attack.
///
/// Without a rod the player always deals their attack power. With a rod there
/// is a [`CRIT_CHANCE`] chance of dealing attack power x the rod's critical
/// damage instead.
pub fn calculate_player_attack(player: &Player, rng: &mut impl Rng) -> AttackResult {
    let attack_power = player.attack_power();
    match player.fishing_rod() {
        Some(rod) if roll_chance(CRIT_CHANCE, rng) => AttackResult {
            damage: rod.critical_hit(&attack_power),
            is_crit: true,
        },
        _ => AttackResult {
            damage: attack_power,
            is_crit: false,
        },
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterPhase {
    /// Fighting; the player may attack or give up.
    Engaged,
    /// HP reached zero and the creature stayed. Ready to resolve.
    Subdued,
    /// The creature escaped.
    Fled,
    /// The player walked away.
    Abandoned,
}

/// What happened on one attack turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub damage: BigDecimal,
    pub is_crit: bool,
    pub remaining_hp: BigDecimal,
    pub fled: bool,
    pub phase: EncounterPhase,
}

/// Final result of an encounter.
#[derive(Debug, Clone, PartialEq)]
pub enum EncounterResult {
    Caught {
        name: String,
        exp_reward: BigDecimal,
        levels_gained: u32,
    },
    Fled {
        name: String,
    },
    Abandoned {
        name: String,
    },
}

/// A single fight against one wild creature.
#[derive(Debug, Clone)]
pub struct Encounter {
    pub water_name: String,
    pub creature: SeaCreature,
    pub phase: EncounterPhase,
    pub attacks: u32,
}

impl Encounter {
    /// Spawns a random creature from `water`.
    ///
    /// Fails if the water is locked for `player_level` or has no creatures.
    pub fn start(
        water: &BodyOfWater,
        player_level: u32,
        rng: &mut impl Rng,
    ) -> TycoonResult<Self> {
        if !water.is_unlocked_for(player_level) {
            return Err(TycoonError::LevelTooLow {
                water: water.name.clone(),
                required: water.minimum_player_level,
                current: player_level,
            });
        }
        let template = water
            .potential_sea_creatures
            .choose(rng)
            .ok_or_else(|| TycoonError::EmptyWater(water.name.clone()))?;

        debug!(water = %water.name, creature = %template.name, "Wild sea creature appeared");
        Ok(Self::with_creature(water.name.clone(), template.spawn()))
    }

    /// An encounter against a specific creature.
    pub fn with_creature(water_name: impl Into<String>, creature: SeaCreature) -> Self {
        Self {
            water_name: water_name.into(),
            creature,
            phase: EncounterPhase::Engaged,
            attacks: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase != EncounterPhase::Engaged
    }

    /// One attack turn: deal damage, then roll for the creature fleeing.
    pub fn attack(&mut self, player: &Player, rng: &mut impl Rng) -> TycoonResult<AttackOutcome> {
        if self.is_over() {
            return Err(TycoonError::EncounterOver);
        }

        let AttackResult { damage, is_crit } = calculate_player_attack(player, rng);
        self.creature.take_damage(&damage);
        self.attacks += 1;

        let fled = roll_chance(self.creature.flee_chance, rng);
        self.phase = if fled {
            EncounterPhase::Fled
        } else if self.creature.is_subdued() {
            EncounterPhase::Subdued
        } else {
            EncounterPhase::Engaged
        };

        debug!(
            creature = %self.creature.name,
            damage = %damage,
            is_crit,
            fled,
            "Attack"
        );

        Ok(AttackOutcome {
            damage,
            is_crit,
            remaining_hp: self.creature.curr_hp.clone(),
            fled,
            phase: self.phase,
        })
    }

    /// Gives up on the creature. Only possible while still engaged.
    pub fn abandon(&mut self) -> TycoonResult<()> {
        if self.is_over() {
            return Err(TycoonError::EncounterOver);
        }
        self.phase = EncounterPhase::Abandoned;
        Ok(())
    }

    /// Ends the encounter, moving a subdued creature into the player's aquarium.
    ///
    /// An encounter still engaged is treated as abandoned.
    pub fn resolve(self, player: &mut Player) -> TycoonResult<EncounterResult> {
        let name = self.creature.name.clone();
        match self.phase {
            EncounterPhase::Subdued => {
                let exp_reward = self.creature.catch_exp_reward.clone();
                let levels_gained = player.catch_sea_creature(self.creature)?;
                Ok(EncounterResult::Caught {
                    name,
                    exp_reward,
                    levels_gained,
                })
            }
            EncounterPhase::Fled => Ok(EncounterResult::Fled { name }),
            EncounterPhase::Engaged | EncounterPhase::Abandoned => {
                Ok(EncounterResult::Abandoned { name })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scaling::sci;
    use crate::items::rods::FishingRod;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn creature(hp: i64, flee_chance: f64) -> SeaCreature {
        SeaCreature::new(
            "Target",
            BigDecimal::from(hp),
            BigDecimal::from(50),
            BigDecimal::from(1),
            BigDecimal::from(1),
            flee_chance,
        )
    }

    fn player_with_rod() -> Player {
        let mut player = Player::new("Tester");
        player.coins = BigDecimal::from(10);
        player
            .buy_fishing_rod(&FishingRod::new("Rod", BigDecimal::from(500), BigDecimal::from(10)))
            .unwrap();
        player.equip_fishing_rod(0).unwrap();
        player
    }

    #[test]
    fn test_roll_chance_edges() {
        let mut rng = test_rng();
        for _ in 0..1000 {
            assert!(!roll_chance(0.0, &mut rng));
            assert!(roll_chance(1.0, &mut rng));
        }
    }

    #[test]
    fn test_attack_without_rod_never_crits() {
        let mut rng = test_rng();
        let player = Player::new("Tester");
        for _ in 0..200 {
            let result = calculate_player_attack(&player, &mut rng);
            assert!(!result.is_crit);
            assert_eq!(result.damage, BigDecimal::from(500));
        }
    }

    #[test]
    fn test_attack_with_rod_mixes_normal_and_crit_hits() {
        let mut rng = test_rng();
        let player = player_with_rod();
        let mut crits = 0;
        for _ in 0..1000 {
            let result = calculate_player_attack(&player, &mut rng);
            if result.is_crit {
                crits += 1;
                assert_eq!(result.damage, BigDecimal::from(1500)); // 1000 * 1.5
            } else {
                assert_eq!(result.damage, BigDecimal::from(1000));
            }
        }
        assert!(crits > 200 && crits < 400, "expected ~30% crits, got {}", crits);
    }

    #[test]
    fn test_start_rejects_locked_water() {
        let water = BodyOfWater::new("Deep", 5, vec![creature(10, 0.0)]);
        let err = Encounter::start(&water, 4, &mut test_rng()).unwrap_err();
        assert_eq!(
            err,
            TycoonError::LevelTooLow {
                water: "Deep".to_string(),
                required: 5,
                current: 4,
            }
        );
    }

    #[test]
    fn test_start_rejects_empty_water() {
        let water = BodyOfWater::new("Puddle", 1, Vec::new());
        let err = Encounter::start(&water, 1, &mut test_rng()).unwrap_err();
        assert_eq!(err, TycoonError::EmptyWater("Puddle".to_string()));
    }

    #[test]
    fn test_start_spawns_full_hp_creature_from_water() {
        let mut template = creature(10, 0.0);
        template.take_damage(&BigDecimal::from(4));
        let water = BodyOfWater::new("Pond", 1, vec![template]);
        let encounter = Encounter::start(&water, 1, &mut test_rng()).unwrap();
        assert_eq!(encounter.creature.curr_hp, BigDecimal::from(10));
        assert_eq!(encounter.phase, EncounterPhase::Engaged);
        assert_eq!(encounter.water_name, "Pond");
    }

    #[test]
    fn test_fresh_player_needs_twenty_attacks_for_ten_thousand_hp() {
        let mut rng = test_rng();
        let mut player = Player::new("Tester");
        let mut encounter = Encounter::with_creature("Pond", creature(10_000, 0.0));

        for turn in 1..=19 {
            let outcome = encounter.attack(&player, &mut rng).unwrap();
            assert_eq!(outcome.phase, EncounterPhase::Engaged, "turn {}", turn);
        }
        let last = encounter.attack(&player, &mut rng).unwrap();
        assert_eq!(last.phase, EncounterPhase::Subdued);
        assert_eq!(last.remaining_hp, BigDecimal::from(0));
        assert_eq!(encounter.attacks, 20);

        let result = encounter.resolve(&mut player).unwrap();
        assert_eq!(
            result,
            EncounterResult::Caught {
                name: "Target".to_string(),
                exp_reward: BigDecimal::from(50),
                levels_gained: 0,
            }
        );
        assert_eq!(player.aquarium.len(), 1);
        assert_eq!(player.exp, BigDecimal::from(50));
    }

    #[test]
    fn test_zero_flee_chance_never_escapes() {
        let mut rng = test_rng();
        let player = Player::new("Tester");
        let mut encounter = Encounter::with_creature("Pond", creature(i64::MAX, 0.0));
        for _ in 0..5000 {
            let outcome = encounter.attack(&player, &mut rng).unwrap();
            assert!(!outcome.fled);
        }
        assert_eq!(encounter.phase, EncounterPhase::Engaged);
    }

    #[test]
    fn test_certain_flee_wins_over_lethal_hit() {
        let mut rng = test_rng();
        let mut player = Player::new("Tester");
        let mut encounter = Encounter::with_creature("Pond", creature(1, 1.0));

        let outcome = encounter.attack(&player, &mut rng).unwrap();
        assert!(outcome.fled);
        assert_eq!(outcome.phase, EncounterPhase::Fled);
        assert!(encounter.creature.is_subdued());

        let result = encounter.resolve(&mut player).unwrap();
        assert_eq!(result, EncounterResult::Fled { name: "Target".to_string() });
        assert!(player.aquarium.is_empty());
        assert_eq!(player.exp, BigDecimal::from(0));
    }

    #[test]
    fn test_attack_after_encounter_over_fails() {
        let mut rng = test_rng();
        let player = Player::new("Tester");
        let mut encounter = Encounter::with_creature("Pond", creature(1, 0.0));
        encounter.attack(&player, &mut rng).unwrap();
        assert_eq!(
            encounter.attack(&player, &mut rng),
            Err(TycoonError::EncounterOver)
        );
        assert_eq!(encounter.abandon(), Err(TycoonError::EncounterOver));
    }

    #[test]
    fn test_abandon_adds_nothing() {
        let mut rng = test_rng();
        let mut player = Player::new("Tester");
        let mut encounter = Encounter::with_creature("Pond", creature(10_000, 0.0));
        encounter.attack(&player, &mut rng).unwrap();
        encounter.abandon().unwrap();

        let result = encounter.resolve(&mut player).unwrap();
        assert_eq!(result, EncounterResult::Abandoned { name: "Target".to_string() });
        assert!(player.aquarium.is_empty());
    }

    #[test]
    fn test_catch_reward_can_level_up() {
        let mut rng = test_rng();
        let mut player = Player::new("Tester");
        let big_reward = SeaCreature::new(
            "Whale",
            BigDecimal::from(1),
            sci(1, 6),
            BigDecimal::from(1),
            BigDecimal::from(1),
            0.0,
        );
        let mut encounter = Encounter::with_creature("Ocean", big_reward);
        encounter.attack(&player, &mut rng).unwrap();
        match encounter.resolve(&mut player).unwrap() {
            EncounterResult::Caught { levels_gained, .. } => assert_eq!(levels_gained, 1),
            other => panic!("expected a catch, got {:?}", other),
        }
        assert_eq!(player.level, 2);
    }
}
