//! Validated input parsing.
//!
//! Turns raw console lines into typed values. Nothing here touches game
//! state; the game loop decides what to do with a parsed value or an
//! [`InputError`].

use crate::core::constants::{AFFIRMATIVE_TOKEN, ATTACK_TOKEN};

/// Main menu commands. Anything that is not one of these saves and quits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    GoFishing,
    GoShopping,
    UpgradeFishingRod,
    SellFishingRod,
    EquipFishingRod,
    UnequipFishingRod,
    ViewStats,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::GoFishing,
        Command::GoShopping,
        Command::UpgradeFishingRod,
        Command::SellFishingRod,
        Command::EquipFishingRod,
        Command::UnequipFishingRod,
        Command::ViewStats,
    ];

    /// The exact text the player types.
    pub fn token(&self) -> &'static str {
        match self {
            Command::GoFishing => "GO FISHING",
            Command::GoShopping => "GO SHOPPING",
            Command::UpgradeFishingRod => "UPGRADE FISHING ROD",
            Command::SellFishingRod => "SELL FISHING ROD",
            Command::EquipFishingRod => "EQUIP FISHING ROD",
            Command::UnequipFishingRod => "UNEQUIP FISHING ROD",
            Command::ViewStats => "VIEW STATS",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::GoFishing => "go fishing",
            Command::GoShopping => "go shopping",
            Command::UpgradeFishingRod => "upgrade your equipped fishing rod",
            Command::SellFishingRod => "sell a fishing rod",
            Command::EquipFishingRod => "equip a fishing rod",
            Command::UnequipFishingRod => "unequip your fishing rod",
            Command::ViewStats => "view your stats",
        }
    }

    /// Case-sensitive match against the command vocabulary.
    ///
    /// Returns `None` for anything else, which the game treats as
    /// "save and quit".
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        Self::ALL.into_iter().find(|command| command.token() == line)
    }
}

/// True only for the literal `Y`.
pub fn is_affirmative(line: &str) -> bool {
    line.trim() == AFFIRMATIVE_TOKEN
}

/// What the player does on an encounter turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterAction {
    Attack,
    Flee,
}

impl EncounterAction {
    /// `ATTACK` attacks; anything else flees.
    pub fn parse(line: &str) -> EncounterAction {
        if line.trim() == ATTACK_TOKEN {
            EncounterAction::Attack
        } else {
            EncounterAction::Flee
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{index} is out of range (there are {len} choices)")]
    OutOfRange { index: usize, len: usize },

    #[error("there is nothing to choose from")]
    NoChoices,

    #[error("{0}")]
    Rejected(String),
}

/// Parses a zero-based index into a list of `len` entries.
pub fn parse_index(line: &str, len: usize) -> Result<usize, InputError> {
    if len == 0 {
        return Err(InputError::NoChoices);
    }
    let trimmed = line.trim();
    let index: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if index >= len {
        return Err(InputError::OutOfRange { index, len });
    }
    Ok(index)
}

/// Validates a player name for a new game.
pub fn validate_name(name: &str) -> Result<String, InputError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(InputError::Rejected("Name cannot be empty".to_string()));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(InputError::Rejected(
            "Name cannot contain control characters".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}
