//! Game-rule errors.
//!
//! Every state transition on the player or an encounter returns
//! `Result<_, TycoonError>`. A failed operation leaves state untouched.

use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TycoonError {
    #[error("Sorry, you have insufficient coins! Needed {needed}, you have {available}.")]
    InsufficientCoins {
        needed: BigDecimal,
        available: BigDecimal,
    },

    #[error("You do not own a fishing rod at index {0}.")]
    RodNotOwned(usize),

    #[error("You have no fishing rod equipped.")]
    NoRodEquipped,

    #[error("{water} requires level {required} (you are level {current}).")]
    LevelTooLow {
        water: String,
        required: u32,
        current: u32,
    },

    #[error("Nothing lives in {0}.")]
    EmptyWater(String),

    #[error("This encounter is already over.")]
    EncounterOver,

    #[error("{0} still has HP left and cannot be caught yet.")]
    NotSubdued(String),
}

pub type TycoonResult<T> = Result<T, TycoonError>;
