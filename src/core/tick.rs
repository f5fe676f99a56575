//! Idle accrual: the aquarium pays out EXP and coins for elapsed time.

use super::game_state::Game;
use super::scaling::accrued;
use crate::character::player::Player;
use bigdecimal::BigDecimal;
use tracing::debug;

/// What one idle tick added.
#[derive(Debug, Clone, PartialEq)]
pub struct IdleReport {
    pub elapsed_seconds: u64,
    pub exp_gained: BigDecimal,
    pub coins_gained: BigDecimal,
    pub levels_gained: u32,
}

impl IdleReport {
    pub fn is_empty(&self) -> bool {
        self.elapsed_seconds == 0
    }
}

/// Whole seconds from `since` to `now`. A clock that went backwards gives 0.
pub fn elapsed_seconds(since: i64, now: i64) -> u64 {
    u64::try_from(now.saturating_sub(since)).unwrap_or(0)
}

/// Credits `elapsed_seconds` of aquarium income to the player.
///
/// Coins and EXP are each the sum of the residents' per-second rates times
/// the elapsed time. The level-up pass runs after the EXP is added.
pub fn accrue_idle(player: &mut Player, elapsed_seconds: u64) -> IdleReport {
    let coins_gained = accrued(&player.aquarium.total_coins_per_second(), elapsed_seconds);
    let exp_gained = accrued(&player.aquarium.total_exp_per_second(), elapsed_seconds);

    player.gain_coins(&coins_gained);
    let levels_gained = player.gain_exp(&exp_gained);

    IdleReport {
        elapsed_seconds,
        exp_gained,
        coins_gained,
        levels_gained,
    }
}

/// Runs the idle tick for the time since the game's last tick and moves the
/// tick marker to `now`.
pub fn process_idle_tick(game: &mut Game, now: i64) -> IdleReport {
    let elapsed = elapsed_seconds(game.last_tick_time, now);
    game.last_tick_time = now;

    let report = accrue_idle(&mut game.player, elapsed);
    debug!(
        elapsed = report.elapsed_seconds,
        exp = %report.exp_gained,
        coins = %report.coins_gained,
        levels = report.levels_gained,
        "Idle tick"
    );
    report
}
