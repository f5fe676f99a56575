//! Offline progression.
//!
//! Credits the time between the last tick stored in a save file and the moment
//! the game is resumed, through the same accrual as the in-session idle tick.

use super::game_state::Game;
use super::tick::process_idle_tick;
use bigdecimal::BigDecimal;
use tracing::info;

/// Report of offline progression results
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineReport {
    pub elapsed_seconds: u64,
    pub exp_gained: BigDecimal,
    pub coins_gained: BigDecimal,
    pub level_before: u32,
    pub level_after: u32,
}

impl OfflineReport {
    pub fn total_level_ups(&self) -> u32 {
        self.level_after - self.level_before
    }
}

/// Credits the time since the save's last tick.
///
/// Returns `None` if no time passed (or the clock went backwards).
pub fn process_offline_progression(game: &mut Game, now: i64) -> Option<OfflineReport> {
    let level_before = game.player.level;
    let tick = process_idle_tick(game, now);
    if tick.is_empty() {
        return None;
    }

    info!(
        elapsed = tick.elapsed_seconds,
        levels = tick.levels_gained,
        "Offline progression applied"
    );

    Some(OfflineReport {
        elapsed_seconds: tick.elapsed_seconds,
        exp_gained: tick.exp_gained,
        coins_gained: tick.coins_gained,
        level_before,
        level_after: game.player.level,
    })
}

/// Restarts the tick timer at `now` without crediting time spent away.
pub fn skip_offline_progression(game: &mut Game, now: i64) {
    game.last_tick_time = now;
}
