//! Save file integration tests
//!
//! Round-trips a played game through the save file and checks that damaged
//! or foreign files are rejected.

use bigdecimal::BigDecimal;
use fishing_tycoon::core::scaling::sci;
use fishing_tycoon::fishing::all_sea_creatures;
use fishing_tycoon::{Game, SaveError, SaveManager};
use std::fs;

fn played_game() -> Game {
    let mut game = Game::new("Archivist", 1_700_000_000);
    game.player.coins = sci(1, 68);
    game.player.exp = sci(2, 3);
    let cheap = game.shop.get(0).unwrap().clone();
    let pricey = game.shop.get(1).unwrap().clone();
    game.player.buy_fishing_rod(&cheap).unwrap();
    game.player.buy_fishing_rod(&pricey).unwrap();
    game.player.equip_fishing_rod(1).unwrap();
    game.player.level_up_fishing_rod().unwrap();
    game.player
        .aquarium
        .add_sea_creature(all_sea_creatures()[9].clone());
    game
}

#[test]
fn test_round_trip_preserves_everything() {
    let dir = tempfile::tempdir().unwrap();
    let manager = SaveManager::with_path(dir.path().join("fishing_tycoon.sav"));
    let game = played_game();

    manager.save(&game, 1_700_000_500).unwrap();
    let loaded = manager.load().unwrap();

    assert_eq!(loaded, game);
    assert_eq!(loaded.player.player_id, game.player.player_id);
    assert_eq!(loaded.player.equipped_rod_index(), Some(1));
    assert_eq!(loaded.player.attack_power(), game.player.attack_power());
    assert_eq!(
        loaded.player.aquarium.sea_creatures()[0].max_hp,
        sci(1, 49)
    );
}

#[test]
fn test_huge_and_fractional_decimals_are_exact() {
    let dir = tempfile::tempdir().unwrap();
    let manager = SaveManager::with_path(dir.path().join("game.sav"));
    let mut game = Game::new("Archivist", 0);
    game.player.coins = &sci(1, 68) + &BigDecimal::from(1);
    game.player.exp = BigDecimal::new(123_456_789i64.into(), 4);

    manager.save(&game, 0).unwrap();
    let loaded = manager.load().unwrap();
    assert_eq!(loaded.player.coins, game.player.coins);
    assert_eq!(loaded.player.exp, game.player.exp);
}

#[test]
fn test_saving_twice_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let manager = SaveManager::with_path(dir.path().join("game.sav"));
    let mut game = Game::new("Archivist", 0);
    manager.save(&game, 0).unwrap();

    game.player.coins = BigDecimal::from(42);
    manager.save(&game, 1).unwrap();
    assert_eq!(manager.load().unwrap().player.coins, BigDecimal::from(42));
}

#[test]
fn test_flipped_byte_on_disk_is_detected() {
    let dir = tempfile::tempdir().unwrap();
    let manager = SaveManager::with_path(dir.path().join("game.sav"));
    manager.save(&played_game(), 0).unwrap();

    let mut bytes = fs::read(manager.path()).unwrap();
    let middle = bytes.len() / 2;
    bytes[middle] ^= 0x20;
    fs::write(manager.path(), &bytes).unwrap();

    assert!(matches!(manager.load(), Err(SaveError::ChecksumMismatch)));
}

#[test]
fn test_foreign_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let manager = SaveManager::with_path(dir.path().join("game.sav"));
    fs::write(manager.path(), vec![0u8; 128]).unwrap();
    assert!(matches!(manager.load(), Err(SaveError::BadMagic { .. })));
}
