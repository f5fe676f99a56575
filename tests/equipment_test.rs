//! Equipment integration tests
//!
//! Buying, equipping, upgrading and selling rods from the default shop, and
//! how each step moves coins and attack power.

use bigdecimal::BigDecimal;
use fishing_tycoon::core::scaling::sci;
use fishing_tycoon::{Player, Shop, TycoonError};

fn player_with_coins(coins: BigDecimal) -> Player {
    let mut player = Player::new("Outfitter");
    player.coins = coins;
    player
}

// ============================================================================
// Buying
// ============================================================================

#[test]
fn test_buying_with_exact_coins_leaves_zero() {
    let shop = Shop::default();
    let rod = shop.get(0).unwrap();
    let mut player = player_with_coins(rod.coin_cost.clone());

    player.buy_fishing_rod(rod).unwrap();
    assert_eq!(player.coins, BigDecimal::from(0));
    assert_eq!(player.fishing_rods_owned().len(), 1);
    assert_eq!(player.fishing_rods_owned()[0].name, "Fishing Rod #1");
}

#[test]
fn test_buying_one_coin_short_fails_cleanly() {
    let shop = Shop::default();
    let rod = shop.get(0).unwrap();
    let short = &rod.coin_cost - &BigDecimal::from(1);
    let mut player = player_with_coins(short.clone());

    let err = player.buy_fishing_rod(rod).unwrap_err();
    assert_eq!(
        err,
        TycoonError::InsufficientCoins {
            needed: rod.coin_cost.clone(),
            available: short.clone(),
        }
    );
    assert_eq!(player.coins, short);
    assert!(player.fishing_rods_owned().is_empty());
}

#[test]
fn test_bought_rod_is_independent_of_catalog() {
    let shop = Shop::default();
    let mut player = player_with_coins(sci(1, 9));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();
    player.equip_fishing_rod(0).unwrap();
    player.level_up_fishing_rod().unwrap();

    assert_eq!(player.fishing_rods_owned()[0].level, 2);
    assert_eq!(shop.get(0).unwrap().level, 1);
}

#[test]
fn test_most_expensive_rod_costs_1e68() {
    let shop = Shop::default();
    let top = shop.get(shop.len() - 1).unwrap();
    let mut player = player_with_coins(sci(1, 68));
    player.buy_fishing_rod(top).unwrap();
    assert_eq!(player.coins, BigDecimal::from(0));
}

// ============================================================================
// Equipping
// ============================================================================

#[test]
fn test_swapping_rods_never_stacks_attack() {
    let shop = Shop::default();
    let mut player = player_with_coins(sci(2, 8));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();
    player.buy_fishing_rod(shop.get(1).unwrap()).unwrap();
    let base = player.attack_power();

    player.equip_fishing_rod(0).unwrap();
    assert_eq!(player.attack_power(), &base + &sci(1, 3));

    player.equip_fishing_rod(1).unwrap();
    assert_eq!(player.attack_power(), &base + &sci(1, 5));

    player.unequip_fishing_rod().unwrap();
    assert_eq!(player.attack_power(), base);
    assert_eq!(
        player.unequip_fishing_rod(),
        Err(TycoonError::NoRodEquipped)
    );
}

#[test]
fn test_equipping_unowned_rod_fails() {
    let mut player = player_with_coins(BigDecimal::from(0));
    assert_eq!(player.equip_fishing_rod(0), Err(TycoonError::RodNotOwned(0)));
}

#[test]
fn test_player_level_up_scales_equipped_rod_attack_too() {
    let shop = Shop::default();
    let mut player = player_with_coins(sci(1, 5));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();
    player.equip_fishing_rod(0).unwrap();
    assert_eq!(player.attack_power(), BigDecimal::from(1500));

    // Levels 2 and 3: 1500 * 1 * 3
    assert_eq!(player.gain_exp(&sci(5, 10)), 2);
    assert_eq!(player.level, 3);
    assert_eq!(player.attack_power(), BigDecimal::from(4500));

    player.unequip_fishing_rod().unwrap();
    assert_eq!(player.attack_power(), BigDecimal::from(3500));
    player.equip_fishing_rod(0).unwrap();
    assert_eq!(player.attack_power(), BigDecimal::from(4500));
}

#[test]
fn test_unequipped_level_up_then_equip_adds_rod_once() {
    let shop = Shop::default();
    let mut player = player_with_coins(sci(1, 5));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();

    // 500 * 1 * 3
    player.gain_exp(&sci(5, 10));
    assert_eq!(player.attack_power(), BigDecimal::from(1500));
    player.equip_fishing_rod(0).unwrap();
    assert_eq!(player.attack_power(), BigDecimal::from(2500));
}

// ============================================================================
// Upgrading
// ============================================================================

#[test]
fn test_upgrade_charges_coins_and_raises_attack() {
    let shop = Shop::default();
    let mut player = player_with_coins(&sci(1, 5) + &sci(1, 5));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();
    player.equip_fishing_rod(0).unwrap();

    assert_eq!(player.level_up_fishing_rod(), Ok(2));
    assert_eq!(player.coins, BigDecimal::from(0));
    // 500 base + 1e3 * 10^2
    assert_eq!(player.attack_power(), &BigDecimal::from(500) + &sci(1, 5));
    assert_eq!(player.fishing_rods_owned()[0].level_up_coin_cost, sci(1, 7));
}

#[test]
fn test_upgrade_without_coins_changes_nothing() {
    let shop = Shop::default();
    let mut player = player_with_coins(sci(1, 5));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();
    player.equip_fishing_rod(0).unwrap();
    let before = player.clone();

    assert!(matches!(
        player.level_up_fishing_rod(),
        Err(TycoonError::InsufficientCoins { .. })
    ));
    assert_eq!(player, before);
}

#[test]
fn test_upgrade_without_rod_fails() {
    let mut player = player_with_coins(sci(1, 9));
    assert_eq!(player.level_up_fishing_rod(), Err(TycoonError::NoRodEquipped));
}

// ============================================================================
// Selling
// ============================================================================

#[test]
fn test_sell_refunds_purchase_cost_even_after_upgrades() {
    let shop = Shop::default();
    let mut player = player_with_coins(sci(1, 9));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();
    player.equip_fishing_rod(0).unwrap();
    player.level_up_fishing_rod().unwrap();
    let coins_before_sale = player.coins.clone();

    let sold = player.sell_fishing_rod(0).unwrap();
    assert_eq!(sold.level, 2);
    assert_eq!(player.coins, &coins_before_sale + &sci(1, 5));
    assert!(player.fishing_rod().is_none());
    assert_eq!(player.attack_power(), BigDecimal::from(500));
}

#[test]
fn test_selling_earlier_rod_keeps_equipped_rod() {
    let shop = Shop::default();
    let mut player = player_with_coins(sci(1, 9));
    player.buy_fishing_rod(shop.get(0).unwrap()).unwrap();
    player.buy_fishing_rod(shop.get(1).unwrap()).unwrap();
    player.equip_fishing_rod(1).unwrap();

    player.sell_fishing_rod(0).unwrap();
    assert_eq!(player.equipped_rod_index(), Some(0));
    assert_eq!(player.fishing_rod().unwrap().name, "Fishing Rod #2");
}

#[test]
fn test_selling_unowned_rod_fails() {
    let mut player = player_with_coins(BigDecimal::from(0));
    assert_eq!(
        player.sell_fishing_rod(3).unwrap_err(),
        TycoonError::RodNotOwned(3)
    );
}
