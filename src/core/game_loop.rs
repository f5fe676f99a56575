//! The interactive session: startup, the menu loop, and the command handlers.
//!
//! Everything here talks to a [`Console`], never to stdin/stdout directly, so
//! whole sessions can be replayed from a script in tests.

use super::game_state::Game;
use super::offline::{process_offline_progression, skip_offline_progression, OfflineReport};
use super::tick::{process_idle_tick, IdleReport};
use crate::config::GameConfig;
use crate::error::TycoonResult;
use crate::fishing::logic::{Encounter, EncounterResult};
use crate::input::{
    is_affirmative, parse_index, validate_name, Command, EncounterAction, InputError,
};
use crate::save_manager::SaveManager;
use crate::ui::Console;
use bigdecimal::BigDecimal;
use rand::Rng;
use std::io;
use tracing::{debug, info, warn};

const YES_NO_HINT: &str = "Enter 'Y' for yes.\nEnter anything else for no.";
const CONTINUE_PROMPT: &str = "Do you want to continue playing 'Fishing Tycoon'? ";

pub const WELCOME_TEXT: &str = "Welcome to 'Fishing Tycoon'.\n\
In this game, you will go fishing to catch sea creatures.";

/// Reads lines until `parse` accepts one.
///
/// Each rejection is printed and the prompt repeated. There is no retry limit;
/// only end of input gets out without a value.
pub fn prompt_until<T, F>(console: &mut impl Console, prompt: &str, mut parse: F) -> io::Result<T>
where
    F: FnMut(&str) -> Result<T, InputError>,
{
    let mut line = console.read_line(prompt)?;
    loop {
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                console.print(&format!("Sorry, invalid input! {}", err))?;
                line = console.read_line(prompt)?;
            }
        }
    }
}

/// Prompts for an index into a list of `len` entries. The list must not be empty.
pub fn prompt_index(console: &mut impl Console, prompt: &str, len: usize) -> io::Result<usize> {
    prompt_until(console, prompt, |line| parse_index(line, len))
}

/// Prints a failed game action and turns it into `None`.
fn report_failure<T>(console: &mut impl Console, result: TycoonResult<T>) -> io::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            console.print(&err.to_string())?;
            Ok(None)
        }
    }
}

fn ask_yes_no(console: &mut impl Console, question: &str) -> io::Result<bool> {
    console.print(YES_NO_HINT)?;
    Ok(is_affirmative(&console.read_line(question)?))
}

fn print_numbered<T: std::fmt::Display>(
    console: &mut impl Console,
    heading: &str,
    items: &[T],
) -> io::Result<()> {
    console.print(heading)?;
    for (index, item) in items.iter().enumerate() {
        console.print(&format!("[{}]\n{}\n", index, item))?;
    }
    Ok(())
}

pub fn render_idle_report(report: &IdleReport) -> String {
    let mut text = format!(
        "While you were busy, your aquarium earned {} coins and {} EXP.",
        report.coins_gained, report.exp_gained
    );
    if report.levels_gained > 0 {
        text.push_str(&format!(" You gained {} level(s)!", report.levels_gained));
    }
    text
}

pub fn render_offline_report(report: &OfflineReport) -> String {
    let hours = report.elapsed_seconds / 3600;
    let minutes = (report.elapsed_seconds % 3600) / 60;
    let seconds = report.elapsed_seconds % 60;
    let mut text = format!(
        "While you were away ({}h {}m {}s), your aquarium earned {} coins and {} EXP.",
        hours, minutes, seconds, report.coins_gained, report.exp_gained
    );
    if report.total_level_ups() > 0 {
        text.push_str(&format!(
            "\nLevel {} -> {}!",
            report.level_before, report.level_after
        ));
    }
    text
}

/// Loads the saved game, or starts a new one.
///
/// A missing save (or `--new`) asks for a name. A save that exists but cannot
/// be loaded is moved aside and a new game starts. Offline time is credited
/// unless disabled in `config`.
pub fn start_game(
    save_manager: &SaveManager,
    config: &GameConfig,
    console: &mut impl Console,
    now: i64,
) -> io::Result<Game> {
    if !config.new_game && save_manager.save_exists() {
        match save_manager.load() {
            Ok(mut game) => {
                info!(player = %game.player.name, "Loaded saved game");
                if config.offline_progress {
                    if let Some(report) = process_offline_progression(&mut game, now) {
                        console.print(&render_offline_report(&report))?;
                    }
                } else {
                    skip_offline_progression(&mut game, now);
                }
                console.print(&format!("Current game progress:\n{}", game.player))?;
                return Ok(game);
            }
            Err(err) => {
                warn!(error = %err, path = %save_manager.path().display(), "Save file could not be loaded");
                let moved_to = save_manager.quarantine()?;
                console.print(&format!(
                    "Your save file could not be loaded ({}). It was moved to {} and a new game will start.",
                    err,
                    moved_to.display()
                ))?;
            }
        }
    }

    let name = prompt_until(console, "Please enter your name: ", validate_name)?;
    info!(player = %name, "Starting new game");
    Ok(Game::new(name, now))
}

/// Runs the menu loop until the player quits or input ends.
///
/// `clock` supplies the current Unix time for each idle tick. The caller is
/// responsible for saving afterwards.
pub fn run_session(
    game: &mut Game,
    console: &mut impl Console,
    rng: &mut impl Rng,
    mut clock: impl FnMut() -> i64,
) -> io::Result<()> {
    let result = session_loop(game, console, rng, &mut clock);
    match result {
        Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
            debug!("End of input, leaving session");
            Ok(())
        }
        other => other,
    }
}

fn session_loop(
    game: &mut Game,
    console: &mut impl Console,
    rng: &mut impl Rng,
    clock: &mut impl FnMut() -> i64,
) -> io::Result<()> {
    // Time spent before the first menu (name entry, offline report) is not income.
    game.last_tick_time = clock();

    let mut keep_playing = ask_yes_no(console, CONTINUE_PROMPT)?;
    while keep_playing {
        console.clear()?;

        let report = process_idle_tick(game, clock());
        let zero = BigDecimal::from(0);
        if report.exp_gained != zero || report.coins_gained != zero {
            console.print(&render_idle_report(&report))?;
        }

        for command in Command::ALL {
            console.print(&format!("Enter '{}' to {}.", command.token(), command.description()))?;
        }
        console.print("Enter anything else to save game data and quit the game.")?;

        let line = console.read_line("What do you want to do? ")?;
        match Command::parse(&line) {
            Some(command) => run_command(game, command, console, rng)?,
            None => return Ok(()),
        }

        keep_playing = ask_yes_no(console, CONTINUE_PROMPT)?;
    }
    Ok(())
}

/// Carries out one menu command.
pub fn run_command(
    game: &mut Game,
    command: Command,
    console: &mut impl Console,
    rng: &mut impl Rng,
) -> io::Result<()> {
    debug!(command = command.token(), "Running command");
    console.clear()?;
    match command {
        Command::GoFishing => go_fishing(game, console, rng),
        Command::GoShopping => go_shopping(game, console),
        Command::UpgradeFishingRod => upgrade_fishing_rod(game, console),
        Command::SellFishingRod => sell_fishing_rod(game, console),
        Command::EquipFishingRod => equip_fishing_rod(game, console),
        Command::UnequipFishingRod => unequip_fishing_rod(game, console),
        Command::ViewStats => console.print(&game.player.to_string()),
    }
}

fn go_fishing(game: &mut Game, console: &mut impl Console, rng: &mut impl Rng) -> io::Result<()> {
    if game.unlocked_waters().is_empty() {
        return console.print("There is nowhere you can go fishing yet.");
    }
    print_numbered(
        console,
        "Below is a list of bodies of water where you can go fishing.\n",
        &game.bodies_of_water,
    )?;

    let level = game.player.level;
    let world: &Game = game;
    let len = world.bodies_of_water.len();
    let mut encounter = prompt_until(
        console,
        "Please enter index of body of water you want to go to: ",
        |line| {
            let index = parse_index(line, len)?;
            let water = world
                .body_of_water(index)
                .ok_or(InputError::OutOfRange { index, len })?;
            Encounter::start(water, level, rng)
                .map_err(|err| InputError::Rejected(err.to_string()))
        },
    )?;

    let name = encounter.creature.name.clone();
    console.print(&format!("A wild {} appeared!\n{}", name, encounter.creature))?;

    if ask_yes_no(console, &format!("Do you want to catch {}? ", name))? {
        while !encounter.is_over() {
            console.print("Enter 'ATTACK' to attack.\nEnter anything else to flee.")?;
            let line = console.read_line("What do you want to do with the sea creature? ")?;
            match EncounterAction::parse(&line) {
                EncounterAction::Attack => {
                    let outcome = encounter.attack(&game.player, rng);
                    if let Some(outcome) = report_failure(console, outcome)? {
                        let hp_left = outcome.remaining_hp.max(BigDecimal::from(0));
                        let crit = if outcome.is_crit { " Critical hit!" } else { "" };
                        console.print(&format!(
                            "You dealt {} damage.{} {} has {} HP left.",
                            outcome.damage, crit, name, hp_left
                        ))?;
                    }
                }
                EncounterAction::Flee => {
                    report_failure(console, encounter.abandon())?;
                }
            }
        }
    } else {
        report_failure(console, encounter.abandon())?;
    }

    let result = encounter.resolve(&mut game.player);
    if let Some(result) = report_failure(console, result)? {
        let text = match result {
            EncounterResult::Caught {
                name,
                exp_reward,
                levels_gained,
            } => {
                let mut text = format!(
                    "You have successfully caught {}! You gained {} EXP.",
                    name, exp_reward
                );
                if levels_gained > 0 {
                    text.push_str(&format!(" You are now level {}!", game.player.level));
                }
                text
            }
            EncounterResult::Fled { name } => format!("{} fled!", name),
            EncounterResult::Abandoned { name } => format!("You left {} alone.", name),
        };
        console.print(&text)?;
    }
    Ok(())
}

fn go_shopping(game: &mut Game, console: &mut impl Console) -> io::Result<()> {
    if game.shop.is_empty() {
        return console.print(&format!("{} has nothing for sale.", game.shop.name));
    }
    print_numbered(
        console,
        &format!("Below is a list of fishing rods sold in {}.\n", game.shop.name),
        &game.shop.fishing_rods_sold,
    )?;
    console.print(&format!("You have {} coins.", game.player.coins))?;

    let index = prompt_index(
        console,
        "Please enter index of fishing rod you want to buy: ",
        game.shop.len(),
    )?;
    let rod = &game.shop.fishing_rods_sold[index];
    if report_failure(console, game.player.buy_fishing_rod(rod))?.is_some() {
        console.print(&format!("You bought {}.", rod.name))?;
    }
    Ok(())
}

fn upgrade_fishing_rod(game: &mut Game, console: &mut impl Console) -> io::Result<()> {
    if let Some(level) = report_failure(console, game.player.level_up_fishing_rod())? {
        console.print(&format!("Your fishing rod is now level {}.", level))?;
    }
    Ok(())
}

fn sell_fishing_rod(game: &mut Game, console: &mut impl Console) -> io::Result<()> {
    if game.player.fishing_rods_owned().is_empty() {
        return console.print("You do not have any fishing rods to sell.");
    }
    print_numbered(
        console,
        "Below is a list of fishing rods you have:\n",
        game.player.fishing_rods_owned(),
    )?;
    let index = prompt_index(
        console,
        "Please enter index of fishing rod you want to sell: ",
        game.player.fishing_rods_owned().len(),
    )?;
    if let Some(rod) = report_failure(console, game.player.sell_fishing_rod(index))? {
        console.print(&format!("You sold {} for {} coins.", rod.name, rod.coin_cost))?;
    }
    Ok(())
}

fn equip_fishing_rod(game: &mut Game, console: &mut impl Console) -> io::Result<()> {
    if game.player.fishing_rods_owned().is_empty() {
        return console.print("You do not have any fishing rods to equip.");
    }
    print_numbered(
        console,
        "Below is a list of fishing rods you have:\n",
        game.player.fishing_rods_owned(),
    )?;
    let index = prompt_index(
        console,
        "Please enter index of fishing rod you want to equip: ",
        game.player.fishing_rods_owned().len(),
    )?;
    if report_failure(console, game.player.equip_fishing_rod(index))?.is_some() {
        console.print(&format!(
            "Equipped. Your attack power is now {}.",
            game.player.attack_power()
        ))?;
    }
    Ok(())
}

fn unequip_fishing_rod(game: &mut Game, console: &mut impl Console) -> io::Result<()> {
    if report_failure(console, game.player.unequip_fishing_rod())?.is_some() {
        console.print(&format!(
            "Unequipped. Your attack power is now {}.",
            game.player.attack_power()
        ))?;
    }
    Ok(())
}
