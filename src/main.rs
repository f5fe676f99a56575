use anyhow::Context;
use chrono::Utc;
use fishing_tycoon::build_info;
use fishing_tycoon::config::{CliAction, GameConfig, HELP_TEXT};
use fishing_tycoon::core::game_loop::{run_session, start_game, WELCOME_TEXT};
use fishing_tycoon::save_manager::SaveManager;
use fishing_tycoon::ui::{Console, TerminalConsole};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let action = GameConfig::from_env()
        .and_then(|config| config.apply_args(std::env::args().skip(1)));
    let config = match action {
        Ok(CliAction::Run(config)) => config,
        Ok(CliAction::Help) => {
            println!("{}", HELP_TEXT);
            return Ok(());
        }
        Ok(CliAction::Version) => {
            println!("{}", build_info::version_line());
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(2);
        }
    };

    init_tracing(&config.log_filter);

    let save_manager = match &config.save_path {
        Some(path) => SaveManager::with_path(path.clone()),
        None => SaveManager::new().context("could not set up the save directory")?,
    };
    info!(path = %save_manager.path().display(), "Using save file");

    let mut console = TerminalConsole::new();
    console.print(WELCOME_TEXT)?;

    let mut game = match start_game(&save_manager, &config, &mut console, Utc::now().timestamp()) {
        Ok(game) => game,
        // Input closed before a game existed; nothing to save.
        Err(err) if err.kind() == std::io::ErrorKind::UnexpectedEof => return Ok(()),
        Err(err) => return Err(err).context("could not start the game"),
    };

    let mut rng = rand::thread_rng();
    let session = run_session(&mut game, &mut console, &mut rng, || Utc::now().timestamp());

    // Save even if the session ended on an I/O error.
    save_manager
        .save(&game, Utc::now().timestamp())
        .with_context(|| format!("could not save to {}", save_manager.path().display()))?;
    session.context("terminal I/O failed")?;

    console.print("Game saved. See you next time!")?;
    Ok(())
}
