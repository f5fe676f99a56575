//! Runtime options from the command line and the environment.

use crate::core::constants::{DEFAULT_LOG_FILTER, ENV_OFFLINE_PROGRESS, ENV_SAVE_PATH};
use std::path::PathBuf;

pub const HELP_TEXT: &str = "\
Fishing Tycoon - Terminal Idle Fishing Game

Usage: fishing-tycoon [OPTIONS]

Options:
  --save <path>    Use this save file instead of the default location
  --new            Start a new game even if a save file exists
  --no-offline     Do not credit time spent away since the last save
  -v, --version    Show version information
  -h, --help       Show this help message

Environment:
  FISHING_TYCOON_SAVE      Same as --save
  FISHING_TYCOON_OFFLINE   Set to 0 to disable offline progression
  RUST_LOG                 Log filter (logs go to stderr)";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown argument '{0}' (try --help)")]
    UnknownArgument(String),

    #[error("{0} needs a value")]
    MissingValue(&'static str),

    #[error("{name} must be 0 or 1, got '{value}'")]
    InvalidEnv { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// `None` means the platform default location.
    pub save_path: Option<PathBuf>,
    pub new_game: bool,
    pub offline_progress: bool,
    /// Used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            save_path: None,
            new_game: false,
            offline_progress: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(GameConfig),
    Help,
    Version,
}

impl GameConfig {
    /// Applies `FISHING_TYCOON_*` variables, looked up through `lookup`.
    pub fn from_env_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(path) = lookup(ENV_SAVE_PATH).filter(|p| !p.is_empty()) {
            config.save_path = Some(PathBuf::from(path));
        }
        if let Some(value) = lookup(ENV_OFFLINE_PROGRESS) {
            config.offline_progress = match value.trim() {
                "1" => true,
                "0" => false,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        name: ENV_OFFLINE_PROGRESS,
                        value,
                    })
                }
            };
        }
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Applies command-line arguments (without the program name) on top of
    /// `self`. Arguments win over the environment.
    pub fn apply_args<I>(mut self, args: I) -> Result<CliAction, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(CliAction::Help),
                "--version" | "-v" => return Ok(CliAction::Version),
                "--new" => self.new_game = true,
                "--no-offline" => self.offline_progress = false,
                "--save" => {
                    let path = args.next().ok_or(ConfigError::MissingValue("--save"))?;
                    self.save_path = Some(PathBuf::from(path));
                }
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }
        Ok(CliAction::Run(self))
    }
}
