use crate::core::constants::{SAVE_DIR_NAME, SAVE_FILE_NAME, SAVE_VERSION, SAVE_VERSION_MAGIC};
use crate::core::game_state::Game;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

const HEADER_LEN: usize = 8 + 4;
const CHECKSUM_LEN: usize = 32;

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("not a Fishing Tycoon save (expected magic 0x{expected:016X}, got 0x{found:016X})")]
    BadMagic { expected: u64, found: u64 },

    #[error("checksum verification failed")]
    ChecksumMismatch,

    #[error("save data could not be decoded: {0}")]
    Json(#[from] serde_json::Error),

    #[error("save version {found} is newer than the supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("save data is invalid: {0}")]
    Invalid(String),
}

/// Written form of the save payload.
#[derive(Serialize)]
struct GameSaveRecord<'a> {
    version: u32,
    saved_at: i64,
    game: &'a Game,
}

#[derive(Deserialize)]
struct GameSaveData {
    game: Game,
}

/// Read before the full payload so a newer save is reported as such instead
/// of as a decode failure.
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

fn checksum(header: &[u8], payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(header);
    hasher.update(payload);
    let mut digest = [0u8; CHECKSUM_LEN];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Serializes a game into the save file format.
///
/// File format:
/// - Version magic (8 bytes, little endian)
/// - Payload length (4 bytes, little endian)
/// - JSON payload `{ version, saved_at, game }`
/// - SHA256 checksum over everything before it (32 bytes)
pub fn encode(game: &Game, saved_at: i64) -> Result<Vec<u8>, SaveError> {
    let payload = serde_json::to_vec(&GameSaveRecord {
        version: SAVE_VERSION,
        saved_at,
        game,
    })?;
    let payload_len = u32::try_from(payload.len())
        .map_err(|_| SaveError::Invalid(format!("payload of {} bytes is too large", payload.len())))?;

    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len() + CHECKSUM_LEN);
    bytes.extend_from_slice(&SAVE_VERSION_MAGIC.to_le_bytes());
    bytes.extend_from_slice(&payload_len.to_le_bytes());
    bytes.extend_from_slice(&payload);
    let digest = checksum(&bytes[..HEADER_LEN], &payload);
    bytes.extend_from_slice(&digest);
    Ok(bytes)
}

/// Parses and verifies the save file format.
pub fn decode(bytes: &[u8]) -> Result<Game, SaveError> {
    if bytes.len() < HEADER_LEN + CHECKSUM_LEN {
        return Err(SaveError::Invalid(format!("file is only {} bytes", bytes.len())));
    }

    let mut magic_bytes = [0u8; 8];
    magic_bytes.copy_from_slice(&bytes[..8]);
    let magic = u64::from_le_bytes(magic_bytes);
    if magic != SAVE_VERSION_MAGIC {
        return Err(SaveError::BadMagic {
            expected: SAVE_VERSION_MAGIC,
            found: magic,
        });
    }

    let mut length_bytes = [0u8; 4];
    length_bytes.copy_from_slice(&bytes[8..HEADER_LEN]);
    let payload_len = u32::from_le_bytes(length_bytes) as usize;
    if bytes.len() != HEADER_LEN + payload_len + CHECKSUM_LEN {
        return Err(SaveError::Invalid(format!(
            "declared payload of {} bytes does not match file size {}",
            payload_len,
            bytes.len()
        )));
    }

    let payload = &bytes[HEADER_LEN..HEADER_LEN + payload_len];
    let stored_checksum = &bytes[HEADER_LEN + payload_len..];
    if checksum(&bytes[..HEADER_LEN], payload).as_slice() != stored_checksum {
        return Err(SaveError::ChecksumMismatch);
    }

    let probe: VersionProbe = serde_json::from_slice(payload)?;
    if probe.version > SAVE_VERSION {
        return Err(SaveError::UnsupportedVersion {
            found: probe.version,
            supported: SAVE_VERSION,
        });
    }

    let data: GameSaveData = serde_json::from_slice(payload)?;
    data.game.player.validate().map_err(SaveError::Invalid)?;
    Ok(data.game)
}

/// Manages saving and loading the game with a checksummed file format
pub struct SaveManager {
    save_path: PathBuf,
}

impl SaveManager {
    /// Uses the platform config directory from the `directories` crate.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", SAVE_DIR_NAME).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            save_path: config_dir.join(SAVE_FILE_NAME),
        })
    }

    pub fn with_path(save_path: impl Into<PathBuf>) -> Self {
        Self {
            save_path: save_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.save_path
    }

    /// Writes the game to a temporary file, then renames it over the save.
    pub fn save(&self, game: &Game, saved_at: i64) -> Result<(), SaveError> {
        let bytes = encode(game, saved_at)?;

        if let Some(parent) = self.save_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp_path = self.save_path.with_extension("tmp");
        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.save_path)?;

        info!(path = %self.save_path.display(), bytes = bytes.len(), "Game saved");
        Ok(())
    }

    pub fn load(&self) -> Result<Game, SaveError> {
        let bytes = fs::read(&self.save_path)?;
        decode(&bytes)
    }

    pub fn save_exists(&self) -> bool {
        self.save_path.exists()
    }

    /// Moves an unreadable save out of the way and returns where it went.
    pub fn quarantine(&self) -> io::Result<PathBuf> {
        let corrupt_path = self.save_path.with_extension("corrupt");
        fs::rename(&self.save_path, &corrupt_path)?;
        Ok(corrupt_path)
    }
}
