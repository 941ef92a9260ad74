use std::fmt;
use std::path::PathBuf;

/// Errors that can stop the game from starting
///
/// Nothing in the frame loop itself is fallible; everything here happens
/// once, before the first frame.
#[derive(Debug)]
pub enum GameError {
    /// The embedded sprite image could not be decoded
    AssetDecode(String),

    /// A config file exists but could not be read or parsed
    Config {
        path: PathBuf,
        reason: String,
    },

    /// SDL failed to initialize a subsystem, window, or canvas
    Sdl(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::AssetDecode(msg) => {
                write!(f, "Failed to decode sprite image: {}", msg)
            }
            GameError::Config { path, reason } => {
                write!(f, "Invalid config {}: {}", path.display(), reason)
            }
            GameError::Sdl(msg) => {
                write!(f, "SDL error: {}", msg)
            }
        }
    }
}

impl std::error::Error for GameError {}

impl From<GameError> for String {
    fn from(error: GameError) -> Self {
        error.to_string()
    }
}
