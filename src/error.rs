//! Game-specific error types.
//!
//! Gameplay itself has no failure modes; these cover the ambient edges of the
//! crate (reading `assets/game.toml`, sampling sprite images for collision
//! masks).  Callers degrade gracefully instead of panicking: config errors fall
//! back to compiled defaults, mask errors fall back to a solid bounding box.
//!
//! ## Usage
//!
//! ```rust
//! use alien_blaster::config::GameConfig;
//! use alien_blaster::error::GameResult;
//!
//! fn check(config: &GameConfig) -> GameResult<()> {
//!     config.validate()?;
//!     Ok(())
//! }
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error enum for Alien Blaster.
#[derive(Debug)]
pub enum GameError {
    /// The config file exists but could not be read.
    ConfigRead {
        /// Path that was attempted.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The config file is not valid TOML or has mistyped keys.
    ConfigParse {
        /// Path of the offending file.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// A config value parsed fine but is outside its usable range.
    InvalidConfig {
        /// Name of the field (for logging).
        name: &'static str,
        /// The rejected value, rendered as text.
        value: String,
        /// Human-readable description of what is accepted.
        expected: &'static str,
    },

    /// A sprite image could not be sampled pixel-by-pixel, usually because it
    /// uses a compressed texture format.
    TextureAccess {
        /// Which sprite was being baked.
        context: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::ConfigRead { path, source } => {
                write!(f, "failed to read config '{}': {}", path.display(), source)
            }
            GameError::ConfigParse { path, message } => {
                write!(f, "failed to parse config '{}': {}", path.display(), message)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is invalid (expected {})",
                name, value, expected
            ),
            GameError::TextureAccess { context } => {
                write!(f, "cannot read pixels of the {} sprite", context)
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn invalid_config_message_names_field_and_range() {
        let err = GameError::InvalidConfig {
            name: "meteor_speed_min",
            value: "600".to_string(),
            expected: "<= meteor_speed_max",
        };
        let text = err.to_string();
        assert!(text.contains("meteor_speed_min"));
        assert!(text.contains("600"));
        assert!(text.contains("<= meteor_speed_max"));
    }

    #[test]
    fn config_read_exposes_io_source() {
        let err = GameError::ConfigRead {
            path: PathBuf::from("assets/game.toml"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("assets/game.toml"));
    }
}
