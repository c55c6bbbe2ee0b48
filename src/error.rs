//! Startup error types
//!
//! The simulation itself cannot fail; everything here happens before the
//! first tick.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Problem loading or validating a [`Config`](crate::Config)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Anything that stops the game from starting
#[derive(Error, Debug)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to initialize {backend} backend: {source}")]
    Backend {
        backend: &'static str,
        #[source]
        source: io::Error,
    },
}

impl InitError {
    pub fn backend(backend: &'static str, source: io::Error) -> Self {
        Self::Backend { backend, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_cause() {
        let err = InitError::backend(
            "framebuffer",
            io::Error::new(io::ErrorKind::NotFound, "no such device"),
        );
        assert_eq!(
            err.to_string(),
            "failed to initialize framebuffer backend: no such device"
        );

        let err: InitError = ConfigError::invalid("tick_rate_hz must be positive").into();
        assert_eq!(err.to_string(), "invalid config: tick_rate_hz must be positive");
    }

    #[test]
    fn test_io_error_shows_path() {
        let err = ConfigError::Io {
            path: PathBuf::from("missing.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read config missing.json: not found");
    }
}
