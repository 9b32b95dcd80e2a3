//! Error kinds surfaced by the check phase and the launcher.
//!
//! "Not found" for markers and the declaration file never reaches this type;
//! those are recovered where they happen and read as `false` / empty.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = CheckError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum CheckError {
    /// Declaration file or manifest exists but does not parse.
    #[error("invalid {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// Unexpected I/O failure (permissions, disk) on a marker or input file.
    #[error("unable to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The oracle command itself could not be run. A negative answer is not
    /// an error.
    #[error("unable to query connection status of plug '{plug}': {source}")]
    Oracle {
        plug: String,
        #[source]
        source: io::Error,
    },

    #[error("unable to start {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("could not read {0} environment variable")]
    MissingEnv(&'static str),
}

impl CheckError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CheckError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn config(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CheckError::Config {
            path: path.into(),
            message: message.into(),
        }
    }
}
