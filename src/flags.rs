//! Persistent warning markers.
//!
//! The store is two zero-byte files in the per-user data directory. Presence
//! is the only thing that matters: a marker is never rewritten or removed.
//! Creation uses an exclusive open so two overlapping launches cannot both
//! observe "absent" and fail on each other's file.

use crate::error::{CheckError, Result};
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::PathBuf;

pub const ALREADY_WARNED_FILE: &str = "already_warned_plugs";
pub const WARNINGS_DISABLED_FILE: &str = "plug_warnings_disabled";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    /// The user has seen the optional-plug warning once.
    AlreadyWarned,
    /// Every required plug was connected on some earlier run; checks stop.
    WarningsDisabled,
}

impl Flag {
    pub fn file_name(&self) -> &'static str {
        match self {
            Flag::AlreadyWarned => ALREADY_WARNED_FILE,
            Flag::WarningsDisabled => WARNINGS_DISABLED_FILE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct FlagStore {
    root: PathBuf,
}

impl FlagStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path(&self, flag: Flag) -> PathBuf {
        self.root.join(flag.file_name())
    }

    /// Whether the marker is present. A missing file is `Ok(false)`.
    pub fn exists(&self, flag: Flag) -> Result<bool> {
        let path = self.path(flag);
        match fs::metadata(&path) {
            Ok(_) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(CheckError::io(path, err)),
        }
    }

    /// Create the marker if absent. Creating an existing marker succeeds.
    pub fn create(&self, flag: Flag) -> Result<()> {
        let path = self.path(flag);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                tracing::debug!(marker = %path.display(), "created marker");
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::AlreadyExists => Ok(()),
            Err(err) => Err(CheckError::io(path, err)),
        }
    }
}
