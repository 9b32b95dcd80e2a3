//! Environment ingestion and the fixed on-disk layout.
//!
//! `SNAP` and `SNAP_USER_DATA` are mandatory; nothing else runs without them.
//! `PLUGCHECK_ORACLE` replaces the `snapctl is-connected` command.

use crate::error::{CheckError, Result};
use crate::flags::FlagStore;
use crate::oracle::CommandOracle;
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

pub const SNAP_ENV: &str = "SNAP";
pub const USER_DATA_ENV: &str = "SNAP_USER_DATA";
pub const ORACLE_ENV: &str = "PLUGCHECK_ORACLE";

pub const DECLARATIONS_FILE: &str = "plugs.yaml";
pub const MANIFEST_FILE: &str = "meta/snap.yaml";

#[derive(Clone, Debug, PartialEq, Eq)]
/// Installation directory plus the per-user writable directory.
pub struct SnapLayout {
    pub snap_dir: PathBuf,
    pub user_data_dir: PathBuf,
}

impl SnapLayout {
    pub fn new(snap_dir: impl Into<PathBuf>, user_data_dir: impl Into<PathBuf>) -> Self {
        Self {
            snap_dir: snap_dir.into(),
            user_data_dir: user_data_dir.into(),
        }
    }

    pub fn declarations_path(&self) -> PathBuf {
        self.snap_dir.join(DECLARATIONS_FILE)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.snap_dir.join(MANIFEST_FILE)
    }

    pub fn flag_store(&self) -> FlagStore {
        FlagStore::new(&self.user_data_dir)
    }
}

#[derive(Clone, Debug)]
pub struct CheckConfig {
    pub layout: SnapLayout,
    pub oracle: CommandOracle,
}

impl CheckConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var_os(key))
    }

    /// Build from an arbitrary variable source. Empty values count as unset;
    /// paths are taken as raw OS strings and need not be UTF-8.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or(CheckError::MissingEnv(key))
        };
        let snap_dir = required(SNAP_ENV)?;
        let user_data_dir = required(USER_DATA_ENV)?;
        let oracle = lookup(ORACLE_ENV)
            .and_then(|line| CommandOracle::from_command_line(&line.to_string_lossy()))
            .unwrap_or_default();

        Ok(Self {
            layout: SnapLayout::new(snap_dir, user_data_dir),
            oracle,
        })
    }
}
