//! Scan of the app manifest (`meta/snap.yaml`) for plug references.
//!
//! Only `apps.<name>.plugs` is read; the rest of the manifest is ignored.

use crate::error::{CheckError, Result};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, Default, Deserialize)]
pub struct SnapManifest {
    #[serde(default)]
    pub apps: BTreeMap<String, Option<AppEntry>>,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// One entry point. Plugs listed here are what the app may ask the host for.
pub struct AppEntry {
    #[serde(default)]
    pub plugs: Vec<String>,
}

impl SnapManifest {
    /// Read and parse the manifest. The manifest always ships with an app, so
    /// a missing file is an error here.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|err| CheckError::io(path, err))?;
        Self::parse(&contents).map_err(|err| CheckError::config(path, err.to_string()))
    }

    pub fn parse(contents: &str) -> Result<Self, serde_yaml::Error> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents)
    }

    /// Every plug name referenced by any app, deduplicated and sorted.
    pub fn referenced_plugs(&self) -> BTreeSet<String> {
        self.apps
            .values()
            .flatten()
            .flat_map(|app| app.plugs.iter().cloned())
            .collect()
    }
}
