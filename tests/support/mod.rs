#![allow(dead_code)]

use anyhow::{Context, Result};
use plugcheck::{Flag, FlagStore, SnapLayout};
use std::cell::RefCell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A throwaway install directory and user data directory.
pub struct SnapFixture {
    pub snap: TempDir,
    pub data: TempDir,
}

impl SnapFixture {
    pub fn new(snap_yaml: &str) -> Result<Self> {
        let snap = TempDir::new().context("failed to allocate snap dir")?;
        let data = TempDir::new().context("failed to allocate user data dir")?;
        fs::create_dir_all(snap.path().join("meta"))?;
        fs::write(snap.path().join("meta/snap.yaml"), snap_yaml)?;
        Ok(Self { snap, data })
    }

    pub fn with_declarations(self, plugs_yaml: &str) -> Result<Self> {
        fs::write(self.snap.path().join("plugs.yaml"), plugs_yaml)?;
        Ok(self)
    }

    pub fn layout(&self) -> SnapLayout {
        SnapLayout::new(self.snap.path(), self.data.path())
    }

    pub fn flags(&self) -> FlagStore {
        self.layout().flag_store()
    }

    pub fn has(&self, flag: Flag) -> bool {
        self.data.path().join(flag.file_name()).exists()
    }

    pub fn set(&self, flag: Flag) -> Result<()> {
        fs::write(self.data.path().join(flag.file_name()), "")?;
        Ok(())
    }

    /// Names of everything in the user data directory.
    pub fn data_entries(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(self.data.path())? {
            names.insert(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// In-process oracle that records every query.
#[derive(Default)]
pub struct RecordingOracle {
    connected: BTreeSet<String>,
    pub queries: RefCell<Vec<String>>,
}

impl RecordingOracle {
    pub fn connected(names: &[&str]) -> Self {
        Self {
            connected: names.iter().map(|n| n.to_string()).collect(),
            queries: RefCell::default(),
        }
    }

    pub fn query_count(&self) -> usize {
        self.queries.borrow().len()
    }
}

impl plugcheck::ConnectionOracle for RecordingOracle {
    fn is_connected(&self, plug: &str) -> plugcheck::Result<bool> {
        self.queries.borrow_mut().push(plug.to_string());
        Ok(self.connected.contains(plug))
    }
}

/// Write a shell script standing in for `snapctl is-connected`: exits 0 for
/// the listed plugs and 1 otherwise. Every query is appended to `log`.
pub fn write_oracle_script(dir: &Path, connected: &[&str], log: &Path) -> Result<PathBuf> {
    let path = dir.join("fake-snapctl");
    let cases = if connected.is_empty() {
        String::from("__none__")
    } else {
        connected.join("|")
    };
    let script = format!(
        "#!/bin/sh\n# args: is-connected <plug>\necho \"$2\" >> '{}'\ncase \"$2\" in\n  {cases}) exit 0 ;;\n  *) exit 1 ;;\nesac\n",
        log.display()
    );
    fs::write(&path, script)?;
    make_executable(&path)?;
    Ok(path)
}

pub fn plugcheck_command(fixture: &SnapFixture, oracle: &Path) -> Command {
    snap_command(env!("CARGO_BIN_EXE_plugcheck"), fixture, oracle)
}

pub fn report_command(fixture: &SnapFixture, oracle: &Path) -> Command {
    snap_command(env!("CARGO_BIN_EXE_plugcheck-report"), fixture, oracle)
}

fn snap_command(program: &str, fixture: &SnapFixture, oracle: &Path) -> Command {
    let mut cmd = Command::new(program);
    cmd.env("SNAP", fixture.snap.path())
        .env("SNAP_USER_DATA", fixture.data.path())
        .env("PLUGCHECK_ORACLE", format!("{} is-connected", oracle.display()))
        .env_remove("PLUGCHECK_LOG");
    cmd
}

pub fn make_executable(path: &Path) -> Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)?;
    }
    Ok(())
}
