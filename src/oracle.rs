//! Connection-status oracle.
//!
//! The engine only sees the `ConnectionOracle` trait. Production code asks
//! `snapctl is-connected <plug>`: exit status 0 means connected, any other
//! status means not connected, and failing to run the command at all is an
//! error. There is no timeout; a hung query blocks the launch.

use crate::error::{CheckError, Result};
use std::ffi::OsString;
use std::process::{Command, Stdio};

pub const DEFAULT_ORACLE_PROGRAM: &str = "snapctl";
pub const DEFAULT_ORACLE_ARGS: &[&str] = &["is-connected"];

pub trait ConnectionOracle {
    fn is_connected(&self, plug: &str) -> Result<bool>;
}

impl<T: ConnectionOracle + ?Sized> ConnectionOracle for &T {
    fn is_connected(&self, plug: &str) -> Result<bool> {
        (**self).is_connected(plug)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Oracle backed by an external command; the plug name is appended as the
/// final argument.
pub struct CommandOracle {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl Default for CommandOracle {
    fn default() -> Self {
        Self {
            program: OsString::from(DEFAULT_ORACLE_PROGRAM),
            args: DEFAULT_ORACLE_ARGS.iter().map(OsString::from).collect(),
        }
    }
}

impl CommandOracle {
    /// Build from a whitespace-separated command line. Blank input yields
    /// `None` so callers fall back to the default.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(OsString::from);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

impl ConnectionOracle for CommandOracle {
    fn is_connected(&self, plug: &str) -> Result<bool> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(plug)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|source| CheckError::Oracle {
                plug: plug.to_string(),
                source,
            })?;
        tracing::trace!(plug, ?status, "oracle answered");
        Ok(status.success())
    }
}
