//! Launch of the wrapped command.
//!
//! Standard streams are inherited so the child owns the terminal. Its exit
//! code is handed back verbatim; a child killed by a signal has no code and
//! maps to 1.

use crate::error::{CheckError, Result};
use std::ffi::OsString;
use std::process::{Command, Stdio};

pub const LAUNCH_FAILURE_EXIT: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
/// Program and arguments used to start the wrapped app.
pub struct CommandSpec {
    pub program: OsString,
    pub args: Vec<OsString>,
}

impl CommandSpec {
    /// First argument is the program, the rest are forwarded untouched.
    /// Returns `None` when there is nothing to launch.
    pub fn from_args<I>(args: I) -> Option<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut args = args.into_iter();
        let program = args.next()?;
        Some(Self {
            program,
            args: args.collect(),
        })
    }
}

/// Run the command to completion and return the exit code to propagate.
pub fn launch(spec: &CommandSpec) -> Result<i32> {
    let status = Command::new(&spec.program)
        .args(&spec.args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|source| CheckError::Launch {
            program: spec.program.to_string_lossy().into_owned(),
            source,
        })?;

    match status.code() {
        Some(code) => Ok(code),
        None => {
            tracing::debug!(?status, "wrapped command terminated without exit code");
            Ok(LAUNCH_FAILURE_EXIT)
        }
    }
}
