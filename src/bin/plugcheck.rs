//! Launch wrapper: check plugs, warn, record markers, then run the app.
//!
//! Usage: plugcheck [COMMAND [ARGS...]]
//!
//! Check-phase failures are reported on stderr and abort before the command
//! starts. Once the command is running its exit code is propagated verbatim;
//! a command that cannot be started exits 1 without a message.

use anyhow::{Context, Result};
use plugcheck::runtime::init_tracing;
use plugcheck::{
    CheckConfig, CommandSpec, LAUNCH_FAILURE_EXIT, format_warnings, gather_snapshot, launch,
    write_back,
};
use std::env;
use std::io::{self, Write};

fn main() {
    init_tracing();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let command = CommandSpec::from_args(env::args_os().skip(1));
    let config = CheckConfig::from_env()?;
    let flags = config.layout.flag_store();

    let snapshot = gather_snapshot(&config.layout, &flags, &config.oracle)
        .context("checking plug connections")?;
    let message = format_warnings(&snapshot);
    if !message.is_empty() {
        let mut stderr = io::stderr().lock();
        stderr.write_all(message.as_bytes())?;
        stderr.flush()?;
    }
    write_back(&flags, &snapshot).context("recording plug warning state")?;

    let Some(command) = command else {
        return Ok(0);
    };
    match launch(&command) {
        Ok(code) => Ok(code),
        Err(err) => {
            tracing::debug!(error = %err, "wrapped command did not start");
            Ok(LAUNCH_FAILURE_EXIT)
        }
    }
}
