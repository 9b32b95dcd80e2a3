//! Print the resolved plug snapshot as JSON without touching the markers.
//!
//! Reads the same environment as `plugcheck`. Useful for packagers checking
//! what a first launch would warn about; markers already present still apply.

use anyhow::{Context, Result};
use plugcheck::runtime::init_tracing;
use plugcheck::{CheckConfig, format_warnings, gather_snapshot};
use serde_json::json;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    if let Some(arg) = std::env::args().nth(1) {
        match arg.as_str() {
            "-h" | "--help" => usage(0),
            other => {
                eprintln!("Unknown argument: {other}");
                usage(1);
            }
        }
    }

    let config = CheckConfig::from_env()?;
    let flags = config.layout.flag_store();
    let snapshot = gather_snapshot(&config.layout, &flags, &config.oracle)
        .context("checking plug connections")?;
    let report = json!({
        "snap_dir": config.layout.snap_dir.to_string_lossy(),
        "user_data_dir": config.layout.user_data_dir.to_string_lossy(),
        "snapshot": snapshot,
        "message": format_warnings(&snapshot),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: plugcheck-report\n\nEnvironment:\n  SNAP               App installation directory (required).\n  SNAP_USER_DATA     Per-user data directory holding the markers (required).\n  PLUGCHECK_ORACLE   Command used instead of 'snapctl is-connected'.\n  PLUGCHECK_LOG      Log filter (default: warn)."
    );
    std::process::exit(code);
}
