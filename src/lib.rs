//! Shared library for the plugcheck launch wrapper.
//!
//! A confined app's launcher runs `plugcheck COMMAND ARGS...` instead of the
//! command itself. Before exec'ing, plugcheck works out which declared plugs
//! are disconnected, prints a warning for them, and records two markers in the
//! user's data directory so the optional-plug warning is shown only once and
//! the whole check stops once every required plug has been connected.
//!
//! The binaries depend on the functions re-exported here: configuration from
//! the environment, snapshot resolution, message rendering, marker write-back
//! and the launcher.

pub mod config;
pub mod declarations;
pub mod engine;
pub mod error;
pub mod flags;
pub mod launcher;
pub mod manifest;
pub mod message;
pub mod oracle;
pub mod runtime;

pub use config::{CheckConfig, SnapLayout};
pub use declarations::{Declarations, PlugMap, PlugStatus, load_declarations, merge_implicit};
pub use engine::{WarningSnapshot, gather_snapshot, write_back};
pub use error::{CheckError, Result};
pub use flags::{Flag, FlagStore};
pub use launcher::{CommandSpec, LAUNCH_FAILURE_EXIT, launch};
pub use manifest::SnapManifest;
pub use message::format_warnings;
pub use oracle::{CommandOracle, ConnectionOracle};
