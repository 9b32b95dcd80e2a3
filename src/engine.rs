//! Warning-state resolution.
//!
//! `gather_snapshot` reads the markers, loads declarations, folds in the
//! manifest scan and asks the oracle about every surviving plug. The snapshot
//! it returns is what both the message and the marker write-back are computed
//! from; neither step re-reads disk or re-queries the oracle.
//!
//! Two rules shape everything here:
//! - once WarningsDisabled exists nothing is loaded, queried or written again;
//! - once AlreadyWarned exists optional plugs are dropped entirely, even ones
//!   that appeared in a newer manifest.

use crate::config::SnapLayout;
use crate::declarations::{PlugMap, PlugStatus, load_declarations, merge_implicit};
use crate::error::Result;
use crate::flags::{Flag, FlagStore};
use crate::manifest::SnapManifest;
use crate::oracle::ConnectionOracle;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WarningSnapshot {
    /// When set, no other field was computed.
    pub warnings_disabled: bool,
    pub already_warned: bool,
    pub required: PlugMap,
    /// Always empty when `already_warned` is set.
    pub optional: PlugMap,
}

impl WarningSnapshot {
    pub fn disabled() -> Self {
        Self {
            warnings_disabled: true,
            ..Self::default()
        }
    }

    /// True when no required plug is disconnected (vacuously for none).
    pub fn all_required_connected(&self) -> bool {
        self.required.values().all(|plug| plug.is_connected())
    }

    pub fn disconnected_required(&self) -> impl Iterator<Item = (&String, &PlugStatus)> {
        self.required.iter().filter(|(_, plug)| !plug.is_connected())
    }

    pub fn disconnected_optional(&self) -> impl Iterator<Item = (&String, &PlugStatus)> {
        self.optional.iter().filter(|(_, plug)| !plug.is_connected())
    }
}

/// Resolve the warning state for this launch.
pub fn gather_snapshot<O>(layout: &SnapLayout, flags: &FlagStore, oracle: &O) -> Result<WarningSnapshot>
where
    O: ConnectionOracle + ?Sized,
{
    if flags.exists(Flag::WarningsDisabled)? {
        tracing::debug!("plug warnings disabled; skipping checks");
        return Ok(WarningSnapshot::disabled());
    }
    let already_warned = flags.exists(Flag::AlreadyWarned)?;

    let mut declarations = load_declarations(&layout.declarations_path())?;
    if already_warned {
        declarations.optional.clear();
    } else {
        let manifest = SnapManifest::load(&layout.manifest_path())?;
        declarations = merge_implicit(&declarations, manifest.referenced_plugs());
    }

    let mut required = declarations.required;
    let mut optional = declarations.optional;
    for (name, plug) in required.iter_mut() {
        plug.connected = Some(oracle.is_connected(name)?);
        optional.remove(name);
    }
    for (name, plug) in optional.iter_mut() {
        plug.connected = Some(oracle.is_connected(name)?);
    }

    tracing::debug!(
        already_warned,
        required = required.len(),
        optional = optional.len(),
        "resolved plug state"
    );
    Ok(WarningSnapshot {
        warnings_disabled: false,
        already_warned,
        required,
        optional,
    })
}

/// Persist what this run learned. Call after the message has been shown.
pub fn write_back(flags: &FlagStore, snapshot: &WarningSnapshot) -> Result<()> {
    if snapshot.warnings_disabled {
        return Ok(());
    }
    if !snapshot.already_warned {
        flags.create(Flag::AlreadyWarned)?;
    }
    if snapshot.all_required_connected() {
        tracing::debug!("all required plugs connected; disabling future checks");
        flags.create(Flag::WarningsDisabled)?;
    }
    Ok(())
}
