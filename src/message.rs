//! Rendering of the warning text shown before launch.

use crate::declarations::PlugStatus;
use crate::engine::WarningSnapshot;

pub const OPTIONAL_HEADER: &str = "Consider connecting the following interfaces:";
pub const REQUIRED_HEADER: &str =
    "The follow interfaces must be connected for app to work properly:";

/// Build the stderr message for a snapshot. Connected plugs never appear and
/// an empty string means there is nothing to say.
pub fn format_warnings(snapshot: &WarningSnapshot) -> String {
    if snapshot.warnings_disabled {
        return String::new();
    }

    let mut msg = String::new();
    if !snapshot.already_warned {
        let lines = plug_lines(snapshot.disconnected_optional());
        if !lines.is_empty() {
            msg.push_str(OPTIONAL_HEADER);
            msg.push('\n');
            msg.push_str(&lines);
        }
    }

    let required = plug_lines(snapshot.disconnected_required());
    if !required.is_empty() {
        if !msg.is_empty() {
            msg.push('\n');
        }
        msg.push_str(REQUIRED_HEADER);
        msg.push('\n');
        msg.push_str(&required);
    }

    if !msg.is_empty() {
        msg.push_str("\n\n");
    }
    msg
}

fn plug_lines<'a>(plugs: impl Iterator<Item = (&'a String, &'a PlugStatus)>) -> String {
    plugs
        .map(|(name, plug)| format!("\t{name}\t\t- {}\n", plug.reason))
        .collect()
}
