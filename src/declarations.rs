//! Explicit plug declarations shipped with the app (`plugs.yaml`).
//!
//! The file maps plug names to `{required, reason}`. It is optional: an app
//! without one relies entirely on the manifest scan, which can only ever
//! produce optional, reasonless entries. Explicit entries always win over
//! anything discovered later, and `merge_implicit` is the only place the two
//! sources meet.

use crate::error::{CheckError, Result};
use jsonschema::JSONSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
/// One declared plug and, once queried, whether it is connected.
pub struct PlugStatus {
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub reason: String,
    /// `None` until the oracle has been asked.
    #[serde(default, skip_deserializing)]
    pub connected: Option<bool>,
}

impl PlugStatus {
    pub fn required(reason: impl Into<String>) -> Self {
        Self {
            required: true,
            reason: reason.into(),
            connected: None,
        }
    }

    pub fn optional(reason: impl Into<String>) -> Self {
        Self {
            required: false,
            reason: reason.into(),
            connected: None,
        }
    }

    /// True only when the oracle answered "connected".
    pub fn is_connected(&self) -> bool {
        self.connected == Some(true)
    }
}

pub type PlugMap = BTreeMap<String, PlugStatus>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Declarations partitioned by the `required` field.
pub struct Declarations {
    pub required: PlugMap,
    pub optional: PlugMap,
}

impl Declarations {
    pub fn contains(&self, name: &str) -> bool {
        self.required.contains_key(name) || self.optional.contains_key(name)
    }

    fn insert(&mut self, name: String, status: PlugStatus) {
        if status.required {
            self.required.insert(name, status);
        } else {
            self.optional.insert(name, status);
        }
    }
}

fn declaration_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": ["object", "null"],
        "additionalProperties": {
            "type": ["object", "null"],
            "properties": {
                "required": {"type": "boolean"},
                "reason": {"type": "string"}
            }
        }
    })
}

/// Load `plugs.yaml`. A missing file yields empty declarations.
pub fn load_declarations(path: &Path) -> Result<Declarations> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no plug declarations shipped");
            return Ok(Declarations::default());
        }
        Err(err) => return Err(CheckError::io(path, err)),
    };
    let declarations = parse_declarations(&contents).map_err(|msg| CheckError::config(path, msg))?;
    tracing::debug!(
        path = %path.display(),
        required = declarations.required.len(),
        optional = declarations.optional.len(),
        "loaded plug declarations"
    );
    Ok(declarations)
}

/// Parse declaration text. Errors come back as a message so the caller can
/// attach the file it came from.
pub fn parse_declarations(contents: &str) -> std::result::Result<Declarations, String> {
    if contents.trim().is_empty() {
        return Ok(Declarations::default());
    }
    let value: Value = serde_yaml::from_str(contents).map_err(|err| err.to_string())?;
    validate_declarations(&value)?;
    if value.is_null() {
        return Ok(Declarations::default());
    }

    let entries: BTreeMap<String, Option<PlugStatus>> =
        serde_json::from_value(value).map_err(|err| err.to_string())?;
    let mut declarations = Declarations::default();
    for (name, status) in entries {
        declarations.insert(name, status.unwrap_or_default());
    }
    Ok(declarations)
}

fn validate_declarations(value: &Value) -> std::result::Result<(), String> {
    let schema = declaration_schema();
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| format!("declaration schema failed to compile: {err}"))?;
    if let Err(errors) = compiled.validate(value) {
        let details = errors
            .map(|err| {
                let pointer = err.instance_path.to_string();
                if pointer.is_empty() {
                    err.to_string()
                } else {
                    format!("{pointer}: {err}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n");
        return Err(format!("failed schema validation:\n{details}"));
    }
    Ok(())
}

/// Add plugs discovered elsewhere as optional, reasonless entries.
///
/// Names already declared (required or optional) keep their explicit entry.
pub fn merge_implicit<I, S>(explicit: &Declarations, discovered: I) -> Declarations
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut merged = explicit.clone();
    for name in discovered {
        let name = name.into();
        if merged.contains(&name) {
            continue;
        }
        merged.optional.insert(name, PlugStatus::optional(""));
    }
    merged
}
