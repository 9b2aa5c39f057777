//! Data model for the documentation dump produced by the analyzer.
//!
//! Key names follow lua-language-server's `doc.json` (`type`, `desc`,
//! `extends.view`); the neutral names `kind`, `description` and
//! `signature` are accepted as aliases.

use crate::error::Result;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One named entity (module, type or function) from the dump.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DocDescriptor {
    /// Dotted identifier, e.g. `smgf.audio`
    pub name: String,
    /// `variable`, `type`, or anything else the analyzer reports
    #[serde(rename = "type", alias = "kind", default)]
    pub kind: String,
    #[serde(rename = "desc", alias = "description", default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub fields: Vec<Field>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub defines: Vec<Define>,
}

/// A named member of a descriptor, rendered as its own sub-heading.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Field {
    #[serde(default)]
    pub name: String,
    #[serde(
        rename = "extends",
        alias = "signature",
        default,
        deserialize_with = "signature_view"
    )]
    pub signature: Option<String>,
    #[serde(rename = "desc", alias = "description", default)]
    pub description: Option<String>,
}

/// A code snippet attached to the descriptor itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Define {
    #[serde(
        rename = "extends",
        alias = "signature",
        default,
        deserialize_with = "signature_view"
    )]
    pub signature: Option<String>,
}

impl Field {
    /// Signature text, if the field carries one.
    pub fn view(&self) -> Option<&str> {
        self.signature.as_deref()
    }
}

impl Define {
    /// Signature text, only when present and non-empty.
    pub fn view(&self) -> Option<&str> {
        self.signature.as_deref().filter(|v| !v.is_empty())
    }
}

/// Pull the rendered `view` out of an `extends` object. A bare string is
/// taken as the view itself; any other shape means "no signature".
fn signature_view<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(view) => Some(view),
        Value::Object(map) => map.get("view").and_then(Value::as_str).map(str::to_owned),
        _ => None,
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a raw dump into descriptors.
///
/// The document itself must be a JSON array. Entries that don't decode as a
/// descriptor (no `name`, wrong shapes) are skipped with a warning.
pub fn decode_dump(text: &str) -> Result<Vec<DocDescriptor>> {
    let entries: Vec<Value> = serde_json::from_str(text)?;
    let total = entries.len();

    let descriptors: Vec<DocDescriptor> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(descriptor) => Some(descriptor),
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping malformed dump entry");
                None
            }
        })
        .collect();

    tracing::debug!(total, decoded = descriptors.len(), "decoded documentation dump");
    Ok(descriptors)
}
