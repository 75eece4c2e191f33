//! Debug report construction for the dynamic inputs node

use std::collections::BTreeMap;

use serde::Serialize;

use lattice_plugin_sdk::{NamedInputs, NodeData, PluginError};

/// Value previews longer than this are cut off in the report.
pub const VALUE_PREVIEW_LIMIT: usize = 100;

/// Snapshot of one connected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputRecord {
    /// Runtime type name of the received value
    #[serde(rename = "type")]
    pub value_type: String,
    /// Truncated textual preview of the received value
    pub value: String,
}

/// Per-execution summary of every connected input.
///
/// Serialized field order matters to downstream display: the count comes
/// first, then the per-input records keyed and sorted by slot name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DebugReport {
    pub input_count: usize,
    pub inputs: BTreeMap<String, InputRecord>,
}

impl DebugReport {
    /// Build a report over the given input set.
    pub fn new(inputs: &NamedInputs) -> Self {
        let mut records = BTreeMap::new();
        for (name, value) in inputs.iter() {
            records.insert(
                name.to_string(),
                InputRecord {
                    value_type: value.type_name().to_string(),
                    value: value_preview(value),
                },
            );
        }
        Self {
            input_count: inputs.len(),
            inputs: records,
        }
    }

    /// Serialize with 2-space indentation for display in the host UI.
    pub fn to_json(&self) -> Result<String, PluginError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PluginError::ExecutionError(format!("debug report serialization: {}", e)))
    }
}

/// Render one value for the report.
///
/// Values carrying the shape capability are summarized as `tensor[..]`;
/// everything else goes through its generic string conversion, cut to
/// [`VALUE_PREVIEW_LIMIT`] characters.
pub fn value_preview(value: &NodeData) -> String {
    if let Some(shape) = value.shape() {
        return format!("tensor{:?}", shape);
    }
    let text = value.to_string();
    if text.chars().count() > VALUE_PREVIEW_LIMIT {
        text.chars().take(VALUE_PREVIEW_LIMIT).collect()
    } else {
        text
    }
}
