//! Dynamic inputs node instance and panel interface

use log::debug;
use uuid::Uuid;

use lattice_plugin_sdk::{NamedInputs, NodeData, ParameterChange, PluginError, PluginNode};

use super::logic::DebugReport;

/// Live node instance the host drives.
///
/// The node has no parameters; the panel shows a usage hint and the last
/// report read-only. The JSON output itself is a pure function of the
/// input set.
pub struct DynamicInputsNode {
    id: String,
    last_report: Option<String>,
}

impl DynamicInputsNode {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            last_report: None,
        }
    }
}

impl Default for DynamicInputsNode {
    fn default() -> Self {
        Self::new()
    }
}

impl PluginNode for DynamicInputsNode {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn execute(&mut self, inputs: &NamedInputs) -> Result<Vec<NodeData>, PluginError> {
        debug!("Dynamic Inputs executing with {} connected inputs", inputs.len());

        let json = DebugReport::new(inputs).to_json()?;
        self.last_report = Some(json.clone());
        Ok(vec![NodeData::String(json)])
    }

    fn render_parameters(&mut self, ui: &mut egui::Ui) -> Vec<ParameterChange> {
        ui.label("Connect any output to this node. Each connection spawns a new input slot.");
        ui.separator();

        match &self.last_report {
            Some(report) => {
                ui.monospace(report);
            }
            None => {
                ui.weak("Not executed yet");
            }
        }

        Vec::new()
    }

    fn set_parameter(&mut self, name: &str, _value: NodeData) {
        debug!("Dynamic Inputs has no parameters, ignoring '{}'", name);
    }
}
