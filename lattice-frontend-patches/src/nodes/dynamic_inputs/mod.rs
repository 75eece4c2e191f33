//! Dynamic inputs demo node
//!
//! Uses Pattern A: build_interface method
//! - mod.rs: Base node metadata and factory implementation
//! - logic.rs: Debug report construction
//! - parameters.rs: Node instance and panel interface

pub mod logic;
pub mod parameters;

pub use logic::{value_preview, DebugReport, InputRecord, VALUE_PREVIEW_LIMIT};
pub use parameters::DynamicInputsNode;

use lattice_plugin_sdk::{
    Color, DataType, NodeCategory, NodeFactory, NodeMetadata, PluginNodeHandle, PortDefinition,
    Pos2, ProcessingCost,
};

/// Demo node showing dynamic inputs working correctly.
///
/// Accepts unlimited connections; each connection spawns a new slot.
/// Without the slot reactivity patch the new slots wouldn't render until
/// refresh. The node reports everything it received as a JSON document on
/// its `debug` output.
#[derive(Default)]
pub struct DynamicInputsNodeFactory;

impl NodeFactory for DynamicInputsNodeFactory {
    fn metadata(&self) -> NodeMetadata {
        NodeMetadata::new(
            "FrontendPatches_DynamicInputs",
            "Dynamic Inputs (Demo)",
            NodeCategory::new(&["FrontendPatches"]),
            "Reports every dynamically connected input as a JSON summary",
        )
        .with_color(Color::from_rgb(75, 35, 35))
        .with_icon("🔌")
        // No fixed input schema; slots are created by the host on demand.
        .with_outputs(vec![PortDefinition::required("debug", DataType::String)
            .with_description("JSON summary of the connected inputs")])
        .with_dynamic_inputs(true)
        .with_tags(vec!["debug", "diagnostics", "dynamic"])
        .with_processing_cost(ProcessingCost::Minimal)
    }

    fn create_node(&self, _position: Pos2) -> PluginNodeHandle {
        PluginNodeHandle::new(Box::new(DynamicInputsNode::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dynamic_inputs_metadata() {
        let metadata = DynamicInputsNodeFactory.metadata();
        assert_eq!(metadata.node_type, "FrontendPatches_DynamicInputs");
        assert_eq!(metadata.display_name, "Dynamic Inputs (Demo)");
        assert_eq!(metadata.category, NodeCategory::new(&["FrontendPatches"]));

        // The declared schema is empty; inputs come from dynamic slots.
        assert!(metadata.inputs.is_empty());
        assert!(metadata.supports_dynamic_inputs);

        // Single string-typed output channel.
        assert_eq!(metadata.outputs.len(), 1);
        assert_eq!(metadata.outputs[0].name, "debug");
        assert_eq!(metadata.outputs[0].data_type, DataType::String);
        assert!(!metadata.outputs[0].optional);
    }

    #[test]
    fn test_node_creation() {
        use lattice_plugin_sdk::PluginNode;

        let handle = DynamicInputsNodeFactory.create_node(Pos2::new(100.0, 100.0));
        let node = unsafe { handle.into_node() };
        assert!(!node.id().is_empty());
        assert!(!node.supports_viewport());
    }

    #[test]
    fn test_instances_get_distinct_ids() {
        use lattice_plugin_sdk::PluginNode;

        let a = unsafe { DynamicInputsNodeFactory.create_node(Pos2::ZERO).into_node() };
        let b = unsafe { DynamicInputsNodeFactory.create_node(Pos2::ZERO).into_node() };
        assert_ne!(a.id(), b.id());
    }
}
