//! Node metadata and categorization
//!
//! [`NodeMetadata`] is the single source of truth for how the host
//! presents and wires a plugin node: identity, appearance, category,
//! panel type, and port schema.

use serde::{Deserialize, Serialize};

use crate::types::{Color, Vec2};

/// Data types that can flow through ports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    /// Floating point number
    Float,
    /// 3D vector (x, y, z)
    Vec3,
    /// RGBA color value
    Color,
    /// Text string
    String,
    /// Boolean value
    Boolean,
    /// Dense numeric data with a shape
    Tensor,
    /// Any type (for generic ports)
    Any,
}

impl DataType {
    /// Check if this data type can connect to another.
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other || *self == DataType::Any || *other == DataType::Any
    }

    /// Get a human-readable name for this data type.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Float => "Float",
            DataType::Vec3 => "Vec3",
            DataType::Color => "Color",
            DataType::String => "String",
            DataType::Boolean => "Boolean",
            DataType::Tensor => "Tensor",
            DataType::Any => "Any",
        }
    }
}

/// Hierarchical category for organizing nodes in the host menus.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components.
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Get the category name (last component).
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get the parent category.
    pub fn parent(&self) -> Option<NodeCategory> {
        if self.path.len() > 1 {
            Some(NodeCategory {
                path: self.path[..self.path.len() - 1].to_vec(),
            })
        } else {
            None
        }
    }

    /// Get display string for UI.
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }
}

/// Port definition for node creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortDefinition {
    pub name: String,
    pub data_type: DataType,
    pub optional: bool,
    pub description: Option<String>,
}

impl PortDefinition {
    /// Create a required port.
    pub fn required(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: false,
            description: None,
        }
    }

    /// Create an optional port.
    pub fn optional(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: true,
            description: None,
        }
    }

    /// Add description to port.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Types of interface panels a node can request from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelType {
    /// Parameter panel for node settings (default)
    Parameter,
    /// Viewport panel for scene visualization
    Viewport,
    /// Combined parameter and viewer panel
    Combined,
}

/// Processing cost hint for the host scheduler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProcessingCost {
    Minimal,
    Low,
    Medium,
    High,
}

/// Rich metadata for a plugin node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeMetadata {
    // Core identity
    pub node_type: String,
    pub display_name: String,
    pub description: String,
    pub version: String,

    // Visual appearance
    pub color: Color,
    pub icon: String,
    pub size_hint: Vec2,

    // Organization
    pub category: NodeCategory,
    pub workspace_compatibility: Vec<String>,
    pub tags: Vec<String>,

    // Interface behavior
    pub panel_type: PanelType,

    // Connectivity. `inputs` is the fixed schema; a node with
    // `supports_dynamic_inputs` gets additional named slots created by
    // the host as connections are made.
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
    pub allow_multiple_connections: bool,
    pub supports_dynamic_inputs: bool,

    // Execution behavior
    pub processing_cost: ProcessingCost,
}

impl NodeMetadata {
    /// Create node metadata with sensible defaults.
    pub fn new(node_type: &str, display_name: &str, category: NodeCategory, description: &str) -> Self {
        Self {
            node_type: node_type.to_string(),
            display_name: display_name.to_string(),
            description: description.to_string(),
            version: "1.0".to_string(),

            color: Color::default(),
            icon: "⚡".to_string(),
            size_hint: Vec2::new(120.0, 80.0),

            category,
            workspace_compatibility: vec![],
            tags: vec![],

            panel_type: PanelType::Parameter,

            inputs: vec![],
            outputs: vec![],
            allow_multiple_connections: true,
            supports_dynamic_inputs: false,

            processing_cost: ProcessingCost::Low,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_icon(mut self, icon: &str) -> Self {
        self.icon = icon.to_string();
        self
    }

    pub fn with_size_hint(mut self, size: Vec2) -> Self {
        self.size_hint = size;
        self
    }

    pub fn with_panel_type(mut self, panel_type: PanelType) -> Self {
        self.panel_type = panel_type;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Ask the host to create input slots on demand as connections are
    /// made, in addition to any fixed schema in `inputs`.
    pub fn with_dynamic_inputs(mut self, supported: bool) -> Self {
        self.supports_dynamic_inputs = supported;
        self
    }

    pub fn with_workspace_compatibility(mut self, workspaces: Vec<&str>) -> Self {
        self.workspace_compatibility = workspaces.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_tags(mut self, tags: Vec<&str>) -> Self {
        self.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_processing_cost(mut self, cost: ProcessingCost) -> Self {
        self.processing_cost = cost;
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }
}
