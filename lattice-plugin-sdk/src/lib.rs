//! Plugin SDK for the Lattice node editor
//!
//! Plugins are dynamic libraries the host discovers at startup. A plugin
//! exports a `create_plugin` function returning a [`PluginHandle`]; the
//! host turns the handle back into a [`NodePlugin`], reads its
//! [`PluginInfo`], and asks it to register node factories. From then on
//! the host owns the node instances and drives them through the
//! [`PluginNode`] trait.
//!
//! Everything that crosses the plugin boundary lives here: the value
//! model ([`NodeData`]), node metadata, the factory and registry traits,
//! and the FFI-safe handles.

pub mod data;
pub mod inputs;
pub mod metadata;
pub mod node;
pub mod plugin;
pub mod types;

pub use data::{NodeData, ParameterChange, Shaped, TensorData};
pub use inputs::NamedInputs;
pub use metadata::{
    DataType, NodeCategory, NodeMetadata, PanelType, PortDefinition, ProcessingCost,
};
pub use node::{NodeFactory, PluginNode, PluginNodeHandle};
pub use plugin::{
    MenuStructure, NodePlugin, NodeRegistryTrait, PluginError, PluginHandle, PluginInfo,
};
pub use types::{Color, Pos2, Vec2};
