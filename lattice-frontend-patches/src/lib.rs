//! Frontend fixes for the Lattice node editor
//!
//! Patches three core frontend issues that affect plugin node
//! development:
//! - slot list reactivity (dynamically created slots don't re-render
//!   until a graph refresh)
//! - text change tracking that only understands the built-in editors
//! - canvas event capture blocking interaction with custom panel widgets
//!
//! The patches themselves are companion assets under [`WEB_DIRECTORY`];
//! the host picks them up and applies them at startup. This crate
//! contributes the plugin registration plus a demo node that shows
//! dynamic inputs working: each new connection spawns a fresh input slot,
//! and the node reports everything it received as JSON.

pub mod nodes;

use log::{error, info};

use lattice_plugin_sdk::{
    MenuStructure, NodeFactory, NodePlugin, NodeRegistryTrait, PluginError, PluginHandle,
    PluginInfo,
};

use crate::nodes::dynamic_inputs::DynamicInputsNodeFactory;

/// Companion frontend assets, relative to the plugin's install location.
pub const WEB_DIRECTORY: &str = "web";

/// Plugin entry object handed to the host by [`create_plugin`].
#[derive(Default)]
pub struct FrontendPatchesPlugin;

impl NodePlugin for FrontendPatchesPlugin {
    fn plugin_info(&self) -> PluginInfo {
        PluginInfo {
            name: "Frontend Patches".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            author: "Lattice community".to_string(),
            description: "Fixes slot reactivity, text change tracking, and event capture; \
                          ships a dynamic-inputs demo node"
                .to_string(),
            compatible_version: "0.1".to_string(),
            web_directory: Some(WEB_DIRECTORY.to_string()),
        }
    }

    fn on_load(&self) -> Result<(), PluginError> {
        info!("Frontend Patches loaded; frontend assets in '{}'", WEB_DIRECTORY);
        Ok(())
    }

    fn on_unload(&self) -> Result<(), PluginError> {
        info!("Frontend Patches unloaded");
        Ok(())
    }

    fn register_nodes(&self, registry: &mut dyn NodeRegistryTrait) {
        if let Err(e) = registry.register_node_factory(Box::new(DynamicInputsNodeFactory)) {
            error!("Failed to register Dynamic Inputs node: {}", e);
        }
    }

    fn get_menu_structure(&self) -> Vec<MenuStructure> {
        let metadata = DynamicInputsNodeFactory.metadata();
        vec![MenuStructure::Category {
            name: "FrontendPatches".to_string(),
            items: vec![MenuStructure::Node {
                name: metadata.display_name.clone(),
                node_type: metadata.node_type.clone(),
                metadata,
            }],
        }]
    }
}

/// Plugin entry point resolved by the host after it opens the library.
#[no_mangle]
pub extern "C" fn create_plugin() -> PluginHandle {
    PluginHandle::new(Box::new(FrontendPatchesPlugin))
}
