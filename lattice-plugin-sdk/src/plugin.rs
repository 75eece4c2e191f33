//! Plugin lifecycle and registration contract
//!
//! The host opens a plugin library, resolves its `create_plugin` symbol
//! (`unsafe extern "C" fn() -> PluginHandle`), and reconstitutes the
//! [`NodePlugin`]. After a compatibility check against
//! [`PluginInfo::compatible_version`] the plugin gets to register its
//! node factories and contribute menu entries.

use std::error::Error;
use std::fmt;
use std::os::raw::c_void;

use crate::metadata::NodeMetadata;
use crate::node::NodeFactory;

/// Errors surfaced while loading, registering, or running a plugin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginError {
    /// The plugin library could not be opened or is missing symbols
    LoadError(String),
    /// The plugin's own initialization failed
    InitError(String),
    /// The plugin targets an incompatible host version
    CompatibilityError(String),
    /// A node factory could not be registered
    RegistrationError(String),
    /// A node failed while executing
    ExecutionError(String),
    /// Anything else
    Other(String),
}

impl fmt::Display for PluginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginError::LoadError(msg) => write!(f, "plugin load failed: {}", msg),
            PluginError::InitError(msg) => write!(f, "plugin initialization failed: {}", msg),
            PluginError::CompatibilityError(msg) => write!(f, "plugin incompatible: {}", msg),
            PluginError::RegistrationError(msg) => write!(f, "node registration failed: {}", msg),
            PluginError::ExecutionError(msg) => write!(f, "node execution failed: {}", msg),
            PluginError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for PluginError {}

/// Identity and compatibility information for a loaded plugin.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub author: String,
    pub description: String,
    /// Host version series this plugin was built against, e.g. "0.1".
    pub compatible_version: String,
    /// Directory of companion frontend assets, relative to the plugin's
    /// install location. The host serves and applies its content at
    /// startup; `None` when the plugin ships no assets.
    pub web_directory: Option<String>,
}

/// Host-side registry surface plugins register their node factories into.
pub trait NodeRegistryTrait {
    /// Register a node factory from a plugin.
    fn register_node_factory(&mut self, factory: Box<dyn NodeFactory>) -> Result<(), PluginError>;

    /// Get list of registered node types.
    fn get_node_types(&self) -> Vec<String>;

    /// Check if a node type is registered.
    fn has_node_type(&self, node_type: &str) -> bool;
}

/// Menu entries a plugin contributes to the host's node menus.
#[derive(Debug, Clone)]
pub enum MenuStructure {
    Category {
        name: String,
        items: Vec<MenuStructure>,
    },
    Node {
        name: String,
        node_type: String,
        metadata: NodeMetadata,
    },
}

/// The plugin entry object returned from `create_plugin`.
pub trait NodePlugin: Send + Sync {
    /// Identity and compatibility information.
    fn plugin_info(&self) -> PluginInfo;

    /// Called once after the compatibility check passes.
    fn on_load(&self) -> Result<(), PluginError> {
        Ok(())
    }

    /// Called before the plugin library is dropped.
    fn on_unload(&self) -> Result<(), PluginError> {
        Ok(())
    }

    /// Register all node factories this plugin provides.
    fn register_nodes(&self, registry: &mut dyn NodeRegistryTrait);

    /// Menu entries for the host's node menus.
    fn get_menu_structure(&self) -> Vec<MenuStructure> {
        Vec::new()
    }
}

/// FFI-safe handle carrying a boxed [`NodePlugin`] across the plugin
/// boundary, mirroring [`crate::node::PluginNodeHandle`].
#[repr(C)]
pub struct PluginHandle {
    ptr: *mut c_void,
}

impl PluginHandle {
    /// Wrap a plugin instance for transfer to the host.
    pub fn new(plugin: Box<dyn NodePlugin>) -> Self {
        Self {
            ptr: Box::into_raw(Box::new(plugin)) as *mut c_void,
        }
    }

    /// Reconstitute the plugin instance.
    ///
    /// # Safety
    ///
    /// The handle must have been produced by [`PluginHandle::new`] and
    /// must not have been consumed before; the caller takes ownership.
    pub unsafe fn into_plugin(self) -> Box<dyn NodePlugin> {
        *Box::from_raw(self.ptr as *mut Box<dyn NodePlugin>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PluginError::RegistrationError("duplicate node type".to_string());
        assert_eq!(err.to_string(), "node registration failed: duplicate node type");

        let err = PluginError::Other("misc".to_string());
        assert_eq!(err.to_string(), "misc");
    }

    #[test]
    fn test_plugin_handle_round_trip() {
        struct EmptyPlugin;

        impl NodePlugin for EmptyPlugin {
            fn plugin_info(&self) -> PluginInfo {
                PluginInfo {
                    name: "Empty".to_string(),
                    version: "0.1.0".to_string(),
                    author: "tests".to_string(),
                    description: "does nothing".to_string(),
                    compatible_version: "0.1".to_string(),
                    web_directory: None,
                }
            }

            fn register_nodes(&self, _registry: &mut dyn NodeRegistryTrait) {}
        }

        let handle = PluginHandle::new(Box::new(EmptyPlugin));
        let plugin = unsafe { handle.into_plugin() };
        assert_eq!(plugin.plugin_info().name, "Empty");
        assert!(plugin.on_load().is_ok());
        assert!(plugin.on_unload().is_ok());
        assert!(plugin.get_menu_structure().is_empty());
    }
}
