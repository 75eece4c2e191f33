//! Node instance and factory traits
//!
//! A [`NodeFactory`] is registered with the host and stamps out
//! [`PluginNode`] instances. Instances cross the plugin boundary inside a
//! [`PluginNodeHandle`]; the host reconstitutes the trait object with
//! [`PluginNodeHandle::into_node`].

use std::os::raw::c_void;

use crate::data::{NodeData, ParameterChange};
use crate::inputs::NamedInputs;
use crate::metadata::NodeMetadata;
use crate::plugin::PluginError;
use crate::types::Pos2;

/// A live node instance driven by the host.
pub trait PluginNode: Send + Sync {
    /// Stable instance identifier (UUID string, unique per instance).
    fn id(&self) -> String;

    /// Evaluate the node over the inputs the host collected for it.
    ///
    /// Returns one value per declared output port, in port order.
    fn execute(&mut self, inputs: &NamedInputs) -> Result<Vec<NodeData>, PluginError>;

    /// Render the node's parameter panel, returning any changes the user
    /// made.
    fn render_parameters(&mut self, ui: &mut egui::Ui) -> Vec<ParameterChange>;

    /// Apply a parameter change coming back from the host.
    fn set_parameter(&mut self, name: &str, value: NodeData);

    /// Whether this node renders into a viewport panel.
    fn supports_viewport(&self) -> bool {
        false
    }
}

/// Factory for creating node instances, registered with the host at
/// plugin load.
pub trait NodeFactory: Send + Sync {
    /// Comprehensive node metadata.
    fn metadata(&self) -> NodeMetadata;

    /// Create a node instance at the given graph position.
    fn create_node(&self, position: Pos2) -> PluginNodeHandle;
}

/// FFI-safe handle carrying a boxed [`PluginNode`] across the plugin
/// boundary.
///
/// The fat trait-object pointer is double-boxed so a single thin pointer
/// crosses the `extern "C"` surface.
#[repr(C)]
pub struct PluginNodeHandle {
    ptr: *mut c_void,
}

impl PluginNodeHandle {
    /// Wrap a node instance for transfer to the host.
    pub fn new(node: Box<dyn PluginNode>) -> Self {
        Self {
            ptr: Box::into_raw(Box::new(node)) as *mut c_void,
        }
    }

    /// Reconstitute the node instance.
    ///
    /// # Safety
    ///
    /// The handle must have been produced by [`PluginNodeHandle::new`]
    /// and must not have been consumed before; the caller takes ownership.
    pub unsafe fn into_node(self) -> Box<dyn PluginNode> {
        *Box::from_raw(self.ptr as *mut Box<dyn PluginNode>)
    }
}
