//! Nodes contributed by this plugin

pub mod dynamic_inputs;

pub use dynamic_inputs::DynamicInputsNodeFactory;
