//! Value model shared between the host and plugins

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability interface for values that carry a dimensional shape.
///
/// Anything tensor-like implements this; consumers check the capability
/// through [`NodeData::shape`] instead of probing value internals.
pub trait Shaped {
    /// Dimension sizes, outermost first.
    fn shape(&self) -> &[usize];
}

/// Dense numeric data with a dimensional shape.
///
/// `data` is stored flat in row-major order; `shape` describes the
/// dimensions. `data.len()` equals the product of the shape entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorData {
    shape: Vec<usize>,
    data: Vec<f32>,
}

impl TensorData {
    /// Create a tensor from a shape and matching flat data.
    ///
    /// Returns `None` when `data.len()` does not match the shape.
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Option<Self> {
        if shape.iter().product::<usize>() != data.len() {
            return None;
        }
        Some(Self { shape, data })
    }

    /// A zero-filled tensor of the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let len = shape.iter().product();
        Self {
            shape,
            data: vec![0.0; len],
        }
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Shaped for TensorData {
    fn shape(&self) -> &[usize] {
        &self.shape
    }
}

/// Data types that flow between nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeData {
    Float(f32),
    Int(i32),
    Boolean(bool),
    String(String),
    Vec3([f32; 3]),
    Color([f32; 4]),
    Tensor(TensorData),
    None,
}

impl NodeData {
    /// Stable lowercase runtime type name, used as a type tag in
    /// diagnostics and serialized reports.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeData::Float(_) => "float",
            NodeData::Int(_) => "int",
            NodeData::Boolean(_) => "bool",
            NodeData::String(_) => "string",
            NodeData::Vec3(_) => "vec3",
            NodeData::Color(_) => "color",
            NodeData::Tensor(_) => "tensor",
            NodeData::None => "none",
        }
    }

    /// The value's shape, when it carries the [`Shaped`] capability.
    pub fn shape(&self) -> Option<&[usize]> {
        match self {
            NodeData::Tensor(tensor) => Some(tensor.shape()),
            _ => None,
        }
    }
}

impl fmt::Display for NodeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeData::Float(value) => write!(f, "{}", value),
            NodeData::Int(value) => write!(f, "{}", value),
            NodeData::Boolean(value) => write!(f, "{}", value),
            NodeData::String(value) => write!(f, "{}", value),
            NodeData::Vec3(value) => write!(f, "{:?}", value),
            NodeData::Color(value) => write!(f, "{:?}", value),
            NodeData::Tensor(tensor) => write!(f, "tensor{:?}", tensor.shape()),
            NodeData::None => write!(f, "None"),
        }
    }
}

/// Parameter change notification returned from a node's parameter panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterChange {
    pub parameter: String,
    pub value: NodeData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(NodeData::Int(5).type_name(), "int");
        assert_eq!(NodeData::Float(3.14).type_name(), "float");
        assert_eq!(NodeData::Boolean(true).type_name(), "bool");
        assert_eq!(NodeData::String("hello".to_string()).type_name(), "string");
        assert_eq!(NodeData::Tensor(TensorData::zeros(vec![2, 3])).type_name(), "tensor");
        assert_eq!(NodeData::None.type_name(), "none");
    }

    #[test]
    fn test_display_conversion() {
        assert_eq!(NodeData::Int(5).to_string(), "5");
        assert_eq!(NodeData::Float(3.14).to_string(), "3.14");
        assert_eq!(NodeData::Boolean(false).to_string(), "false");
        assert_eq!(NodeData::String("hello".to_string()).to_string(), "hello");
        assert_eq!(NodeData::None.to_string(), "None");
    }

    #[test]
    fn test_shape_capability() {
        let tensor = NodeData::Tensor(TensorData::zeros(vec![2, 3]));
        assert_eq!(tensor.shape(), Some(&[2, 3][..]));
        assert_eq!(NodeData::Float(1.0).shape(), None);
        assert_eq!(NodeData::String("shaped?".to_string()).shape(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let values = vec![
            NodeData::Int(5),
            NodeData::String("hello".to_string()),
            NodeData::Tensor(TensorData::zeros(vec![2, 2])),
            NodeData::None,
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: NodeData = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }

    #[test]
    fn test_tensor_data_validation() {
        assert!(TensorData::new(vec![2, 3], vec![0.0; 6]).is_some());
        assert!(TensorData::new(vec![2, 3], vec![0.0; 5]).is_none());

        let zeros = TensorData::zeros(vec![4, 2]);
        assert_eq!(zeros.len(), 8);
        assert_eq!(zeros.shape(), &[4, 2]);
    }
}
