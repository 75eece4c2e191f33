//! Named input sets forwarded into node execution
//!
//! Core nodes receive their inputs positionally from a fixed schema.
//! Dynamic-slot nodes instead receive a [`NamedInputs`] set: every slot
//! the host created on demand, keyed by slot name. The set lives for a
//! single execution call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::NodeData;

/// Named values the host forwards into one execution call.
///
/// Names are unique per invocation. Iteration is sorted by name so
/// repeated executions over the same set produce identical traversal
/// order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NamedInputs {
    values: BTreeMap<String, NodeData>,
}

impl NamedInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, replacing any previous value under the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: NodeData) -> Option<NodeData> {
        self.values.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&NodeData> {
        self.values.get(name)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &NodeData)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterate over slot names in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|name| name.as_str())
    }
}

impl FromIterator<(String, NodeData)> for NamedInputs {
    fn from_iter<T: IntoIterator<Item = (String, NodeData)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut inputs = NamedInputs::new();
        assert!(inputs.is_empty());

        inputs.insert("x", NodeData::Int(5));
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs.get("x"), Some(&NodeData::Int(5)));
        assert_eq!(inputs.get("y"), None);

        // Same name replaces
        let previous = inputs.insert("x", NodeData::Int(7));
        assert_eq!(previous, Some(NodeData::Int(5)));
        assert_eq!(inputs.len(), 1);
    }

    #[test]
    fn test_iteration_is_name_ordered() {
        let mut inputs = NamedInputs::new();
        inputs.insert("zeta", NodeData::Float(1.0));
        inputs.insert("alpha", NodeData::Float(2.0));
        inputs.insert("mid", NodeData::Float(3.0));

        let names: Vec<&str> = inputs.names().collect();
        assert_eq!(names, vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn test_from_iterator() {
        let inputs: NamedInputs = vec![
            ("a".to_string(), NodeData::Boolean(true)),
            ("b".to_string(), NodeData::String("hi".to_string())),
        ]
        .into_iter()
        .collect();

        assert_eq!(inputs.len(), 2);
        assert_eq!(inputs.get("b"), Some(&NodeData::String("hi".to_string())));
    }
}
