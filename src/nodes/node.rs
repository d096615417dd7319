//! Node instance model
//!
//! The host owns the graph; what a node implementation sees at execution
//! time is this slim instance: its identity, its user-facing title, and
//! the parameter values the host collected from widgets.

use std::collections::HashMap;

use crate::nodes::interface::NodeData;

/// Unique identifier for a node, assigned by the host
pub type NodeId = usize;

/// One node instance as configured in the graph
#[derive(Debug, Clone)]
pub struct Node {
    pub id: NodeId,
    /// Registered type name, e.g. `"Data_SetVariable"`
    pub node_type: String,
    /// User-facing title; retitling follows the `Set_NAME` convention
    pub title: String,
    /// Widget values collected by the host
    pub parameters: HashMap<String, NodeData>,
}

impl Node {
    /// Creates a new node with the specified properties
    pub fn new(id: NodeId, node_type: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id,
            node_type: node_type.into(),
            title: title.into(),
            parameters: HashMap::new(),
        }
    }

    /// Set a parameter value
    pub fn set_parameter(&mut self, name: impl Into<String>, value: NodeData) {
        self.parameters.insert(name.into(), value);
    }

    /// Builder-style parameter assignment
    pub fn with_parameter(mut self, name: impl Into<String>, value: NodeData) -> Self {
        self.set_parameter(name, value);
        self
    }

    /// Builder-style title assignment
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// String parameter value, if present and string-typed
    pub fn string_parameter(&self, name: &str) -> Option<String> {
        match self.parameters.get(name) {
            Some(NodeData::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    /// Integer parameter value, if present and integer-typed
    pub fn integer_parameter(&self, name: &str) -> Option<i32> {
        match self.parameters.get(name) {
            Some(NodeData::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// Boolean parameter value, if present and boolean-typed
    pub fn boolean_parameter(&self, name: &str) -> Option<bool> {
        match self.parameters.get(name) {
            Some(NodeData::Boolean(b)) => Some(*b),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_accessors_match_types() {
        let node = Node::new(1, "Data_GetVariable", "Get Variable")
            .with_parameter("name", NodeData::String("model".to_string()))
            .with_parameter("index", NodeData::Integer(-1))
            .with_parameter("confirm", NodeData::Boolean(true));

        assert_eq!(node.string_parameter("name").as_deref(), Some("model"));
        assert_eq!(node.integer_parameter("index"), Some(-1));
        assert_eq!(node.boolean_parameter("confirm"), Some(true));
    }

    #[test]
    fn mistyped_parameter_reads_as_absent() {
        let node = Node::new(1, "Data_GetVariable", "Get Variable")
            .with_parameter("name", NodeData::Integer(3));
        assert_eq!(node.string_parameter("name"), None);
        assert_eq!(node.string_parameter("missing"), None);
    }
}
