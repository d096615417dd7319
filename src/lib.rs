//! Named-variable Set/Get plugin nodes for node-graph pipelines
//!
//! A host graph is a strict DAG; sometimes a value still has to travel
//! between two nodes with no edge between them. This library provides a
//! process-wide, thread-safe variable store plus the Set/Get node family
//! that uses it as a named side-channel, along with diagnostic and frame
//! indexing utilities.

pub mod error;
pub mod nodes;

// Re-export commonly used types
pub use error::NodeError;
pub use nodes::{
    variable_store, DataType, Entry, Node, NodeCategory, NodeData, NodeFactory, NodeId,
    NodeMetadata, NodeRegistry, ObjectHandle, PortDefinition, TensorData, VariableStore,
};

#[cfg(test)]
mod tests {
    use super::*;

    // End-to-end: a Set node and a Get node with no connection between
    // them exchange a value through the shared store, driven purely by
    // registry dispatch the way a host would.
    #[test]
    fn set_then_get_through_registry_dispatch() {
        let registry = NodeRegistry::with_default_nodes();

        let set = registry
            .create_node("Data_SetVariableNamed", 1)
            .unwrap()
            .with_parameter("name", NodeData::String("dispatch_roundtrip".to_string()));
        let value = NodeData::object("ModelPatcher", vec![0u8; 4]);
        let passthrough = registry.process(&set, vec![value.clone()]).unwrap();
        assert_eq!(passthrough, vec![value.clone()]);

        let get = registry
            .create_node("Data_GetVariable", 2)
            .unwrap()
            .with_parameter("name", NodeData::String("dispatch_roundtrip".to_string()));
        let outputs = registry.process(&get, vec![]).unwrap();
        assert_eq!(outputs, vec![value]);

        assert!(variable_store().remove("dispatch_roundtrip"));
    }

    #[test]
    fn get_before_set_fails_loudly() {
        let registry = NodeRegistry::with_default_nodes();
        let get = registry
            .create_node("Data_GetVariable", 1)
            .unwrap()
            .with_parameter("name", NodeData::String("dispatch_never_set".to_string()));

        let err = registry.process(&get, vec![]).unwrap_err();
        assert!(matches!(err, NodeError::VariableNotFound { .. }));
    }
}
