//! Node system - shared variable store and the nodes built on it

// Core modules
pub mod detect;
pub mod factory;
pub mod interface;
pub mod node;
pub mod store;

// Node implementations
pub mod data;
pub mod utility;

// Re-export core types
pub use node::{Node, NodeId};
pub use store::{variable_store, Entry, VariableStore};

// Re-export factory types
pub use factory::{
    DataType, NodeCategory, NodeFactory, NodeMetadata, NodeRegistry, PortDefinition,
};

// Re-export interface types
pub use interface::{NodeData, ObjectHandle, TensorData};
