//! Get node - retrieves a named variable from the shared store
//!
//! - mod.rs: node metadata and factory implementation
//! - logic.rs: retrieval logic against an injected store

pub mod logic;

pub use logic::GetVariableLogic;

use crate::error::NodeError;
use crate::nodes::factory::{
    DataType, ExecutionMode, NodeCategory, NodeFactory, NodeMetadata, PortDefinition,
    ProcessingCost,
};
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::variable_store;

/// Get node: forwards a previously stored value to its output. An unknown
/// name fails loudly, listing every variable that IS available.
#[derive(Default)]
pub struct GetVariableNode;

impl NodeFactory for GetVariableNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Data_GetVariable",
            "Get Variable",
            NodeCategory::data(),
            "Retrieves a value previously stored by a Set node",
        )
        .with_icon("📤")
        .with_outputs(vec![PortDefinition::required("*", DataType::Any)
            .with_description("The retrieved value")])
        .with_tags(vec!["data", "variable", "storage", "get"])
        .with_processing_cost(ProcessingCost::Minimal)
        .with_execution_mode(ExecutionMode::Realtime)
        .with_parameter_default("name", NodeData::String("my_variable".to_string()))
    }

    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        GetVariableLogic::new(variable_store()).process(node, inputs)
    }
}
