//! Clear node - empties the shared variable store

pub mod logic;

pub use logic::ClearVariablesLogic;

use crate::error::NodeError;
use crate::nodes::factory::{
    DataType, ExecutionMode, NodeCategory, NodeFactory, NodeMetadata, PortDefinition,
    ProcessingCost,
};
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::variable_store;

/// Clearing node: deletes every stored variable, guarded by an explicit
/// confirmation parameter so an accidentally wired node cannot wipe a
/// running workflow's state.
#[derive(Default)]
pub struct ClearVariablesNode;

impl NodeFactory for ClearVariablesNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Utility_ClearVariables",
            "Clear Variables",
            NodeCategory::utility(),
            "Deletes all stored variables when confirmed",
        )
        .with_icon("🗑")
        .with_outputs(vec![PortDefinition::required("status", DataType::String)])
        .with_tags(vec!["utility", "variable", "clear"])
        .with_processing_cost(ProcessingCost::Minimal)
        .with_execution_mode(ExecutionMode::Manual)
        .with_output_node(true)
        .with_parameter_default("confirm", NodeData::Boolean(false))
    }

    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        ClearVariablesLogic::new(variable_store()).process(node, inputs)
    }
}
