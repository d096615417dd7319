//! List node - renders the currently stored variables as text

pub mod logic;

pub use logic::ListVariablesLogic;

use crate::error::NodeError;
use crate::nodes::factory::{
    DataType, ExecutionMode, NodeCategory, NodeFactory, NodeMetadata, PortDefinition,
    ProcessingCost,
};
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::variable_store;

/// Diagnostic node: emits every stored name with its tag, as plain text or
/// JSON. The trigger input only forces execution order; its value is
/// ignored.
#[derive(Default)]
pub struct ListVariablesNode;

impl NodeFactory for ListVariablesNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Utility_ListVariables",
            "List Variables",
            NodeCategory::utility(),
            "Lists all stored variables and their types",
        )
        .with_icon("📋")
        .with_inputs(vec![PortDefinition::optional("trigger", DataType::Any)
            .with_description("Optional ordering input; the value is ignored")])
        .with_outputs(vec![PortDefinition::required("info", DataType::String)])
        .with_tags(vec!["utility", "variable", "debug"])
        .with_processing_cost(ProcessingCost::Minimal)
        .with_execution_mode(ExecutionMode::Realtime)
        .with_parameter_default("as_json", NodeData::Boolean(false))
    }

    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        ListVariablesLogic::new(variable_store()).process(node, inputs)
    }
}
