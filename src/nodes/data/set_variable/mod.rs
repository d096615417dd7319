//! Set node - stores a named variable in the shared store
//!
//! - mod.rs: node metadata and factory implementations
//! - logic.rs: storage logic against an injected store

pub mod logic;

pub use logic::SetVariableLogic;

use crate::error::NodeError;
use crate::nodes::factory::{
    DataType, ExecutionMode, NodeCategory, NodeFactory, NodeMetadata, PortDefinition,
    ProcessingCost,
};
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::variable_store;

/// Socket tags offered as typed inputs, in port order. Primitive sockets
/// are not offered; primitives travel through the wildcard socket.
pub(crate) const SOCKET_TAGS: &[DataType] = &[
    DataType::Model,
    DataType::Clip,
    DataType::Vae,
    DataType::ControlNet,
    DataType::ClipVision,
    DataType::StyleModel,
    DataType::UpscaleModel,
    DataType::Latent,
    DataType::Image,
    DataType::Mask,
    DataType::Conditioning,
    DataType::Sampler,
    DataType::Sigmas,
    DataType::Noise,
    DataType::Guider,
];

/// Set node: the first connected input is stored under the resolved
/// variable name and passed through unchanged.
///
/// One optional input socket per domain tag plus a wildcard, so existing
/// workflows can wire any output straight in. Only one socket should be
/// connected at a time.
#[derive(Default)]
pub struct SetVariableNode;

impl NodeFactory for SetVariableNode {
    fn metadata() -> NodeMetadata {
        let mut inputs: Vec<PortDefinition> = SOCKET_TAGS
            .iter()
            .map(|tag| PortDefinition::optional(tag.name(), *tag))
            .collect();
        inputs.push(
            PortDefinition::optional("*", DataType::Any)
                .with_description("Wildcard input for types without a dedicated socket"),
        );

        NodeMetadata::new(
            "Data_SetVariable",
            "Set Variable",
            NodeCategory::data(),
            "Stores any connected value under a variable name for Get nodes elsewhere in the graph",
        )
        .with_icon("📦")
        .with_inputs(inputs)
        .with_outputs(vec![PortDefinition::required("*", DataType::Any)
            .with_description("The stored value, passed through")])
        .with_tags(vec!["data", "variable", "storage", "set"])
        .with_processing_cost(ProcessingCost::Minimal)
        .with_execution_mode(ExecutionMode::Realtime)
        .with_output_node(true)
        .with_parameter_default("name", NodeData::String(String::new()))
    }

    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        SetVariableLogic::new(variable_store()).process(node, inputs)
    }
}

/// Set node variant with an explicit name widget and a single wildcard
/// value socket; the tag is always auto-detected.
#[derive(Default)]
pub struct SetVariableNamedNode;

impl NodeFactory for SetVariableNamedNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Data_SetVariableNamed",
            "Set Variable (Named)",
            NodeCategory::data(),
            "Stores a value under an explicit variable name",
        )
        .with_icon("📦")
        .with_inputs(vec![PortDefinition::required("value", DataType::Any)])
        .with_outputs(vec![PortDefinition::required("value", DataType::Any)])
        .with_tags(vec!["data", "variable", "storage", "set"])
        .with_processing_cost(ProcessingCost::Minimal)
        .with_execution_mode(ExecutionMode::Realtime)
        .with_output_node(true)
        .with_parameter_default("name", NodeData::String("my_variable".to_string()))
    }

    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        SetVariableLogic::new(variable_store()).process_named(node, inputs)
    }
}
