//! Frame indexing nodes - select one frame from an image batch
//!
//! Video-style workflows produce image batches; these nodes pull a single
//! frame back out while keeping the batch rank so downstream image inputs
//! still accept the result.

pub mod logic;

pub use logic::FrameIndexLogic;

use crate::error::NodeError;
use crate::nodes::factory::{
    DataType, NodeCategory, NodeFactory, NodeMetadata, PortDefinition, ProcessingCost,
};
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;

/// Selects the final frame of an image batch.
#[derive(Default)]
pub struct GetLastFrameNode;

impl NodeFactory for GetLastFrameNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Utility_GetLastFrame",
            "Get Last Frame",
            NodeCategory::utility(),
            "Returns only the last frame of an image batch",
        )
        .with_icon("🎞")
        .with_inputs(vec![PortDefinition::required("frames", DataType::Image)
            .with_description("Image batch to index")])
        .with_outputs(vec![PortDefinition::required("image", DataType::Image)])
        .with_tags(vec!["utility", "image", "batch", "video"])
        .with_processing_cost(ProcessingCost::Minimal)
    }

    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        let frames = logic::frames_input(&inputs, node)?;
        let frame = FrameIndexLogic::last_frame(frames)?;
        Ok(vec![NodeData::Tensor(frame)])
    }
}

/// Selects any frame of an image batch by index; negative indices count
/// from the end and out-of-range indices clamp.
#[derive(Default)]
pub struct FrameByIndexNode;

impl NodeFactory for FrameByIndexNode {
    fn metadata() -> NodeMetadata {
        NodeMetadata::new(
            "Utility_FrameByIndex",
            "Frame By Index",
            NodeCategory::utility(),
            "Returns one frame of an image batch by index (-1 for the last)",
        )
        .with_icon("🎞")
        .with_inputs(vec![PortDefinition::required("frames", DataType::Image)
            .with_description("Image batch to index")])
        .with_outputs(vec![PortDefinition::required("image", DataType::Image)])
        .with_tags(vec!["utility", "image", "batch", "video"])
        .with_processing_cost(ProcessingCost::Minimal)
        .with_parameter_default("index", NodeData::Integer(-1))
    }

    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        let frames = logic::frames_input(&inputs, node)?;
        let index = node.integer_parameter("index").unwrap_or(-1);
        let frame = FrameIndexLogic::frame_at(frames, index)?;
        Ok(vec![NodeData::Tensor(frame)])
    }
}
