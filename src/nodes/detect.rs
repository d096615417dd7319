//! Best-effort type detection for stored payloads
//!
//! An ordered, pure mapping from payload shape and class metadata to the
//! closed socket-tag set. Advisory only: detection never blocks a write
//! and never touches the payload.

use crate::nodes::factory::DataType;
use crate::nodes::interface::{NodeData, TensorData};

/// Class-name substrings recognized on opaque objects, first match wins.
/// More specific names sit above their prefixes ("CLIPVisionModel" would
/// otherwise be shadowed by "CLIP").
const CLASS_NAME_TAGS: &[(&str, DataType)] = &[
    ("ModelPatcher", DataType::Model),
    ("CLIPVisionModel", DataType::ClipVision),
    ("CLIP", DataType::Clip),
    ("VAE", DataType::Vae),
    ("ControlNet", DataType::ControlNet),
    ("T2IAdapter", DataType::ControlNet),
    ("StyleModel", DataType::StyleModel),
];

/// Infer the socket tag for a payload.
///
/// Priority order: object class name, dictionary structure, list
/// structure, tensor shape, primitives; everything else is the wildcard.
pub fn detect_data_type(value: &NodeData) -> DataType {
    match value {
        NodeData::None => DataType::Any,
        NodeData::Object(handle) => {
            for (needle, tag) in CLASS_NAME_TAGS {
                if handle.class_name().contains(needle) {
                    return *tag;
                }
            }
            DataType::Any
        }
        NodeData::Map(map) => {
            if map.contains_key("samples") {
                return DataType::Latent;
            }
            if map.contains_key("cond") || map.values().next().is_some_and(is_pair_shaped) {
                return DataType::Conditioning;
            }
            DataType::Any
        }
        NodeData::List(items) => {
            if items.first().is_some_and(is_pair_shaped) {
                return DataType::Conditioning;
            }
            DataType::Any
        }
        NodeData::Tensor(tensor) => detect_tensor_type(tensor),
        NodeData::String(_) => DataType::String,
        NodeData::Integer(_) => DataType::Integer,
        NodeData::Float(_) => DataType::Float,
        // Booleans are not part of the closed primitive set
        NodeData::Boolean(_) => DataType::Any,
    }
}

/// Conditioning entries look like `[tensor, metadata]` pairs.
fn is_pair_shaped(value: &NodeData) -> bool {
    matches!(value, NodeData::List(items) if items.len() >= 2)
}

/// Rank-4 arrays are image batches when the channel axis is 1/3/4 wide,
/// otherwise latents; rank-3 arrays are masks.
fn detect_tensor_type(tensor: &TensorData) -> DataType {
    match tensor.rank() {
        4 => {
            if matches!(tensor.dim(1), 1 | 3 | 4) {
                DataType::Image
            } else {
                DataType::Latent
            }
        }
        3 => DataType::Mask,
        _ => DataType::Any,
    }
}
