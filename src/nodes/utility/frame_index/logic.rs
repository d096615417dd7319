//! Frame indexing functional operations - batch slicing

use crate::error::NodeError;
use crate::nodes::interface::{NodeData, TensorData};
use crate::nodes::node::Node;

/// Pull the tensor out of the `frames` input socket.
pub(crate) fn frames_input<'a>(
    inputs: &'a [NodeData],
    node: &Node,
) -> Result<&'a TensorData, NodeError> {
    match inputs.first() {
        Some(NodeData::Tensor(tensor)) => Ok(tensor),
        _ => Err(NodeError::InvalidInput {
            node: "frame_index",
            message: format!("'{}': 'frames' input must be an image batch", node.title),
        }),
    }
}

/// Frame selection over the leading batch axis.
pub struct FrameIndexLogic;

impl FrameIndexLogic {
    /// Select the last frame of a batch, keeping the rank.
    pub fn last_frame(frames: &TensorData) -> Result<TensorData, NodeError> {
        Self::frame_at(frames, -1)
    }

    /// Select one frame by index: negative indices count from the end,
    /// out-of-range indices clamp to the valid range.
    pub fn frame_at(frames: &TensorData, index: i32) -> Result<TensorData, NodeError> {
        let batch = frames.dim(0);
        if frames.rank() == 0 || batch == 0 {
            return Err(NodeError::InvalidInput {
                node: "frame_index",
                message: "'frames' input is empty, no frame to select".to_string(),
            });
        }

        let wrapped = if index < 0 {
            index as i64 + batch as i64
        } else {
            index as i64
        };
        let clamped = wrapped.clamp(0, batch as i64 - 1) as usize;

        frames.index_axis0(clamped).ok_or_else(|| NodeError::InvalidInput {
            node: "frame_index",
            message: format!("frame {} out of range for batch of {}", clamped, batch),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Batch of 3 single-pixel RGB frames with distinguishable values.
    fn batch() -> TensorData {
        TensorData::new(
            vec![3, 1, 1, 3],
            vec![
                0.0, 0.0, 0.0, // frame 0
                1.0, 1.0, 1.0, // frame 1
                2.0, 2.0, 2.0, // frame 2
            ],
        )
    }

    #[test]
    fn last_frame_keeps_rank() {
        let frame = FrameIndexLogic::last_frame(&batch()).unwrap();
        assert_eq!(frame.shape, vec![1, 1, 1, 3]);
        assert_eq!(frame.data, vec![2.0, 2.0, 2.0]);
    }

    #[test]
    fn negative_index_counts_from_the_end() {
        let frame = FrameIndexLogic::frame_at(&batch(), -2).unwrap();
        assert_eq!(frame.data, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn out_of_range_indices_clamp() {
        let high = FrameIndexLogic::frame_at(&batch(), 99).unwrap();
        assert_eq!(high.data, vec![2.0, 2.0, 2.0]);

        let low = FrameIndexLogic::frame_at(&batch(), -99).unwrap();
        assert_eq!(low.data, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn empty_batch_is_an_error() {
        let empty = TensorData::zeros(&[0, 1, 1, 3]);
        let err = FrameIndexLogic::last_frame(&empty).unwrap_err();
        assert!(matches!(err, NodeError::InvalidInput { .. }));
    }

    #[test]
    fn non_tensor_input_is_an_error() {
        let node = Node::new(1, "Utility_GetLastFrame", "Get Last Frame");
        let err = frames_input(&[NodeData::Integer(1)], &node).unwrap_err();
        assert!(matches!(err, NodeError::InvalidInput { .. }));
        assert!(frames_input(&[], &node).is_err());
    }
}
