//! Utility nodes - store diagnostics and frame indexing

pub mod clear_variables;
pub mod frame_index;
pub mod list_variables;

pub use clear_variables::ClearVariablesNode;
pub use frame_index::{FrameByIndexNode, GetLastFrameNode};
pub use list_variables::ListVariablesNode;
