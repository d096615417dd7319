//! Clear node functional operations - confirmed store clearing

use log::{info, warn};

use crate::error::NodeError;
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::VariableStore;

/// Clearing logic for the Clear node, bound to a store reference.
pub struct ClearVariablesLogic<'a> {
    store: &'a VariableStore,
}

impl<'a> ClearVariablesLogic<'a> {
    pub fn new(store: &'a VariableStore) -> Self {
        Self { store }
    }

    /// Clear the store if confirmed; otherwise report the skip.
    pub fn process(&self, node: &Node, _inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        if !node.boolean_parameter("confirm").unwrap_or(false) {
            warn!("clear skipped (confirm=false)");
            return Ok(vec![NodeData::String(
                "clear skipped (confirm=false)".to_string(),
            )]);
        }

        let count = self.store.len();
        self.store.clear();
        info!("cleared {} variable(s)", count);
        Ok(vec![NodeData::String(format!("cleared {} variable(s)", count))])
    }
}
