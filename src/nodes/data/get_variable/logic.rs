//! Get node functional operations - variable retrieval logic

use log::info;

use crate::error::NodeError;
use crate::nodes::data::resolve_variable_name;
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::VariableStore;

/// Retrieval logic for the Get node, bound to a store reference.
pub struct GetVariableLogic<'a> {
    store: &'a VariableStore,
}

impl<'a> GetVariableLogic<'a> {
    pub fn new(store: &'a VariableStore) -> Self {
        Self { store }
    }

    /// Look up the resolved variable name and forward its value.
    ///
    /// Absence is an error carrying the currently stored names; a stored
    /// null forwards as the null value without erroring.
    pub fn process(&self, node: &Node, _inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        let name = resolve_variable_name(node, "Get_")
            .unwrap_or_else(|| "my_variable".to_string());

        let Some((value, data_type)) = self.store.get_with_type(&name) else {
            return Err(NodeError::VariableNotFound {
                name,
                available: self.store.list_names(),
            });
        };

        info!("'{}' retrieved (type: {})", name, data_type);
        Ok(vec![value])
    }
}
