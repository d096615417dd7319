//! List node functional operations - store enumeration rendering

use std::collections::BTreeMap;

use log::debug;

use crate::error::NodeError;
use crate::nodes::factory::DataType;
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::VariableStore;

/// Enumeration logic for the List node, bound to a store reference.
pub struct ListVariablesLogic<'a> {
    store: &'a VariableStore,
}

impl<'a> ListVariablesLogic<'a> {
    pub fn new(store: &'a VariableStore) -> Self {
        Self { store }
    }

    /// Render the current store population as a string output.
    pub fn process(&self, node: &Node, _inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        let entries = self.store.list_all();
        let info = if node.boolean_parameter("as_json").unwrap_or(false) {
            Self::render_json(&entries)?
        } else {
            Self::render_text(&entries)
        };
        debug!("listed {} variables", entries.len());
        Ok(vec![NodeData::String(info)])
    }

    fn render_text(entries: &BTreeMap<String, DataType>) -> String {
        if entries.is_empty() {
            return "0 variables stored".to_string();
        }
        let mut lines = vec![format!("{} variable(s):", entries.len())];
        for (name, tag) in entries {
            lines.push(format!("  • {}: {}", name, tag));
        }
        lines.join("\n")
    }

    fn render_json(entries: &BTreeMap<String, DataType>) -> Result<String, NodeError> {
        let tags: BTreeMap<&str, &str> = entries
            .iter()
            .map(|(name, tag)| (name.as_str(), tag.name()))
            .collect();
        Ok(serde_json::to_string(&tags)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::factory::NodeFactory;
    use crate::nodes::utility::ListVariablesNode;

    fn output_text(outputs: Vec<NodeData>) -> String {
        match outputs.into_iter().next() {
            Some(NodeData::String(s)) => s,
            other => panic!("expected a string output, got {:?}", other),
        }
    }

    #[test]
    fn empty_store_renders_a_zero_line() {
        let store = VariableStore::new();
        let node = ListVariablesNode::create(1);
        let outputs = ListVariablesLogic::new(&store).process(&node, vec![]).unwrap();
        assert_eq!(output_text(outputs), "0 variables stored");
    }

    #[test]
    fn text_listing_names_every_variable() {
        let store = VariableStore::new();
        store.set("model", NodeData::object("ModelPatcher", ()), None);
        store.set("steps", NodeData::Integer(20), None);

        let node = ListVariablesNode::create(1);
        let text = output_text(
            ListVariablesLogic::new(&store).process(&node, vec![]).unwrap(),
        );

        assert!(text.starts_with("2 variable(s):"));
        assert!(text.contains("model: MODEL"));
        assert!(text.contains("steps: INT"));
    }

    #[test]
    fn json_listing_maps_names_to_tags() {
        let store = VariableStore::new();
        store.set("mask", NodeData::Tensor(crate::nodes::interface::TensorData::zeros(&[1, 8, 8])), None);

        let node = ListVariablesNode::create(1).with_parameter("as_json", NodeData::Boolean(true));
        let text = output_text(
            ListVariablesLogic::new(&store).process(&node, vec![]).unwrap(),
        );

        assert_eq!(text, "{\"mask\":\"MASK\"}");
    }
}
