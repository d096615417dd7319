//! Set node functional operations - variable storage logic

use log::{info, warn};

use super::SOCKET_TAGS;
use crate::error::NodeError;
use crate::nodes::data::resolve_variable_name;
use crate::nodes::factory::DataType;
use crate::nodes::interface::NodeData;
use crate::nodes::node::Node;
use crate::nodes::store::VariableStore;

/// Storage logic for the Set node family, bound to a store reference.
pub struct SetVariableLogic<'a> {
    store: &'a VariableStore,
}

impl<'a> SetVariableLogic<'a> {
    pub fn new(store: &'a VariableStore) -> Self {
        Self { store }
    }

    /// Store the first connected input and pass it through.
    ///
    /// `inputs` aligns with the metadata socket order; an unconnected
    /// socket arrives as `NodeData::None`. No connected input stores
    /// nothing and emits the null value.
    pub fn process(&self, node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        let connected = inputs
            .into_iter()
            .enumerate()
            .find(|(_, value)| !value.is_none());
        let Some((socket, value)) = connected else {
            warn!("'{}': no input connected, nothing stored", node.title);
            return Ok(vec![NodeData::None]);
        };

        // The trailing wildcard socket has no tag; the store detects one.
        let declared = SOCKET_TAGS.get(socket).copied();
        let fallback = declared.unwrap_or(DataType::Any).name().to_string();
        let name = resolve_variable_name(node, "Set_").unwrap_or(fallback);

        let resolved = self.store.set(&name, value.clone(), declared);
        info!("'{}' stored (type: {})", name, resolved);
        Ok(vec![value])
    }

    /// Named variant: single value socket, name from the `name` parameter,
    /// tag always auto-detected.
    pub fn process_named(
        &self,
        node: &Node,
        inputs: Vec<NodeData>,
    ) -> Result<Vec<NodeData>, NodeError> {
        let value = inputs.into_iter().next().unwrap_or(NodeData::None);
        let name = node
            .string_parameter("name")
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "my_variable".to_string());

        let resolved = self.store.set(&name, value.clone(), None);
        info!("'{}' stored (type: {})", name, resolved);
        Ok(vec![value])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nodes::factory::NodeFactory;
    use crate::nodes::interface::TensorData;

    fn set_node() -> Node {
        crate::nodes::data::SetVariableNode::create(1)
    }

    fn socket_inputs(socket: usize, value: NodeData) -> Vec<NodeData> {
        let mut inputs = vec![NodeData::None; SOCKET_TAGS.len() + 1];
        inputs[socket] = value;
        inputs
    }

    #[test]
    fn typed_socket_declares_the_tag() {
        let store = VariableStore::new();
        let logic = SetVariableLogic::new(&store);
        let node = set_node().with_parameter("name", NodeData::String("weights".to_string()));

        // Socket 0 is MODEL; the payload alone would not detect as one.
        let inputs = socket_inputs(0, NodeData::String("opaque".to_string()));
        let outputs = logic.process(&node, inputs).unwrap();

        assert_eq!(outputs, vec![NodeData::String("opaque".to_string())]);
        assert_eq!(store.get_type("weights"), DataType::Model);
    }

    #[test]
    fn wildcard_socket_detects_the_tag() {
        let store = VariableStore::new();
        let logic = SetVariableLogic::new(&store);
        let node = set_node().with_parameter("name", NodeData::String("frames".to_string()));

        let tensor = NodeData::Tensor(TensorData::zeros(&[1, 3, 8, 8]));
        let inputs = socket_inputs(SOCKET_TAGS.len(), tensor);
        logic.process(&node, inputs).unwrap();

        assert_eq!(store.get_type("frames"), DataType::Image);
    }

    #[test]
    fn title_convention_names_the_variable() {
        let store = VariableStore::new();
        let logic = SetVariableLogic::new(&store);
        let node = set_node().with_title("Set_VAE");

        logic
            .process(&node, socket_inputs(2, NodeData::object("VAE", ())))
            .unwrap();

        assert!(store.exists("VAE"));
        assert_eq!(store.get_type("VAE"), DataType::Vae);
    }

    #[test]
    fn unnamed_node_falls_back_to_the_socket_tag() {
        let store = VariableStore::new();
        let logic = SetVariableLogic::new(&store);
        let node = set_node();

        logic
            .process(&node, socket_inputs(1, NodeData::object("CLIP", ())))
            .unwrap();

        assert!(store.exists("CLIP"));
    }

    #[test]
    fn no_connected_input_stores_nothing() {
        let store = VariableStore::new();
        let logic = SetVariableLogic::new(&store);
        let node = set_node();

        let outputs = logic
            .process(&node, vec![NodeData::None; SOCKET_TAGS.len() + 1])
            .unwrap();

        assert_eq!(outputs, vec![NodeData::None]);
        assert!(store.is_empty());
    }

    #[test]
    fn named_variant_detects_and_passes_through() {
        let store = VariableStore::new();
        let logic = SetVariableLogic::new(&store);
        let node = crate::nodes::data::SetVariableNamedNode::create(2)
            .with_parameter("name", NodeData::String("count".to_string()));

        let outputs = logic
            .process_named(&node, vec![NodeData::Integer(7)])
            .unwrap();

        assert_eq!(outputs, vec![NodeData::Integer(7)]);
        assert_eq!(
            store.get_with_type("count"),
            Some((NodeData::Integer(7), DataType::Integer))
        );
    }

    #[test]
    fn named_variant_default_name_applies() {
        let store = VariableStore::new();
        let logic = SetVariableLogic::new(&store);
        let node = crate::nodes::data::SetVariableNamedNode::create(2);

        logic
            .process_named(&node, vec![NodeData::Float(0.5)])
            .unwrap();

        assert!(store.exists("my_variable"));
    }
}
