//! Data nodes - variable storage and retrieval

pub mod get_variable;
pub mod set_variable;

pub use get_variable::GetVariableNode;
pub use set_variable::{SetVariableNamedNode, SetVariableNode};

use crate::nodes::node::Node;

/// Resolve the variable name a Set/Get node operates on.
///
/// The `name` parameter wins; otherwise a prefixed title (`Set_NAME`,
/// `Get_NAME`) yields the suffix; otherwise any `Title_NAME` convention
/// still names the variable.
pub(crate) fn resolve_variable_name(node: &Node, title_prefix: &str) -> Option<String> {
    if let Some(name) = node.string_parameter("name") {
        if !name.is_empty() {
            return Some(name);
        }
    }
    if let Some(suffix) = node.title.strip_prefix(title_prefix) {
        if !suffix.is_empty() {
            return Some(suffix.to_string());
        }
    }
    node.title
        .split_once('_')
        .map(|(_, suffix)| suffix.to_string())
        .filter(|suffix| !suffix.is_empty())
}
