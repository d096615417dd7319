//! Error types for node execution
//!
//! The variable store itself is total over its domain and never fails;
//! errors surface at the node layer, where a missing variable or a bad
//! input is a user-diagnosable condition.

use thiserror::Error;

/// Errors raised while executing a node.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The requested variable was never stored. Carries every currently
    /// stored name so the message can point at what IS available.
    #[error("variable '{name}' not found. Available: {}. Make sure the Set node runs before the Get node.", available_list(.available))]
    VariableNotFound { name: String, available: Vec<String> },

    /// Dispatch was asked for a node type nothing registered.
    #[error("unknown node type '{0}'")]
    UnknownNodeType(String),

    /// A connected input had the wrong shape or was missing entirely.
    #[error("invalid input for {node}: {message}")]
    InvalidInput { node: &'static str, message: String },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn available_list(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_message_lists_available_names() {
        let err = NodeError::VariableNotFound {
            name: "model".to_string(),
            available: vec!["clip".to_string(), "vae".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("'model' not found"));
        assert!(message.contains("clip, vae"));
    }

    #[test]
    fn missing_variable_message_with_empty_store() {
        let err = NodeError::VariableNotFound {
            name: "model".to_string(),
            available: vec![],
        };
        assert!(err.to_string().contains("(none)"));
    }
}
