//! Node factory system with self-registration and rich metadata

use std::collections::{BTreeMap, HashMap};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::NodeError;
use crate::nodes::interface::NodeData;
use crate::nodes::node::{Node, NodeId};

/// Data types that can flow through node sockets.
///
/// These are the host's socket tags: a closed set of domain payload kinds
/// plus the explicit `Any` wildcard that accepts every payload. The
/// wildcard is an ordinary variant, not a value that compares equal to
/// everything; `can_connect_to` carries its accept-all semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "MODEL")]
    Model,
    #[serde(rename = "CLIP")]
    Clip,
    #[serde(rename = "VAE")]
    Vae,
    #[serde(rename = "CONTROL_NET")]
    ControlNet,
    #[serde(rename = "STYLE_MODEL")]
    StyleModel,
    #[serde(rename = "CLIP_VISION")]
    ClipVision,
    #[serde(rename = "UPSCALE_MODEL")]
    UpscaleModel,
    #[serde(rename = "LATENT")]
    Latent,
    #[serde(rename = "IMAGE")]
    Image,
    #[serde(rename = "MASK")]
    Mask,
    #[serde(rename = "CONDITIONING")]
    Conditioning,
    #[serde(rename = "SAMPLER")]
    Sampler,
    #[serde(rename = "SIGMAS")]
    Sigmas,
    #[serde(rename = "NOISE")]
    Noise,
    #[serde(rename = "GUIDER")]
    Guider,
    #[serde(rename = "STRING")]
    String,
    #[serde(rename = "INT")]
    Integer,
    #[serde(rename = "FLOAT")]
    Float,
    /// Any type (wildcard sockets and unclassified payloads)
    #[serde(rename = "*")]
    Any,
}

impl DataType {
    /// Every concrete socket tag, wildcard excluded.
    pub fn all() -> &'static [DataType] {
        &[
            DataType::Model,
            DataType::Clip,
            DataType::Vae,
            DataType::ControlNet,
            DataType::StyleModel,
            DataType::ClipVision,
            DataType::UpscaleModel,
            DataType::Latent,
            DataType::Image,
            DataType::Mask,
            DataType::Conditioning,
            DataType::Sampler,
            DataType::Sigmas,
            DataType::Noise,
            DataType::Guider,
            DataType::String,
            DataType::Integer,
            DataType::Float,
        ]
    }

    /// Check if this data type can connect to another
    pub fn can_connect_to(&self, other: &DataType) -> bool {
        self == other || *self == DataType::Any || *other == DataType::Any
    }

    /// The socket tag string used by the host, e.g. `"MODEL"` or `"*"`.
    pub fn name(&self) -> &'static str {
        match self {
            DataType::Model => "MODEL",
            DataType::Clip => "CLIP",
            DataType::Vae => "VAE",
            DataType::ControlNet => "CONTROL_NET",
            DataType::StyleModel => "STYLE_MODEL",
            DataType::ClipVision => "CLIP_VISION",
            DataType::UpscaleModel => "UPSCALE_MODEL",
            DataType::Latent => "LATENT",
            DataType::Image => "IMAGE",
            DataType::Mask => "MASK",
            DataType::Conditioning => "CONDITIONING",
            DataType::Sampler => "SAMPLER",
            DataType::Sigmas => "SIGMAS",
            DataType::Noise => "NOISE",
            DataType::Guider => "GUIDER",
            DataType::String => "STRING",
            DataType::Integer => "INT",
            DataType::Float => "FLOAT",
            DataType::Any => "*",
        }
    }

    /// Parse a socket tag string back into a data type.
    pub fn from_name(name: &str) -> Option<DataType> {
        if name == "*" {
            return Some(DataType::Any);
        }
        DataType::all().iter().copied().find(|tag| tag.name() == name)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Hierarchical category system for organizing nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeCategory {
    path: Vec<String>,
}

impl NodeCategory {
    /// Create a new category from path components
    pub fn new(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Get the full path as a slice
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Get the category name (last component)
    pub fn name(&self) -> &str {
        self.path.last().map(|s| s.as_str()).unwrap_or("")
    }

    /// Get display string for UI
    pub fn display_string(&self) -> String {
        self.path.join(" > ")
    }

    /// Standard category for variable storage nodes
    pub fn data() -> Self {
        Self::new(&["Data", "Variables"])
    }

    /// Standard category for utility nodes
    pub fn utility() -> Self {
        Self::new(&["Utility"])
    }
}

/// Port definition for node creation
#[derive(Debug, Clone, Serialize)]
pub struct PortDefinition {
    pub name: String,
    pub data_type: DataType,
    pub optional: bool,
    pub description: Option<String>,
}

impl PortDefinition {
    /// Create a required port
    pub fn required(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: false,
            description: None,
        }
    }

    /// Create an optional port
    pub fn optional(name: &str, data_type: DataType) -> Self {
        Self {
            name: name.to_string(),
            data_type,
            optional: true,
            description: None,
        }
    }

    /// Add description to port
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Node execution behavior
#[derive(Debug, Clone, PartialEq)]
pub enum ExecutionMode {
    /// Executes on every graph run, even with unchanged inputs
    Realtime,
    /// Executes when inputs change
    OnDemand,
    /// Executes only when triggered
    Manual,
}

/// Processing cost hint for scheduling
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingCost {
    Minimal, // < 1ms
    Low,     // 1-10ms
    Medium,  // 10-100ms
    High,    // > 100ms
}

/// Rich metadata for nodes - the single source of truth for node behavior
#[derive(Debug, Clone)]
pub struct NodeMetadata {
    // Core identity
    pub node_type: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub version: &'static str,
    pub icon: &'static str,

    // Organization & categorization
    pub category: NodeCategory,
    pub tags: Vec<&'static str>,

    // Connectivity
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,

    // Execution behavior
    pub execution_mode: ExecutionMode,
    pub processing_cost: ProcessingCost,
    /// Output nodes are execution sinks the host always runs
    pub output_node: bool,

    /// Parameter values applied when the host instantiates the node
    pub default_parameters: Vec<(&'static str, NodeData)>,
}

impl NodeMetadata {
    /// Create node metadata with sensible defaults
    pub fn new(
        node_type: &'static str,
        display_name: &'static str,
        category: NodeCategory,
        description: &'static str,
    ) -> Self {
        Self {
            node_type,
            display_name,
            description,
            version: "1.0",
            icon: "⚡",
            category,
            tags: vec![],
            inputs: vec![],
            outputs: vec![],
            execution_mode: ExecutionMode::OnDemand,
            processing_cost: ProcessingCost::Low,
            output_node: false,
            default_parameters: vec![],
        }
    }

    /// Builder pattern methods for fluent configuration
    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_inputs(mut self, inputs: Vec<PortDefinition>) -> Self {
        self.inputs = inputs;
        self
    }

    pub fn with_outputs(mut self, outputs: Vec<PortDefinition>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_tags(mut self, tags: Vec<&'static str>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = mode;
        self
    }

    pub fn with_processing_cost(mut self, cost: ProcessingCost) -> Self {
        self.processing_cost = cost;
        self
    }

    pub fn with_output_node(mut self, output_node: bool) -> Self {
        self.output_node = output_node;
        self
    }

    pub fn with_parameter_default(mut self, name: &'static str, value: NodeData) -> Self {
        self.default_parameters.push((name, value));
        self
    }

    pub fn with_version(mut self, version: &'static str) -> Self {
        self.version = version;
        self
    }
}

/// Node factory trait: metadata plus the execution entry point the host
/// dispatches to.
pub trait NodeFactory: Send + Sync {
    /// Get comprehensive node metadata
    fn metadata() -> NodeMetadata
    where
        Self: Sized;

    /// Execute the node against host-supplied inputs.
    ///
    /// `inputs` aligns with the metadata input sockets; an unconnected
    /// socket arrives as `NodeData::None`.
    fn process(node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError>
    where
        Self: Sized;

    /// Create a node instance with metadata defaults applied
    fn create(id: NodeId) -> Node
    where
        Self: Sized,
    {
        let meta = Self::metadata();
        let mut node = Node::new(id, meta.node_type, meta.display_name);
        for (name, value) in &meta.default_parameters {
            node.set_parameter(*name, value.clone());
        }
        node
    }
}

/// Function pointer types for registry dispatch
type NodeCreator = fn(NodeId) -> Node;
type MetadataProvider = fn() -> NodeMetadata;
type NodeProcessor = fn(&Node, Vec<NodeData>) -> Result<Vec<NodeData>, NodeError>;

/// Registry for managing node factories
pub struct NodeRegistry {
    creators: BTreeMap<String, NodeCreator>,
    metadata_providers: BTreeMap<String, MetadataProvider>,
    processors: BTreeMap<String, NodeProcessor>,
    categories: HashMap<NodeCategory, Vec<String>>,
}

impl NodeRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            creators: BTreeMap::new(),
            metadata_providers: BTreeMap::new(),
            processors: BTreeMap::new(),
            categories: HashMap::new(),
        }
    }

    /// Registry pre-populated with every node this crate ships
    pub fn with_default_nodes() -> Self {
        let mut registry = Self::new();
        registry.register::<crate::nodes::data::SetVariableNode>();
        registry.register::<crate::nodes::data::SetVariableNamedNode>();
        registry.register::<crate::nodes::data::GetVariableNode>();
        registry.register::<crate::nodes::utility::ListVariablesNode>();
        registry.register::<crate::nodes::utility::ClearVariablesNode>();
        registry.register::<crate::nodes::utility::GetLastFrameNode>();
        registry.register::<crate::nodes::utility::FrameByIndexNode>();
        debug!("registered {} node types", registry.creators.len());
        registry
    }

    /// Register a node factory
    pub fn register<T: NodeFactory + 'static>(&mut self) {
        let metadata = T::metadata();
        let node_type = metadata.node_type.to_string();

        self.creators.insert(node_type.clone(), T::create);
        self.metadata_providers.insert(node_type.clone(), T::metadata);
        self.processors.insert(node_type.clone(), T::process);

        self.categories
            .entry(metadata.category.clone())
            .or_default()
            .push(node_type);
    }

    /// Create a node by type name
    pub fn create_node(&self, node_type: &str, id: NodeId) -> Option<Node> {
        self.creators.get(node_type).map(|creator| creator(id))
    }

    /// Metadata for a registered node type
    pub fn metadata(&self, node_type: &str) -> Option<NodeMetadata> {
        self.metadata_providers.get(node_type).map(|provider| provider())
    }

    /// Dispatch execution to the node's registered processor
    pub fn process(&self, node: &Node, inputs: Vec<NodeData>) -> Result<Vec<NodeData>, NodeError> {
        let processor = self
            .processors
            .get(&node.node_type)
            .ok_or_else(|| NodeError::UnknownNodeType(node.node_type.clone()))?;
        processor(node, inputs)
    }

    /// Registered type names, sorted
    pub fn node_types(&self) -> Vec<&str> {
        self.creators.keys().map(|s| s.as_str()).collect()
    }

    /// Type names registered under a category
    pub fn nodes_in_category(&self, category: &NodeCategory) -> &[String] {
        self.categories
            .get(category)
            .map(|names| names.as_slice())
            .unwrap_or(&[])
    }

    /// Registration table the host renders as its node catalog
    pub fn manifest(&self) -> RegistryManifest {
        let nodes = self
            .metadata_providers
            .values()
            .map(|provider| NodeManifestEntry::from_metadata(&provider()))
            .collect();
        RegistryManifest { nodes }
    }

    /// The manifest as pretty-printed JSON
    pub fn manifest_json(&self) -> Result<String, NodeError> {
        Ok(serde_json::to_string_pretty(&self.manifest())?)
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable registration table: one entry per registered node type
#[derive(Debug, Clone, Serialize)]
pub struct RegistryManifest {
    pub nodes: Vec<NodeManifestEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NodeManifestEntry {
    pub node_type: String,
    pub display_name: String,
    pub icon: String,
    pub description: String,
    pub category: String,
    pub inputs: Vec<PortDefinition>,
    pub outputs: Vec<PortDefinition>,
}

impl NodeManifestEntry {
    fn from_metadata(meta: &NodeMetadata) -> Self {
        Self {
            node_type: meta.node_type.to_string(),
            display_name: meta.display_name.to_string(),
            icon: meta.icon.to_string(),
            description: meta.description.to_string(),
            category: meta.category.display_string(),
            inputs: meta.inputs.clone(),
            outputs: meta.outputs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_connects_to_everything() {
        assert!(DataType::Any.can_connect_to(&DataType::Model));
        assert!(DataType::Model.can_connect_to(&DataType::Any));
        assert!(DataType::Model.can_connect_to(&DataType::Model));
        assert!(!DataType::Model.can_connect_to(&DataType::Clip));
    }

    #[test]
    fn tag_names_round_trip() {
        for tag in DataType::all() {
            assert_eq!(DataType::from_name(tag.name()), Some(*tag));
        }
        assert_eq!(DataType::from_name("*"), Some(DataType::Any));
        assert_eq!(DataType::from_name("BOGUS"), None);
    }

    #[test]
    fn category_display_string() {
        let category = NodeCategory::new(&["Data", "Variables"]);
        assert_eq!(category.display_string(), "Data > Variables");
        assert_eq!(category.name(), "Variables");
    }

    #[test]
    fn default_registry_knows_every_shipped_node() {
        let registry = NodeRegistry::with_default_nodes();
        let types = registry.node_types();
        for expected in [
            "Data_SetVariable",
            "Data_SetVariableNamed",
            "Data_GetVariable",
            "Utility_ListVariables",
            "Utility_ClearVariables",
            "Utility_GetLastFrame",
            "Utility_FrameByIndex",
        ] {
            assert!(types.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn create_node_applies_parameter_defaults() {
        let registry = NodeRegistry::with_default_nodes();
        let node = registry.create_node("Data_GetVariable", 7).unwrap();
        assert_eq!(node.id, 7);
        assert_eq!(node.string_parameter("name").as_deref(), Some("my_variable"));
    }

    #[test]
    fn process_unknown_type_errors() {
        let registry = NodeRegistry::new();
        let node = Node::new(0, "Data_Bogus", "Bogus");
        let err = registry.process(&node, vec![]).unwrap_err();
        assert!(matches!(err, NodeError::UnknownNodeType(name) if name == "Data_Bogus"));
    }

    #[test]
    fn manifest_json_carries_display_names_and_socket_tags() {
        let registry = NodeRegistry::with_default_nodes();
        let json = registry.manifest_json().unwrap();
        assert!(json.contains("Set Variable"));
        assert!(json.contains("Get Variable"));
        assert!(json.contains("\"MODEL\""));
        assert!(json.contains("\"*\""));
    }

    #[test]
    fn nodes_in_category_groups_variable_nodes() {
        let registry = NodeRegistry::with_default_nodes();
        let names = registry.nodes_in_category(&NodeCategory::data());
        assert!(names.contains(&"Data_SetVariable".to_string()));
        assert!(names.contains(&"Data_GetVariable".to_string()));
    }
}
