//! Core data types that flow between nodes

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Opaque handle to a runtime object (model weights, text encoders,
/// samplers, and similar host-loaded resources).
///
/// The handle records the object's class name for type detection and
/// diagnostics; the object itself is never inspected. Clones share the
/// underlying object.
#[derive(Clone)]
pub struct ObjectHandle {
    class_name: String,
    object: Arc<dyn Any + Send + Sync>,
}

impl ObjectHandle {
    /// Wrap an already-shared object.
    pub fn new(class_name: impl Into<String>, object: Arc<dyn Any + Send + Sync>) -> Self {
        Self {
            class_name: class_name.into(),
            object,
        }
    }

    /// Wrap an owned value.
    pub fn from_value<T: Any + Send + Sync>(class_name: impl Into<String>, value: T) -> Self {
        Self::new(class_name, Arc::new(value))
    }

    /// The recorded class name, e.g. `"ModelPatcher"`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Borrow the wrapped object as a concrete type.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.object.downcast_ref::<T>()
    }

    /// Whether two handles share the same underlying object.
    pub fn same_object(&self, other: &ObjectHandle) -> bool {
        Arc::ptr_eq(&self.object, &other.object)
    }
}

impl fmt::Debug for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectHandle({})", self.class_name)
    }
}

impl PartialEq for ObjectHandle {
    fn eq(&self, other: &Self) -> bool {
        self.class_name == other.class_name && self.same_object(other)
    }
}

/// Multi-dimensional array data with an explicit shape.
///
/// Storage is row-major; `shape` leads with the batch axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TensorData {
    pub shape: Vec<usize>,
    pub data: Vec<f32>,
}

impl TensorData {
    /// Create a tensor from a shape and matching row-major data.
    pub fn new(shape: Vec<usize>, data: Vec<f32>) -> Self {
        debug_assert_eq!(shape.iter().product::<usize>(), data.len());
        Self { shape, data }
    }

    /// Create a zero-filled tensor of the given shape.
    pub fn zeros(shape: &[usize]) -> Self {
        let len = shape.iter().product();
        Self {
            shape: shape.to_vec(),
            data: vec![0.0; len],
        }
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Extent of one axis, zero if the axis does not exist.
    pub fn dim(&self, axis: usize) -> usize {
        self.shape.get(axis).copied().unwrap_or(0)
    }

    /// Total element count.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Copy out one slice along the leading axis, keeping the rank
    /// (the result's leading extent is 1). `None` if the tensor has no
    /// axes or the index is out of range.
    pub fn index_axis0(&self, index: usize) -> Option<TensorData> {
        if self.shape.is_empty() || index >= self.shape[0] {
            return None;
        }
        let stride: usize = self.shape[1..].iter().product();
        let start = index * stride;
        let mut shape = self.shape.clone();
        shape[0] = 1;
        Some(TensorData {
            shape,
            data: self.data[start..start + stride].to_vec(),
        })
    }
}

/// Core data types that flow between nodes.
///
/// Opaque objects, dictionary- and list-shaped payloads, and shaped
/// tensors keep enough structure for type detection to probe; primitives
/// and the null value round out the set.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    /// Opaque runtime object (model weights, encoders, samplers)
    Object(ObjectHandle),
    /// Dictionary-shaped payload (latent dicts, conditioning metadata)
    Map(BTreeMap<String, NodeData>),
    /// List-shaped payload (conditioning pair lists, batches)
    List(Vec<NodeData>),
    /// Multi-dimensional array with an explicit shape
    Tensor(TensorData),
    /// Generic value types
    String(String),
    Integer(i32),
    Float(f32),
    Boolean(bool),
    /// Empty/null value
    None,
}

impl NodeData {
    /// Whether this is the null value. A stored null is still a stored
    /// value; only the store itself distinguishes "never written".
    pub fn is_none(&self) -> bool {
        matches!(self, NodeData::None)
    }

    /// Convenience constructor for opaque object payloads.
    pub fn object<T: Any + Send + Sync>(class_name: impl Into<String>, value: T) -> Self {
        NodeData::Object(ObjectHandle::from_value(class_name, value))
    }
}
