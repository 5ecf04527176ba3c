//! Node labels.
//!
//! A [`NodeId`] is an interned label that is always a valid XML name, so it
//! can be written straight into an SVG `id` attribute.

use crate::error::CanvasError;
use lasso::{Spur, ThreadedRodeo};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static LABELS: LazyLock<ThreadedRodeo> = LazyLock::new(ThreadedRodeo::default);
static NEXT_LABEL: AtomicU64 = AtomicU64::new(0);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(Spur);

impl NodeId {
    /// Label a node. Labels start with a letter or `_` and continue with
    /// letters, digits, `_`, `-` or `.`.
    pub fn new(label: &str) -> Result<Self, CanvasError> {
        if !is_xml_name(label) {
            return Err(CanvasError::InvalidNode {
                reason: format!("`{label}` is not a valid node label"),
            });
        }
        Ok(NodeId(LABELS.get_or_intern(label)))
    }

    /// A fresh `node_N` label.
    pub fn next() -> Self {
        let n = NEXT_LABEL.fetch_add(1, Ordering::Relaxed);
        NodeId(LABELS.get_or_intern(format!("node_{n}")))
    }

    pub fn as_str(&self) -> &str {
        LABELS.resolve(&self.0)
    }
}

fn is_xml_name(label: &str) -> bool {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeId").field(&self.as_str()).finish()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        NodeId::new(&label).map_err(serde::de::Error::custom)
    }
}
