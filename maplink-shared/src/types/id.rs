use serde::{Deserialize, Serialize};
use std::fmt;

/// Layer id reserved for the search pointer-summary overlay.
///
/// The overlay is a synthetic marker layer owned by the search subsystem;
/// it never participates in link resolution, neither as an origin nor as a
/// propagation target.
pub const POINTER_SUMMARY_LAYER_ID: &str = "searchPointerSummaryId";

/// Unique identifier of a layer within a map.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerId(String);

impl LayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id is the reserved pointer-summary overlay id.
    pub fn is_pointer_summary(&self) -> bool {
        self.0 == POINTER_SUMMARY_LAYER_ID
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LayerId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Identifier of a link group.
///
/// Shared by every layer that belongs to one side of a link; uniqueness
/// across layers is not required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkId(String);

impl LinkId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LinkId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for LinkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
