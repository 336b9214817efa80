use serde::{Deserialize, Serialize};

/// An OGC filter definition attached to a data source.
///
/// The filter tree itself is opaque to the linking subsystem: it is authored
/// by the filtering tools, carried here as raw JSON, and copied wholesale
/// between linked sources. `encoded` holds the server-side representation
/// for sources that apply filters through a request parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OgcFilterSpec {
    /// Opaque filter tree
    pub definition: serde_json::Value,

    /// Encoded `FILTER` request parameter, when the filter has been encoded
    /// for a parameter-based source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encoded: Option<String>,
}

impl OgcFilterSpec {
    pub fn new(definition: serde_json::Value) -> Self {
        Self {
            definition,
            encoded: None,
        }
    }

    pub fn with_encoded(definition: serde_json::Value, encoded: impl Into<String>) -> Self {
        Self {
            definition,
            encoded: Some(encoded.into()),
        }
    }
}
