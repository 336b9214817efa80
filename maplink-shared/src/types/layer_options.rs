use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{LayerId, LinkGroup, OgcFilterSpec, TimeInterval};

/// Static configuration of a layer, supplied at construction time.
///
/// This is the persisted shape: maps are described as a list of these
/// objects, and the optional `linked_layers` block is the only place link
/// declarations live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerOptions {
    pub id: LayerId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Base layers default to hidden unless visibility is declared
    #[serde(default)]
    pub base_layer: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linked_layers: Option<LinkGroup>,

    pub source: SourceDef,
}

/// Declared data source of a layer, tagged by kind.
///
/// The kind decides which structural propagations the layer can receive and
/// how it refreshes: feature sources hold a client-side cache that is
/// cleared, image services re-issue a parameterized request, tile pyramids
/// support neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum SourceDef {
    /// Vector features fetched from a feature service and cached client-side
    #[serde(rename_all = "camelCase")]
    Features {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ogc_filters: Option<OgcFilterSpec>,
    },

    /// Server-rendered imagery requested with a parameter map
    #[serde(rename_all = "camelCase")]
    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        ogc_filters: Option<OgcFilterSpec>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_filter: Option<TimeInterval>,

        #[serde(default, skip_serializing_if = "HashMap::is_empty")]
        params: HashMap<String, String>,
    },

    /// Pre-rendered tile pyramid; no filter or time capability
    Tiles,
}
