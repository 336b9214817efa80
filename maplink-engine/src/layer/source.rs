//! Data-source kinds and their refresh capabilities
//!
//! Structural propagation needs different side effects per source kind:
//! feature sources drop their client-side cache, image services re-issue a
//! parameterized request, tile pyramids support neither. The variants make
//! that capability split explicit instead of probing loosely-typed options.

use std::collections::HashMap;

use maplink_shared::types::{OgcFilterSpec, SourceDef, TimeInterval};

/// Request parameter carrying the encoded OGC filter on image services.
pub const FILTER_PARAM: &str = "FILTER";

/// Request parameter carrying the temporal constraint on image services.
pub const TIME_PARAM: &str = "TIME";

/// Runtime data source of a layer.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    Features(FeatureSource),
    Image(ImageSource),
    Tiles(TileSource),
}

impl DataSource {
    /// Build the runtime source from its declared configuration
    pub fn from_def(def: &SourceDef) -> Self {
        match def {
            SourceDef::Features { ogc_filters } => DataSource::Features(FeatureSource {
                ogc_filters: ogc_filters.clone(),
                cache_generation: 0,
            }),
            SourceDef::Image {
                ogc_filters,
                time_filter,
                params,
            } => DataSource::Image(ImageSource {
                ogc_filters: ogc_filters.clone(),
                time_filter: time_filter.clone(),
                params: params.clone(),
                request_revision: 0,
            }),
            SourceDef::Tiles => DataSource::Tiles(TileSource),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            DataSource::Features(_) => "features",
            DataSource::Image(_) => "image",
            DataSource::Tiles(_) => "tiles",
        }
    }

    /// Current OGC filter, on kinds that carry one
    pub fn ogc_filters(&self) -> Option<&OgcFilterSpec> {
        match self {
            DataSource::Features(source) => source.ogc_filters.as_ref(),
            DataSource::Image(source) => source.ogc_filters.as_ref(),
            DataSource::Tiles(_) => None,
        }
    }

    /// Current temporal constraint, on kinds that carry one
    pub fn time_filter(&self) -> Option<&TimeInterval> {
        match self {
            DataSource::Image(source) => source.time_filter.as_ref(),
            _ => None,
        }
    }
}

/// Vector features fetched from a feature service and cached client-side.
///
/// A filter replacement invalidates the whole cache; the next render fetches
/// features under the new filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSource {
    ogc_filters: Option<OgcFilterSpec>,
    cache_generation: u64,
}

impl FeatureSource {
    pub fn ogc_filters(&self) -> Option<&OgcFilterSpec> {
        self.ogc_filters.as_ref()
    }

    /// Generation counter of the client-side cache; bumped by every clear
    pub fn cache_generation(&self) -> u64 {
        self.cache_generation
    }

    pub(crate) fn set_ogc_filters(&mut self, spec: OgcFilterSpec) {
        self.ogc_filters = Some(spec);
    }

    pub(crate) fn clear_features(&mut self) {
        self.cache_generation += 1;
    }
}

/// Server-rendered imagery requested with a parameter map.
///
/// Filter and time replacement go through request parameters; the refresh is
/// fire-and-forget, tracked here as a request revision.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    ogc_filters: Option<OgcFilterSpec>,
    time_filter: Option<TimeInterval>,
    params: HashMap<String, String>,
    request_revision: u64,
}

impl ImageSource {
    pub fn ogc_filters(&self) -> Option<&OgcFilterSpec> {
        self.ogc_filters.as_ref()
    }

    pub fn time_filter(&self) -> Option<&TimeInterval> {
        self.time_filter.as_ref()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Revision of the outgoing request; bumped by every parameter update
    pub fn request_revision(&self) -> u64 {
        self.request_revision
    }

    pub(crate) fn set_ogc_filters(&mut self, spec: OgcFilterSpec) {
        self.ogc_filters = Some(spec);
    }

    pub(crate) fn set_time_filter(&mut self, interval: TimeInterval) {
        self.time_filter = Some(interval);
    }

    pub(crate) fn update_param(&mut self, name: &str, value: String) {
        self.params.insert(name.to_string(), value);
        self.request_revision += 1;
    }
}

/// Pre-rendered tile pyramid; no filter or time capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSource;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_clear_bumps_generation() {
        let mut source = match DataSource::from_def(&SourceDef::Features { ogc_filters: None }) {
            DataSource::Features(source) => source,
            other => panic!("expected a feature source, got {:?}", other),
        };
        assert_eq!(source.cache_generation(), 0);
        source.clear_features();
        source.clear_features();
        assert_eq!(source.cache_generation(), 2);
    }

    #[test]
    fn test_image_param_update_bumps_revision() {
        let def = SourceDef::Image {
            ogc_filters: None,
            time_filter: None,
            params: HashMap::from([("LAYERS".to_string(), "roads".to_string())]),
        };
        let mut source = match DataSource::from_def(&def) {
            DataSource::Image(source) => source,
            other => panic!("expected an image source, got {:?}", other),
        };
        source.update_param(FILTER_PARAM, "status='open'".to_string());
        assert_eq!(source.param(FILTER_PARAM), Some("status='open'"));
        assert_eq!(source.param("LAYERS"), Some("roads"));
        assert_eq!(source.request_revision(), 1);
    }

    #[test]
    fn test_capabilities_by_kind() {
        let features = DataSource::from_def(&SourceDef::Features {
            ogc_filters: Some(OgcFilterSpec::new(json!({}))),
        });
        assert!(features.ogc_filters().is_some());
        assert!(features.time_filter().is_none());

        let tiles = DataSource::from_def(&SourceDef::Tiles);
        assert!(tiles.ogc_filters().is_none());
        assert!(tiles.time_filter().is_none());
    }
}
