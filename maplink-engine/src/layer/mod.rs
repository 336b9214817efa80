//! The layer model
//!
//! A layer couples its declared options with the current rendering state and
//! the runtime data source. Link declarations ride along in the options; the
//! map owns the compiled form.

mod source;

pub use source::{DataSource, FeatureSource, ImageSource, TileSource, FILTER_PARAM, TIME_PARAM};

use maplink_shared::types::{LayerId, LayerOptions, LinkId};

/// A map layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    options: LayerOptions,
    visible: bool,
    opacity: f64,
    source: DataSource,
}

impl Layer {
    /// Build a layer from its declared options.
    ///
    /// Undeclared visibility defaults to visible, except for base layers
    /// which start hidden; undeclared opacity defaults to opaque.
    pub fn new(options: LayerOptions) -> Self {
        let visible = match options.visible {
            Some(visible) => visible,
            None => !options.base_layer,
        };
        let opacity = options.opacity.unwrap_or(1.0);
        let source = DataSource::from_def(&options.source);
        Self {
            options,
            visible,
            opacity,
            source,
        }
    }

    pub fn id(&self) -> &LayerId {
        &self.options.id
    }

    pub fn title(&self) -> Option<&str> {
        self.options.title.as_deref()
    }

    /// The link group this layer belongs to, if it declares one
    pub fn link_id(&self) -> Option<&LinkId> {
        self.options
            .linked_layers
            .as_ref()
            .map(|group| &group.link_id)
    }

    pub fn options(&self) -> &LayerOptions {
        &self.options
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    // Propagation writes the rendering state through these; they do not mint
    // change events, so an applied action can never start a second wave.

    pub(crate) fn write_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub(crate) fn write_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    pub(crate) fn source_mut(&mut self) -> &mut DataSource {
        &mut self.source
    }
}
