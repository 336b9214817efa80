//! The map's layer collection
//!
//! `MapState` owns the ordered layer list and the per-map link table. The
//! table is invalidated whenever the layer set changes structurally and is
//! rebuilt lazily from the full layer list, so links declared before their
//! target layer exists become live as soon as the layer joins.
//!
//! The public mutators are the upstream edge of the linking subsystem: they
//! write the layer's local state and return the `ChangeEvent` describing the
//! change, which the caller feeds to `link::propagate`.

use tracing::{debug, info, warn};

use maplink_shared::types::{LayerId, LinkId, OgcFilterSpec, TimeInterval};

use crate::errors::MapError;
use crate::events::{ChangeEvent, LayerChange, PropertyChange, StructuralChange};
use crate::layer::{DataSource, Layer, FILTER_PARAM, TIME_PARAM};
use crate::link::{compile, LinkTable};

/// The layers of a map, in rendering order, with unique ids.
#[derive(Debug, Default)]
pub struct MapState {
    layers: Vec<Layer>,
    link_table: Option<LinkTable>,
}

impl MapState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a layer to the map.
    ///
    /// Invalidates the link table: any existing layer may declare a link
    /// pointing at the newcomer.
    pub fn add_layer(&mut self, layer: Layer) -> Result<(), MapError> {
        if self.layers.iter().any(|existing| existing.id() == layer.id()) {
            return Err(MapError::DuplicateLayer(layer.id().clone()));
        }
        debug!(layer = %layer.id(), "Layer attached");
        self.layers.push(layer);
        self.link_table = None;
        Ok(())
    }

    /// Detach a layer from the map, invalidating the link table.
    pub fn remove_layer(&mut self, id: &LayerId) -> Result<Layer, MapError> {
        let index = self
            .layers
            .iter()
            .position(|layer| layer.id() == id)
            .ok_or_else(|| MapError::UnknownLayer(id.clone()))?;
        debug!(layer = %id, "Layer detached");
        self.link_table = None;
        Ok(self.layers.remove(index))
    }

    pub fn layer(&self, id: &LayerId) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Layers belonging to the given link group, in map order
    pub fn layers_in_group<'a>(&'a self, group: &'a LinkId) -> impl Iterator<Item = &'a Layer> {
        self.layers
            .iter()
            .filter(move |layer| layer.link_id() == Some(group))
    }

    /// Compile the link table if the layer set changed since the last build.
    pub fn ensure_links(&mut self) -> &LinkTable {
        let layers = &self.layers;
        self.link_table.get_or_insert_with(|| {
            let table = compile(layers);
            info!(edges = table.len(), layers = layers.len(), "Compiled link table");
            table
        })
    }

    /// The current link table, if compiled
    pub fn link_table(&self) -> Option<&LinkTable> {
        self.link_table.as_ref()
    }

    /// Set a layer's visibility, returning the change event.
    pub fn set_visible(&mut self, id: &LayerId, visible: bool) -> Result<ChangeEvent, MapError> {
        self.layer_mut_or_err(id)?.write_visible(visible);
        Ok(ChangeEvent::new(
            id.clone(),
            LayerChange::Property(PropertyChange::Visible(visible)),
        ))
    }

    /// Set a layer's opacity, returning the change event.
    pub fn set_opacity(&mut self, id: &LayerId, opacity: f64) -> Result<ChangeEvent, MapError> {
        self.layer_mut_or_err(id)?.write_opacity(opacity);
        Ok(ChangeEvent::new(
            id.clone(),
            LayerChange::Property(PropertyChange::Opacity(opacity)),
        ))
    }

    /// Replace a layer's OGC filter, refreshing its own source, and return
    /// the structural change event.
    pub fn replace_ogc_filters(
        &mut self,
        id: &LayerId,
        spec: OgcFilterSpec,
    ) -> Result<ChangeEvent, MapError> {
        let layer = self.layer_mut_or_err(id)?;
        match layer.source_mut() {
            DataSource::Features(source) => {
                source.set_ogc_filters(spec);
                source.clear_features();
            }
            DataSource::Image(source) => {
                if let Some(encoded) = spec.encoded.clone() {
                    source.update_param(FILTER_PARAM, encoded);
                }
                source.set_ogc_filters(spec);
            }
            DataSource::Tiles(_) => {
                warn!(layer = %id, "Tile source cannot carry an OGC filter");
            }
        }
        Ok(ChangeEvent::new(
            id.clone(),
            LayerChange::Structural(StructuralChange::OgcFilters),
        ))
    }

    /// Replace a layer's temporal constraint, refreshing its own source, and
    /// return the structural change event.
    pub fn replace_time_filter(
        &mut self,
        id: &LayerId,
        interval: TimeInterval,
    ) -> Result<ChangeEvent, MapError> {
        let layer = self.layer_mut_or_err(id)?;
        match layer.source_mut() {
            DataSource::Image(source) => {
                source.update_param(TIME_PARAM, interval.encode_param());
                source.set_time_filter(interval);
            }
            other => {
                warn!(layer = %id, kind = other.kind(), "Source kind is not time-capable");
            }
        }
        Ok(ChangeEvent::new(
            id.clone(),
            LayerChange::Structural(StructuralChange::TimeFilter),
        ))
    }

    pub(crate) fn layer_mut(&mut self, id: &LayerId) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.id() == id)
    }

    fn layer_mut_or_err(&mut self, id: &LayerId) -> Result<&mut Layer, MapError> {
        self.layer_mut(id)
            .ok_or_else(|| MapError::UnknownLayer(id.clone()))
    }
}
