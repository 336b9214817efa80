//! Layer change events
//!
//! Changes to a layer are surfaced as an explicit event stream instead of a
//! rendering-library side channel. The public `MapState` mutators mint these
//! events; feeding one to `link::propagate` runs a single propagation wave.

use maplink_shared::types::{LayerId, LinkedProperty};

/// A change observed on a layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeEvent {
    /// The layer the change originated on
    pub layer: LayerId,
    pub change: LayerChange,
}

impl ChangeEvent {
    pub fn new(layer: LayerId, change: LayerChange) -> Self {
        Self { layer, change }
    }

    /// The governed property this change maps to
    pub fn property(&self) -> LinkedProperty {
        self.change.property()
    }
}

/// The payload of a change event.
#[derive(Debug, Clone, PartialEq)]
pub enum LayerChange {
    /// A scalar rendering property changed, carrying the new value
    Property(PropertyChange),
    /// The layer's data-source configuration changed; the new payload is
    /// read from the originating layer's source options at apply time
    Structural(StructuralChange),
}

impl LayerChange {
    pub fn property(&self) -> LinkedProperty {
        match self {
            LayerChange::Property(change) => change.property(),
            LayerChange::Structural(change) => change.property(),
        }
    }
}

/// A scalar property change with its new value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyChange {
    Visible(bool),
    Opacity(f64),
}

impl PropertyChange {
    pub fn property(&self) -> LinkedProperty {
        match self {
            PropertyChange::Visible(_) => LinkedProperty::Visible,
            PropertyChange::Opacity(_) => LinkedProperty::Opacity,
        }
    }
}

/// A structural change to the layer's data-source configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralChange {
    OgcFilters,
    TimeFilter,
}

impl StructuralChange {
    pub fn property(&self) -> LinkedProperty {
        match self {
            StructuralChange::OgcFilters => LinkedProperty::OgcFilters,
            StructuralChange::TimeFilter => LinkedProperty::TimeFilter,
        }
    }
}
