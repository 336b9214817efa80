//! Error types for the map model.
//! Propagation itself is best-effort and does not error; only the map's own
//! contract violations surface here.
use maplink_shared::types::LayerId;
use thiserror::Error;

/// Represents errors raised by the map's layer collection.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("A layer with id '{0}' is already on the map")]
    DuplicateLayer(LayerId),

    #[error("No layer with id '{0}' is on the map")]
    UnknownLayer(LayerId),
}
