//! Maplink Engine - Layer Linking and Property Propagation
//!
//! The engine keeps the layers of a map consistent with each other according
//! to the link groups declared in their configuration:
//! - `layer`: the layer model and its tagged data-source kinds
//! - `map`: the ordered layer collection owning the per-map link table
//! - `link`: link compilation, change routing, and propagation execution
//! - `events`: the change-event stream consumed by the router

pub mod errors;
pub mod events;
pub mod layer;
pub mod link;
pub mod map;

// Re-export commonly used types
pub use errors::MapError;
pub use events::{ChangeEvent, LayerChange, PropertyChange, StructuralChange};
pub use layer::Layer;
pub use link::{propagate, ComputedLink, LinkTable, PropagationAction, Wave};
pub use map::MapState;
