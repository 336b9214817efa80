mod id;
mod layer_options;
mod link;
mod ogc_filter;
mod property;
mod time_filter;

pub use id::{LayerId, LinkId, POINTER_SUMMARY_LAYER_ID};
pub use layer_options::{LayerOptions, SourceDef};
pub use link::{LinkGroup, LinkRule};
pub use ogc_filter::OgcFilterSpec;
pub use property::LinkedProperty;
pub use time_filter::TimeInterval;
