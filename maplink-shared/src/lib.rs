//! # Maplink Shared
//! This crate defines the declaration model and value types shared across the
//! maplink workspace: layer and link-group identifiers, the governed-property
//! enum, link rules, and the filter/temporal payloads carried by data sources.
pub mod types;
