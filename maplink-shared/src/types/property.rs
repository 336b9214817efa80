use serde::{Deserialize, Serialize};
use std::fmt;

// Wire names for linked properties - must match the declared configuration shape
pub const PROPERTY_VISIBLE: &str = "visible";
pub const PROPERTY_OPACITY: &str = "opacity";
pub const PROPERTY_OGC_FILTERS: &str = "ogcFilters";
pub const PROPERTY_TIME_FILTER: &str = "timeFilter";

// All valid property names
pub const VALID_PROPERTY_NAMES: &[&str] = &[
    PROPERTY_VISIBLE,
    PROPERTY_OPACITY,
    PROPERTY_OGC_FILTERS,
    PROPERTY_TIME_FILTER,
];

/// A layer property governed by link propagation.
///
/// Only properties enumerated in a link rule are propagated; a change to any
/// other layer property is ignored by the linking subsystem.
#[derive(Clone, Debug, PartialEq, Eq, Copy, Hash, Serialize, Deserialize)]
pub enum LinkedProperty {
    #[serde(rename = "visible")]
    Visible,
    #[serde(rename = "opacity")]
    Opacity,
    #[serde(rename = "ogcFilters")]
    OgcFilters,
    #[serde(rename = "timeFilter")]
    TimeFilter,
}

impl fmt::Display for LinkedProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl AsRef<str> for LinkedProperty {
    fn as_ref(&self) -> &str {
        match self {
            LinkedProperty::Visible => PROPERTY_VISIBLE,
            LinkedProperty::Opacity => PROPERTY_OPACITY,
            LinkedProperty::OgcFilters => PROPERTY_OGC_FILTERS,
            LinkedProperty::TimeFilter => PROPERTY_TIME_FILTER,
        }
    }
}

impl std::convert::TryFrom<&str> for LinkedProperty {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            PROPERTY_VISIBLE => Ok(LinkedProperty::Visible),
            PROPERTY_OPACITY => Ok(LinkedProperty::Opacity),
            PROPERTY_OGC_FILTERS => Ok(LinkedProperty::OgcFilters),
            PROPERTY_TIME_FILTER => Ok(LinkedProperty::TimeFilter),
            _ => Err(format!("Unknown linked property: {}", value)),
        }
    }
}

impl LinkedProperty {
    /// Returns all valid property name strings
    pub fn all_string_values() -> &'static [&'static str] {
        VALID_PROPERTY_NAMES
    }

    /// Validates if a string is a valid linked property name
    pub fn is_valid_string(value: &str) -> bool {
        VALID_PROPERTY_NAMES.contains(&value)
    }

    /// Whether this property is replaced through the data source rather than
    /// set directly on the layer
    pub fn is_structural(&self) -> bool {
        matches!(self, LinkedProperty::OgcFilters | LinkedProperty::TimeFilter)
    }
}
