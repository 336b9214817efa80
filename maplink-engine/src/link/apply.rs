//! Propagation execution
//!
//! Applies one routed action to its target layer. Every outcome short of a
//! write is a silent skip: a skipped action never aborts the rest of its
//! wave and never surfaces as a user-visible error.

use std::fmt;

use crate::layer::{DataSource, FILTER_PARAM, TIME_PARAM};
use crate::map::MapState;

use super::{PropagationAction, PropagationTask};

/// Outcome of applying one propagation action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The target layer was written
    Applied,
    /// Nothing was written
    Skipped(SkipReason),
}

/// Why an action was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The action's target resolves to no layer on the map
    TargetNotOnMap,
    /// The originating layer no longer carries the payload to copy
    MissingPayload,
    /// The target's source kind does not support the replacement
    UnsupportedTarget,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::TargetNotOnMap => "target is not on the map",
            SkipReason::MissingPayload => "origin carries no payload",
            SkipReason::UnsupportedTarget => "target source kind is unsupported",
        };
        write!(f, "{}", reason)
    }
}

/// Apply one propagation action to the map.
///
/// Scalar properties are written through the layer's event-free setters;
/// structural replacements copy the payload from the originating layer and
/// trigger the target source's own refresh.
pub fn apply(map: &mut MapState, action: &PropagationAction) -> Applied {
    match &action.task {
        PropagationTask::SetVisible(visible) => match map.layer_mut(&action.target) {
            Some(layer) => {
                layer.write_visible(*visible);
                Applied::Applied
            }
            None => Applied::Skipped(SkipReason::TargetNotOnMap),
        },
        PropagationTask::SetOpacity(opacity) => match map.layer_mut(&action.target) {
            Some(layer) => {
                layer.write_opacity(*opacity);
                Applied::Applied
            }
            None => Applied::Skipped(SkipReason::TargetNotOnMap),
        },
        PropagationTask::ReplaceOgcFilters { from } => {
            let spec = match map.layer(from).and_then(|layer| layer.source().ogc_filters()) {
                Some(spec) => spec.clone(),
                None => return Applied::Skipped(SkipReason::MissingPayload),
            };
            let target = match map.layer_mut(&action.target) {
                Some(layer) => layer,
                None => return Applied::Skipped(SkipReason::TargetNotOnMap),
            };
            match target.source_mut() {
                DataSource::Features(source) => {
                    source.set_ogc_filters(spec);
                    source.clear_features();
                    Applied::Applied
                }
                DataSource::Image(source) => {
                    if let Some(encoded) = spec.encoded.clone() {
                        source.update_param(FILTER_PARAM, encoded);
                    }
                    source.set_ogc_filters(spec);
                    Applied::Applied
                }
                DataSource::Tiles(_) => Applied::Skipped(SkipReason::UnsupportedTarget),
            }
        }
        PropagationTask::ReplaceTimeFilter { from } => {
            let interval = match map.layer(from).and_then(|layer| layer.source().time_filter()) {
                Some(interval) => interval.clone(),
                None => return Applied::Skipped(SkipReason::MissingPayload),
            };
            let target = match map.layer_mut(&action.target) {
                Some(layer) => layer,
                None => return Applied::Skipped(SkipReason::TargetNotOnMap),
            };
            match target.source_mut() {
                DataSource::Image(source) => {
                    source.update_param(TIME_PARAM, interval.encode_param());
                    source.set_time_filter(interval);
                    Applied::Applied
                }
                _ => Applied::Skipped(SkipReason::UnsupportedTarget),
            }
        }
    }
}
