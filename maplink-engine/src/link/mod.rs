//! Link resolution and property propagation
//!
//! This module contains the propagation core:
//! - `compile`: expand link declarations into the per-map `LinkTable`
//! - `route`: resolve one change event into its `PropagationAction`s
//! - `apply`: execute one action against the target layer
//! - `propagate`: run one full wave and report what happened
//!
//! Propagation is one-hop-only: the executor writes through event-free
//! setters, so an applied action never feeds a second wave back into the
//! router.

mod apply;
mod compile;
mod route;

pub use apply::{apply, Applied, SkipReason};
pub use compile::{compile, ComputedLink, LinkTable};
pub use route::{route, PropagationAction, PropagationTask};

use tracing::{debug, warn};

use crate::events::ChangeEvent;
use crate::map::MapState;

/// Summary of one propagation wave.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Wave {
    /// Actions resolved by the router
    pub emitted: usize,
    /// Actions that wrote their target
    pub applied: usize,
    /// Actions skipped without a write
    pub skipped: usize,
}

/// Run one propagation wave for a change event.
///
/// Compiles the link table if the layer set changed, routes the event, and
/// applies every action in compiled order. Runs to completion; skipped
/// actions are logged and counted, never raised.
pub fn propagate(map: &mut MapState, event: &ChangeEvent) -> Wave {
    map.ensure_links();
    let actions = match map.link_table() {
        Some(table) => route(event, map, table),
        None => Vec::new(),
    };

    let mut wave = Wave {
        emitted: actions.len(),
        ..Wave::default()
    };
    for action in &actions {
        match apply(map, action) {
            Applied::Applied => {
                wave.applied += 1;
                debug!(layer = %action.target, task = ?action.task, "Propagated");
            }
            Applied::Skipped(reason) => {
                wave.skipped += 1;
                warn!(layer = %action.target, reason = %reason, "Propagation skipped");
            }
        }
    }
    wave
}
