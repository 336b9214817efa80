//! Change routing
//!
//! Turns one observed change event into the set of propagation actions of
//! its wave. Routing is read-only: actions name their target layer and carry
//! everything the executor needs, so applying them later cannot consult
//! stale references.

use maplink_shared::types::{LayerId, LinkId};

use crate::events::{ChangeEvent, LayerChange, PropertyChange, StructuralChange};
use crate::map::MapState;

use super::LinkTable;

/// A single pending write against a target layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PropagationAction {
    pub target: LayerId,
    pub task: PropagationTask,
}

/// What to write on the target layer.
#[derive(Debug, Clone, PartialEq)]
pub enum PropagationTask {
    SetVisible(bool),
    SetOpacity(f64),
    /// Copy the OGC filter from the originating layer's source options
    ReplaceOgcFilters { from: LayerId },
    /// Copy the temporal constraint from the originating layer's source
    /// options
    ReplaceTimeFilter { from: LayerId },
}

/// Resolve the propagation actions for one change event.
///
/// Filtering order: the reserved pointer-summary id never participates; the
/// origin must be on the map and belong to a linked group; only links
/// governing the changed property fire; one-way links fire only from their
/// source side. Each firing link targets every matching layer of the far
/// group, and both groups for bidirectional links, in map-layer-list order.
/// The originating layer is never targeted.
pub fn route(event: &ChangeEvent, map: &MapState, table: &LinkTable) -> Vec<PropagationAction> {
    if event.layer.is_pointer_summary() {
        return Vec::new();
    }
    let origin = match map.layer(&event.layer) {
        Some(layer) => layer,
        None => return Vec::new(),
    };
    let origin_group = match origin.link_id() {
        Some(group) => group,
        None => return Vec::new(),
    };

    let task = task_for(event);
    let mut actions = Vec::new();
    for link in table.links_touching(origin_group) {
        if !link.governs(event.property()) {
            continue;
        }
        // One-way links never fire dst to src
        if !link.bidirectional && *origin_group != link.src_id {
            continue;
        }
        push_group_targets(&mut actions, map, &link.dst_id, &event.layer, &task);
        if link.bidirectional && link.src_id != link.dst_id {
            push_group_targets(&mut actions, map, &link.src_id, &event.layer, &task);
        }
    }
    actions
}

/// The task every target of this event receives
fn task_for(event: &ChangeEvent) -> PropagationTask {
    match &event.change {
        LayerChange::Property(PropertyChange::Visible(visible)) => {
            PropagationTask::SetVisible(*visible)
        }
        LayerChange::Property(PropertyChange::Opacity(opacity)) => {
            PropagationTask::SetOpacity(*opacity)
        }
        LayerChange::Structural(StructuralChange::OgcFilters) => PropagationTask::ReplaceOgcFilters {
            from: event.layer.clone(),
        },
        LayerChange::Structural(StructuralChange::TimeFilter) => PropagationTask::ReplaceTimeFilter {
            from: event.layer.clone(),
        },
    }
}

/// Target every layer of the group except the origin and the reserved marker
fn push_group_targets(
    actions: &mut Vec<PropagationAction>,
    map: &MapState,
    group: &LinkId,
    origin: &LayerId,
    task: &PropagationTask,
) {
    for layer in map.layers_in_group(group) {
        if layer.id() == origin || layer.id().is_pointer_summary() {
            continue;
        }
        actions.push(PropagationAction {
            target: layer.id().clone(),
            task: task.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layer;
    use maplink_shared::types::{
        LayerOptions, LinkGroup, LinkRule, LinkedProperty, SourceDef, POINTER_SUMMARY_LAYER_ID,
    };

    fn layer(id: &str, link: Option<(&str, Vec<LinkRule>)>) -> Layer {
        Layer::new(LayerOptions {
            id: LayerId::from(id),
            title: None,
            base_layer: false,
            visible: None,
            opacity: None,
            z_index: None,
            linked_layers: link.map(|(link_id, links)| LinkGroup {
                link_id: LinkId::from(link_id),
                links,
            }),
            source: SourceDef::Tiles,
        })
    }

    fn rule(targets: &[&str], bidirectional: Option<bool>, properties: Vec<LinkedProperty>) -> LinkRule {
        LinkRule {
            linked_ids: targets.iter().map(|id| LinkId::from(*id)).collect(),
            bidirectional,
            properties,
        }
    }

    fn map_of(layers: Vec<Layer>) -> MapState {
        let mut map = MapState::new();
        for layer in layers {
            map.add_layer(layer).unwrap();
        }
        map
    }

    fn visible_event(id: &str, visible: bool) -> ChangeEvent {
        ChangeEvent::new(
            LayerId::from(id),
            LayerChange::Property(PropertyChange::Visible(visible)),
        )
    }

    fn opacity_event(id: &str, opacity: f64) -> ChangeEvent {
        ChangeEvent::new(
            LayerId::from(id),
            LayerChange::Property(PropertyChange::Opacity(opacity)),
        )
    }

    #[test]
    fn test_ungoverned_property_routes_nothing() {
        // The link governs visibility only; an opacity change is ignored
        let mut map = map_of(vec![
            layer(
                "x",
                Some(("A", vec![rule(&["B"], None, vec![LinkedProperty::Visible])])),
            ),
            layer("y", Some(("B", vec![]))),
        ]);
        let table = map.ensure_links().clone();

        let actions = route(&opacity_event("x", 0.5), &map, &table);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_bidirectional_targets_every_far_layer() {
        let mut map = map_of(vec![
            layer(
                "x",
                Some(("A", vec![rule(&["B"], None, vec![LinkedProperty::Visible])])),
            ),
            layer("y1", Some(("B", vec![]))),
            layer("y2", Some(("B", vec![]))),
        ]);
        let table = map.ensure_links().clone();

        let actions = route(&visible_event("x", false), &map, &table);
        let targets: Vec<_> = actions.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["y1", "y2"]);
        assert!(actions
            .iter()
            .all(|a| a.task == PropagationTask::SetVisible(false)));
    }

    #[test]
    fn test_bidirectional_back_propagates_to_origin_siblings() {
        // The change originates on the dst side; src-side layers and the
        // origin's dst-side sibling are all targeted, origin excluded
        let mut map = map_of(vec![
            layer(
                "x",
                Some(("A", vec![rule(&["B"], None, vec![LinkedProperty::Visible])])),
            ),
            layer("y1", Some(("B", vec![]))),
            layer("y2", Some(("B", vec![]))),
        ]);
        let table = map.ensure_links().clone();

        let actions = route(&visible_event("y1", true), &map, &table);
        let targets: Vec<_> = actions.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["y2", "x"]);
    }

    #[test]
    fn test_one_way_never_fires_dst_to_src() {
        let mut map = map_of(vec![
            layer(
                "x",
                Some((
                    "A",
                    vec![rule(&["B"], Some(false), vec![LinkedProperty::Visible])],
                )),
            ),
            layer("y", Some(("B", vec![]))),
        ]);
        let table = map.ensure_links().clone();

        // src to dst fires
        let forward = route(&visible_event("x", false), &map, &table);
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].target, LayerId::from("y"));

        // dst to src never does
        let backward = route(&visible_event("y", false), &map, &table);
        assert!(backward.is_empty());
    }

    #[test]
    fn test_pointer_summary_origin_is_rejected() {
        let mut map = map_of(vec![
            layer(
                POINTER_SUMMARY_LAYER_ID,
                Some(("A", vec![rule(&["B"], None, vec![LinkedProperty::Visible])])),
            ),
            layer("y", Some(("B", vec![]))),
        ]);
        let table = map.ensure_links().clone();

        let actions = route(&visible_event(POINTER_SUMMARY_LAYER_ID, false), &map, &table);
        assert!(actions.is_empty());
    }

    #[test]
    fn test_pointer_summary_is_never_a_target() {
        let mut map = map_of(vec![
            layer(
                "x",
                Some(("A", vec![rule(&["B"], None, vec![LinkedProperty::Visible])])),
            ),
            layer(POINTER_SUMMARY_LAYER_ID, Some(("B", vec![]))),
            layer("y", Some(("B", vec![]))),
        ]);
        let table = map.ensure_links().clone();

        let actions = route(&visible_event("x", false), &map, &table);
        let targets: Vec<_> = actions.iter().map(|a| a.target.as_str()).collect();
        assert_eq!(targets, vec!["y"]);
    }

    #[test]
    fn test_unlinked_origin_routes_nothing() {
        let mut map = map_of(vec![
            layer("plain", None),
            layer(
                "x",
                Some(("A", vec![rule(&["B"], None, vec![LinkedProperty::Visible])])),
            ),
        ]);
        let table = map.ensure_links().clone();

        assert!(route(&visible_event("plain", false), &map, &table).is_empty());
        assert!(route(&visible_event("absent", false), &map, &table).is_empty());
    }

    #[test]
    fn test_unresolved_links_stay_inert() {
        // Group "ghost" has no layer yet; the edge exists but routes nothing
        let mut map = map_of(vec![layer(
            "x",
            Some(("A", vec![rule(&["ghost"], None, vec![LinkedProperty::Visible])])),
        )]);
        let table = map.ensure_links().clone();
        assert_eq!(table.len(), 1);

        let actions = route(&visible_event("x", false), &map, &table);
        assert!(actions.is_empty());

        // The link becomes live once a matching layer joins and the table
        // is recompiled
        map.add_layer(layer("late", Some(("ghost", vec![])))).unwrap();
        let table = map.ensure_links().clone();
        let actions = route(&visible_event("x", false), &map, &table);
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].target, LayerId::from("late"));
    }

    #[test]
    fn test_structural_event_carries_origin() {
        let mut map = map_of(vec![
            layer(
                "x",
                Some((
                    "A",
                    vec![rule(&["B"], None, vec![LinkedProperty::OgcFilters])],
                )),
            ),
            layer("y", Some(("B", vec![]))),
        ]);
        let table = map.ensure_links().clone();

        let event = ChangeEvent::new(
            LayerId::from("x"),
            LayerChange::Structural(StructuralChange::OgcFilters),
        );
        let actions = route(&event, &map, &table);
        assert_eq!(
            actions,
            vec![PropagationAction {
                target: LayerId::from("y"),
                task: PropagationTask::ReplaceOgcFilters {
                    from: LayerId::from("x")
                },
            }]
        );

        // A time-filter change is not governed by this link
        let event = ChangeEvent::new(
            LayerId::from("x"),
            LayerChange::Structural(StructuralChange::TimeFilter),
        );
        assert!(route(&event, &map, &table).is_empty());
    }
}
