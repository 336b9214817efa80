//! Link compilation
//!
//! Expands the link declarations of a layer set into a flat table of
//! directed edges. The table preserves emission order, which fixes the order
//! propagation actions are applied in, and indexes edges by group id on both
//! sides so every link touching a layer resolves in one lookup.

use std::collections::HashMap;

use maplink_shared::types::{LinkId, LinkedProperty};

use crate::layer::Layer;

/// A resolved directed edge between two link groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedLink {
    /// Group of the declaring side
    pub src_id: LinkId,

    /// Group the rule points at
    pub dst_id: LinkId,

    /// Properties governed by this edge
    pub properties: Vec<LinkedProperty>,

    /// Whether propagation also flows dst to src
    pub bidirectional: bool,
}

impl ComputedLink {
    /// Whether this edge governs the given property
    pub fn governs(&self, property: LinkedProperty) -> bool {
        self.properties.contains(&property)
    }
}

/// The compiled link table of a map.
///
/// Rebuilt from the full layer set whenever it changes structurally; edges
/// whose groups match no current layer stay inert until one appears.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkTable {
    edges: Vec<ComputedLink>,
    by_group: HashMap<LinkId, Vec<usize>>,
}

impl LinkTable {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// All edges, in emission order
    pub fn edges(&self) -> &[ComputedLink] {
        &self.edges
    }

    /// Every edge whose source or destination is the given group, in
    /// emission order
    pub fn links_touching<'a>(
        &'a self,
        group: &LinkId,
    ) -> impl Iterator<Item = &'a ComputedLink> + 'a {
        self.by_group
            .get(group)
            .into_iter()
            .flatten()
            .map(|index| &self.edges[*index])
    }

    /// Whether any edge references the given group
    pub fn touches(&self, group: &LinkId) -> bool {
        self.by_group.contains_key(group)
    }

    fn push(&mut self, edge: ComputedLink) {
        let index = self.edges.len();
        self.by_group
            .entry(edge.src_id.clone())
            .or_default()
            .push(index);
        if edge.dst_id != edge.src_id {
            self.by_group
                .entry(edge.dst_id.clone())
                .or_default()
                .push(index);
        }
        self.edges.push(edge);
    }
}

/// Compile the link declarations of a layer set.
///
/// One edge is emitted per (declaring group, target id) pair of every rule,
/// in layer order. Compilation is deterministic and idempotent; it carries
/// no state across calls.
pub fn compile(layers: &[Layer]) -> LinkTable {
    let mut table = LinkTable::default();

    for layer in layers {
        let group = match &layer.options().linked_layers {
            Some(group) if !group.links.is_empty() => group,
            _ => continue,
        };
        for rule in &group.links {
            for target in &rule.linked_ids {
                table.push(ComputedLink {
                    src_id: group.link_id.clone(),
                    dst_id: target.clone(),
                    properties: rule.properties.clone(),
                    bidirectional: rule.is_bidirectional(),
                });
            }
        }
    }

    table
}
