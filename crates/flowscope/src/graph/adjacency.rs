//! Incoming/outgoing adjacency indexes.
//!
//! Two indexes with deliberately different dangling-edge policies:
//!
//! - [`EdgeIndex`] is display-oriented. It is built from edges alone, keeps
//!   dangling edges as-is (their ids are still useful when a lookup fails in
//!   the renderer), and preserves input edge order within each per-node list.
//! - [`Adjacency`] is traversal-oriented. It is restricted to known nodes,
//!   drops dangling edges, and gives every known node an entry so that root
//!   discovery (empty incoming list) is well-defined.

use crate::domain::{NodeId, WorkflowEdge, WorkflowNode};
use std::collections::HashMap;

/// Per-node incoming and outgoing edge lists, for display.
///
/// Nodes with no incident edges have no entry; the accessors treat a missing
/// key as an empty list. Source/target ids are not validated against any
/// node set.
#[derive(Debug, Clone, Default)]
pub struct EdgeIndex {
    incoming: HashMap<NodeId, Vec<WorkflowEdge>>,
    outgoing: HashMap<NodeId, Vec<WorkflowEdge>>,
}

impl EdgeIndex {
    /// Build the index from an edge set, preserving input order within each
    /// per-node list.
    #[must_use]
    pub fn build(edges: &[WorkflowEdge]) -> Self {
        let mut index = Self::default();

        for edge in edges {
            index
                .incoming
                .entry(edge.target.clone())
                .or_default()
                .push(edge.clone());
            index
                .outgoing
                .entry(edge.source.clone())
                .or_default()
                .push(edge.clone());
        }

        index
    }

    /// Edges pointing at `id`, in input order. Empty if none.
    #[must_use]
    pub fn incoming(&self, id: &NodeId) -> &[WorkflowEdge] {
        self.incoming.get(id).map_or(&[], Vec::as_slice)
    }

    /// Edges leaving `id`, in input order. Empty if none.
    #[must_use]
    pub fn outgoing(&self, id: &NodeId) -> &[WorkflowEdge] {
        self.outgoing.get(id).map_or(&[], Vec::as_slice)
    }

    /// Whether `id` has an incoming-list entry at all.
    ///
    /// Distinguishes "no entry" from "entry with an empty list" for callers
    /// that care about map shape rather than contents.
    #[must_use]
    pub fn has_incoming_entry(&self, id: &NodeId) -> bool {
        self.incoming.contains_key(id)
    }

    /// Whether `id` has an outgoing-list entry at all.
    #[must_use]
    pub fn has_outgoing_entry(&self, id: &NodeId) -> bool {
        self.outgoing.contains_key(id)
    }
}

/// Known-node neighbor lists, for traversal.
///
/// Every node in the node set gets an entry (possibly empty); edges whose
/// source or target is unknown are dropped.
#[derive(Debug, Clone)]
pub struct Adjacency {
    incoming: HashMap<NodeId, Vec<NodeId>>,
    outgoing: HashMap<NodeId, Vec<NodeId>>,
}

impl Adjacency {
    /// Build neighbor lists from the given nodes and (possibly filtered)
    /// edges.
    ///
    /// Accepts any edge iterator so callers can apply kind filters without
    /// materializing an intermediate edge set.
    pub fn build<'a, I>(nodes: &[WorkflowNode], edges: I) -> Self
    where
        I: IntoIterator<Item = &'a WorkflowEdge>,
    {
        let mut incoming: HashMap<NodeId, Vec<NodeId>> = nodes
            .iter()
            .map(|node| (node.id.clone(), Vec::new()))
            .collect();
        let mut outgoing: HashMap<NodeId, Vec<NodeId>> = nodes
            .iter()
            .map(|node| (node.id.clone(), Vec::new()))
            .collect();

        for edge in edges {
            if !incoming.contains_key(&edge.target) || !outgoing.contains_key(&edge.source) {
                tracing::debug!(edge = %edge.id, "skipping dangling edge");
                continue;
            }
            if let Some(sources) = incoming.get_mut(&edge.target) {
                sources.push(edge.source.clone());
            }
            if let Some(targets) = outgoing.get_mut(&edge.source) {
                targets.push(edge.target.clone());
            }
        }

        Self { incoming, outgoing }
    }

    /// Known predecessors of `id`. Empty for unknown ids.
    #[must_use]
    pub fn incoming_of(&self, id: &NodeId) -> &[NodeId] {
        self.incoming.get(id).map_or(&[], Vec::as_slice)
    }

    /// Known successors of `id`. Empty for unknown ids.
    #[must_use]
    pub fn outgoing_of(&self, id: &NodeId) -> &[NodeId] {
        self.outgoing.get(id).map_or(&[], Vec::as_slice)
    }

    /// The full incoming neighbor map, for backward reachability.
    #[must_use]
    pub fn incoming_map(&self) -> &HashMap<NodeId, Vec<NodeId>> {
        &self.incoming
    }

    /// The full outgoing neighbor map, for forward reachability.
    #[must_use]
    pub fn outgoing_map(&self) -> &HashMap<NodeId, Vec<NodeId>> {
        &self.outgoing
    }

    /// Nodes with no incoming edges, in the node set's order.
    ///
    /// "Root" is relative to whatever edge set this adjacency was built
    /// from - filtering edges out before [`Adjacency::build`] can change
    /// which nodes qualify.
    #[must_use]
    pub fn roots(&self, nodes: &[WorkflowNode]) -> Vec<NodeId> {
        nodes
            .iter()
            .filter(|node| self.incoming_of(&node.id).is_empty())
            .map(|node| node.id.clone())
            .collect()
    }
}
