//! Domain types for workflow graphs.
//!
//! This module contains the core domain types for flowscope: workflow nodes,
//! directed edges between them, and the scenarios that bundle both together
//! with descriptive metadata.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a workflow node
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create a new node ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a workflow edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub String);

impl EdgeId {
    /// Create a new edge ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EdgeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Execution status of a workflow node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeStatus {
    /// Waiting to run
    Queued,

    /// Currently running
    InProgress,

    /// Running but trending toward failure
    AtRisk,

    /// Blocked on an upstream dependency
    Blocked,

    /// Completed successfully
    Done,
}

impl NodeStatus {
    /// Human-readable label (e.g. `in_progress` renders as "in progress")
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in progress",
            Self::AtRisk => "at risk",
            Self::Blocked => "blocked",
            Self::Done => "done",
        }
    }
}

/// One unit of work in a workflow graph.
///
/// `depth` is the node's topological layer as assigned by whoever constructed
/// the scenario; it is carried through, never derived. `lane` orders nodes
/// within a depth layer for display and has no graph-semantic meaning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique identifier
    pub id: NodeId,

    /// Short display title
    pub title: String,

    /// Secondary display line
    pub subtitle: String,

    /// Owning operator
    pub owner: String,

    /// Owning team
    pub team: String,

    /// Topological layer (supplied, non-negative)
    pub depth: u32,

    /// Display ordering within a depth layer
    pub lane: i32,

    /// Estimated runtime, e.g. "45m" or "2h" (opaque payload)
    pub eta: String,

    /// Current execution status
    pub status: NodeStatus,
}

/// Kind of relationship an edge expresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Hard gate - target cannot start until source finishes
    Blocking,

    /// Ordinary data/control dependency
    Dependency,

    /// Soft link - informational, excludable from scope calculations
    Advisory,
}

impl EdgeKind {
    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Blocking => "blocking",
            Self::Dependency => "dependency",
            Self::Advisory => "advisory",
        }
    }
}

/// A directed relationship between two node ids.
///
/// `source` and `target` may reference nodes absent from the node set.
/// Such dangling edges are tolerated everywhere: traversal and statistics
/// skip them, raw adjacency listings keep them for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowEdge {
    /// Unique identifier
    pub id: EdgeId,

    /// Source node id
    pub source: NodeId,

    /// Target node id
    pub target: NodeId,

    /// Relationship kind
    pub kind: EdgeKind,

    /// Optional display label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Rough shape of a scenario's graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    /// Many steps at each depth with heavy control gates
    High,

    /// Few nodes per depth, sparse chain
    Low,

    /// Parallel trees with selective cross-tree dependencies
    Mixed,
}

impl Density {
    /// Human-readable label
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Low => "low",
            Self::Mixed => "mixed",
        }
    }
}

/// A named workflow graph with descriptive metadata.
///
/// Scenarios own the canonical node/edge data; analysis functions borrow it
/// per call and produce fresh derived structures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Longer description
    pub description: String,

    /// What the workflow is trying to accomplish
    pub objective: String,

    /// Graph shape
    pub density: Density,

    /// Node set (ids unique within the scenario)
    pub nodes: Vec<WorkflowNode>,

    /// Edge set (ids unique within the scenario)
    pub edges: Vec<WorkflowEdge>,
}

impl Scenario {
    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&WorkflowNode> {
        self.nodes.iter().find(|node| &node.id == id)
    }
}
