//! Graph analysis over workflow node/edge collections.
//!
//! This module provides the derived views the rest of the system renders:
//! - Acyclicity checking and cycle membership (`topology`)
//! - Depth-bucket statistics and scenario summaries (`stats`)
//! - Incoming/outgoing adjacency indexes (`adjacency`)
//! - Reachability traversal (`reach`)
//!
//! ## Design
//!
//! Every function takes the graph wholesale per call, never mutates its
//! inputs, and returns freshly built structures. Edges whose source or
//! target is not a known node id are skipped by traversal and statistics;
//! only the raw display index ([`EdgeIndex`]) keeps them.

mod adjacency;
mod reach;
mod stats;
mod topology;

pub use adjacency::{Adjacency, EdgeIndex};
pub use reach::collect_reachable;
pub use stats::{depth_stats, DepthBucket, GraphSummary};
pub use topology::{cycle_members, is_acyclic};
