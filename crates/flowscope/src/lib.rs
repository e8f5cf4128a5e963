//! Flowscope - workflow DAG analysis and reprocess-scope previews.
//!
//! This crate provides both a CLI application and a library for analyzing
//! workflow dependency graphs: acyclicity checking, depth statistics,
//! adjacency indexes, reachability, and reprocess-scope computation.
//!
//! Every analysis function is a pure, total computation over caller-supplied
//! node/edge collections. Inputs are never mutated, no state is retained
//! between calls, and semantically inconsistent input (cycles, edges that
//! reference unknown nodes) degrades gracefully instead of failing.

#![forbid(unsafe_code)]

pub mod domain;
pub mod error;
pub mod graph;
pub mod reprocess;
pub mod scenario;
