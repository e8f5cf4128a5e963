//! CLI command implementations.

mod display;

pub mod check;
pub mod inspect;
pub mod scenarios;
pub mod scope;
pub mod stats;
