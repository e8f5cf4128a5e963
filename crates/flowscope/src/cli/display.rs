//! Shared terminal rendering helpers.

use colored::{ColoredString, Colorize};
use flowscope::domain::{NodeId, NodeStatus, Scenario};

/// Fallback width when the terminal size cannot be determined.
const DEFAULT_WIDTH: usize = 80;

/// Current terminal width in columns.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map_or(DEFAULT_WIDTH, |(terminal_size::Width(w), _)| w as usize)
}

/// Colorize a node status label.
pub fn status_badge(status: NodeStatus) -> ColoredString {
    match status {
        NodeStatus::Queued => status.label().dimmed(),
        NodeStatus::InProgress => status.label().cyan(),
        NodeStatus::AtRisk => status.label().yellow(),
        NodeStatus::Blocked => status.label().red(),
        NodeStatus::Done => status.label().green(),
    }
}

/// Resolve a node id to its title for display.
///
/// Dangling endpoints still render - by id, flagged as unknown - so edge
/// listings stay useful when the node set is inconsistent.
pub fn endpoint_title(scenario: &Scenario, id: &NodeId) -> String {
    match scenario.node(id) {
        Some(node) => node.title.clone(),
        None => format!("{id} {}", "(unknown node)".dimmed()),
    }
}

/// Format a depth span as `n/a`, `2`, or `0-3`.
pub fn format_depth_span(span: Option<(u32, u32)>) -> String {
    match span {
        None => "n/a".to_string(),
        Some((min, max)) if min == max => min.to_string(),
        Some((min, max)) => format!("{min}-{max}"),
    }
}
