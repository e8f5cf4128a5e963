//! `flowscope scenarios` command implementation.

use colored::Colorize;
use flowscope::domain::Scenario;

use super::display::terminal_width;

/// Run the scenarios command.
pub fn run(scenarios: &[Scenario]) {
    if scenarios.is_empty() {
        println!("{}", "No scenarios available.".dimmed());
        return;
    }

    let width = terminal_width().min(100);
    let indent = "    ";

    println!("{}", "Available Scenarios".cyan().bold());
    println!();

    for scenario in scenarios {
        println!(
            "  {} {}",
            scenario.name.white().bold(),
            format!("({})", scenario.id).dimmed()
        );
        println!(
            "{indent}{}: {}  {}: {}",
            "density".dimmed(),
            scenario.density.label(),
            "nodes".dimmed(),
            scenario.nodes.len()
        );
        println!("{indent}{}: {}", "objective".dimmed(), scenario.objective);

        let wrapped = textwrap::fill(
            &scenario.description,
            textwrap::Options::new(width.saturating_sub(indent.len()))
                .initial_indent(indent)
                .subsequent_indent(indent),
        );
        println!("{wrapped}");
        println!();
    }
}
