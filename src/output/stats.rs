//! Batch outcome reporting.

use console::style;

use crate::download::{BatchReport, PartStatus};

/// Print the per-part outcome list and the run totals.
pub fn print_batch_summary(report: &BatchReport) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!("{}", style("Download Summary:").bold());

    for part in &report.parts {
        let label = format!("{:>3}. {}", part.index + 1, part.title);
        match &part.status {
            PartStatus::Done { outputs } => {
                println!("  {} {}", style("OK     ").green().bold(), label);
                for path in outputs {
                    println!("           {}", style(path.display()).dim());
                }
            }
            PartStatus::DonePartial { outputs } => {
                println!(
                    "  {} {} (elementary streams kept)",
                    style("PARTIAL").yellow().bold(),
                    label
                );
                for path in outputs {
                    println!("           {}", style(path.display()).dim());
                }
            }
            PartStatus::Failed { stage, error } => {
                println!(
                    "  {} {} ({} failed: {})",
                    style("FAILED ").red().bold(),
                    label,
                    stage,
                    error
                );
            }
            PartStatus::Skipped => {
                println!("  {} {}", style("SKIPPED").dim(), label);
            }
        }
    }

    println!(
        "  {} done, {} partial, {} failed, {} skipped",
        style(report.completed()).green(),
        style(report.partial()).yellow(),
        style(report.failed()).red(),
        style(report.skipped()).dim()
    );
    println!("{}", style("═".repeat(50)).dim());
}
