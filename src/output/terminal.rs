//! Terminal output.
//!
//! Formatters return plain strings; color is only added where lines are printed.

use crate::models::ResourceRecord;
use crate::processing::{RunSummary, SubscriptionReport};
use colored::Colorize;

const SEPARATOR_WIDTH: usize = 80;

/// Multi-line block describing one flagged resource.
pub fn format_for_display(resource: &ResourceRecord, reasons: &[&str]) -> String {
    let tags = resource
        .tags_joined(" = ", "\n    ")
        .unwrap_or_else(|| "No tags".to_string());

    let mut lines = vec![
        format!("📦 Resource: {}", resource.name),
        format!("  Type: {}", resource.resource_type),
        format!("  Resource Group: {}", resource.resource_group),
        "  Tags:".to_string(),
        format!("    {tags}"),
        format!("  Created Time: {}", resource.created_time_or_unknown()),
        "  Portal Creation Indicators:".to_string(),
    ];
    lines.extend(reasons.iter().map(|reason| format!("    • {reason}")));
    lines.join("\n")
}

pub fn format_separator() -> String {
    "─".repeat(SEPARATOR_WIDTH)
}

pub fn format_banner(started: &chrono::DateTime<chrono::Local>) -> String {
    format!(
        "\n🔍 Azure Resource Analysis Tool\n================================\nStarted: {}",
        started.format("%Y-%m-%d %H:%M:%S")
    )
}

/// Counts line plus every flagged resource block of one subscription.
pub fn format_subscription_result(report: &SubscriptionReport) -> String {
    let mut out = format!(
        "\nFound {} portal-created resources out of {} total resources in this subscription.",
        report.flagged.len(),
        report.resource_count
    );
    if report.flagged.is_empty() {
        out.push_str("\n\n✅ No portal-created resources found in this subscription.");
        return out;
    }
    out.push_str("\n\n🔎 Portal-Created Resources:");
    for c in &report.flagged {
        out.push_str(&format!(
            "\n\n{}\n{}",
            format_separator(),
            format_for_display(c.resource, &c.reasons)
        ));
    }
    out
}

pub fn format_summary(summary: &RunSummary) -> String {
    let mut out = format!(
        "Total resources analyzed: {}\nPortal-created resources found: {}",
        summary.total_resources, summary.total_flagged
    );
    if let Some(pct) = summary.percentage() {
        out.push_str(&format!(
            "\nPercentage of portal-created resources: {pct:.1}%"
        ));
    }
    out
}

pub fn print_summary(summary: &RunSummary) {
    println!("\n{}", "📈 Summary".bold());
    println!("=========");
    println!("{}", format_summary(summary));
}
