//! Flag Azure resources that were probably created by hand in the portal
//! (click-ops) instead of through infrastructure as code.

pub mod azure;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use azure::AzCli;
use cli::Args;
use colored::Colorize;
use error::Result;
use models::{ResourceRecord, Subscription};
use processing::{classify, RunSummary, SubscriptionReport};
use std::io::{BufRead, Write};
use std::path::Path;

/// Classify one subscription's resources, keeping only the flagged ones.
pub fn analyze_subscription<'a>(
    subscription: &'a Subscription,
    resources: &'a [ResourceRecord],
) -> SubscriptionReport<'a> {
    let flagged = resources
        .iter()
        .map(classify)
        .filter(|c| c.portal_created)
        .collect::<Vec<_>>();
    log::info!(
        "{}: {} of {} resources flagged",
        subscription.name,
        flagged.len(),
        resources.len()
    );
    SubscriptionReport {
        subscription,
        resource_count: resources.len(),
        flagged,
    }
}

/// Full run: session checks, selection, per-subscription analysis, summary.
///
/// `input`/`prompt` carry the subscription prompt. Any error returned is fatal;
/// CSV write failures are reported and skipped.
pub fn run_analysis<R: BufRead, W: Write>(
    az: &AzCli,
    args: &Args,
    input: R,
    prompt: W,
) -> Result<RunSummary> {
    println!("{}", output::format_banner(&chrono::Local::now()));

    azure::verify_tool_present(az)?;
    azure::ensure_authenticated(az)?;

    let subscriptions = azure::list_subscriptions(az)?;
    let selected = processing::select_subscriptions(&subscriptions, input, prompt)?;

    println!("\n⚙️  Analyzing resources...");

    let output_path = args.output.as_deref();
    if let Some(path) = output_path {
        output::create_output_file(path)?;
    }

    let mut summary = RunSummary::default();
    for subscription in selected {
        summary = process_subscription(az, subscription, output_path, summary)?;
    }

    output::print_summary(&summary);
    Ok(summary)
}

fn process_subscription(
    az: &AzCli,
    subscription: &Subscription,
    output_path: Option<&Path>,
    summary: RunSummary,
) -> Result<RunSummary> {
    println!(
        "\n📊 Analyzing subscription: {}",
        subscription.name.bold()
    );
    let resources = azure::fetch_resources(az, &subscription.id)?;
    let report = analyze_subscription(subscription, &resources);
    println!("{}", output::format_subscription_result(&report));

    if let Some(path) = output_path {
        if !report.flagged.is_empty() {
            match output::export_csv(&report.flagged, path, &subscription.name) {
                Ok(_) => println!(
                    "\n{}",
                    format!("✅ Results exported to {}", path.display()).green()
                ),
                Err(e) if !e.is_fatal() => {
                    log::error!("{e}");
                    println!("\n{}", format!("❌ {e}").red());
                }
                Err(e) => return Err(e),
            }
        }
    }

    Ok(summary.record(&report))
}
