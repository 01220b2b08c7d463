//! Resource listing per subscription.

use super::cli::{parse_json, AzCli};
use crate::config;
use crate::error::{ClickOpsError, Result};
use crate::models::ResourceRecord;

fn list_args(subscription_id: &str) -> String {
    format!(
        "resource list --subscription '{subscription_id}' --query '{}' -o json",
        config::RESOURCE_QUERY
    )
}

/// Fetch every resource of one subscription with a single az query.
///
/// Any failure is reported against the subscription and aborts the run.
pub fn fetch_resources(az: &AzCli, subscription_id: &str) -> Result<Vec<ResourceRecord>> {
    let resources: Vec<ResourceRecord> =
        az.run_json(&list_args(subscription_id))
            .map_err(|e| ClickOpsError::Fetch {
                subscription: subscription_id.to_string(),
                source: Box::new(e),
            })?;
    log::info!(
        "Fetched {} resources for subscription {subscription_id}",
        resources.len()
    );
    Ok(resources)
}

/// Parse saved `az resource list` output (same projection as [`fetch_resources`]).
pub fn parse_resources(json: &str) -> Result<Vec<ResourceRecord>> {
    parse_json(json, "resource list")
}
