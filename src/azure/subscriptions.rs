//! Subscription listing.

use super::cli::{parse_json, AzCli};
use crate::error::{ClickOpsError, Result};
use crate::models::Subscription;

const LIST_ARGS: &str = "account list -o json";

/// List the subscriptions visible to the logged in account, in az order.
pub fn list_subscriptions(az: &AzCli) -> Result<Vec<Subscription>> {
    let subscriptions: Vec<Subscription> =
        az.run_json(LIST_ARGS)
            .map_err(|e| ClickOpsError::SubscriptionList {
                source: Box::new(e),
            })?;
    log::info!("Found {} subscriptions", subscriptions.len());
    Ok(subscriptions)
}

/// Parse saved `az account list` output.
pub fn parse_subscriptions(json: &str) -> Result<Vec<Subscription>> {
    parse_json(json, LIST_ARGS)
}
