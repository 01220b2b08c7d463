//! Azure CLI interaction.
//!
//! This module handles all Azure-related operations:
//! - [`cli`] - Command execution for Azure CLI
//! - [`session`] - Tool presence and login checks
//! - [`subscriptions`] - Subscription listing
//! - [`resources`] - Resource listing per subscription

mod cli;
mod resources;
mod session;
mod subscriptions;

// Re-export public types and functions
pub use cli::{parse_json, AzCli};
pub use resources::{fetch_resources, parse_resources};
pub use session::{ensure_authenticated, verify_tool_present};
pub use subscriptions::{list_subscriptions, parse_subscriptions};
