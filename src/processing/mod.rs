//! Analysis logic.
//!
//! - [`classifier`] - Heuristic rules flagging portal-created resources
//! - [`selector`] - Subscription choice from operator input
//! - [`summary`] - Run totals accumulated across subscriptions

mod classifier;
mod selector;
mod summary;

// Re-export public functions
pub use classifier::{classify, has_automation_tags, rules, Classification, Rule, RuleInput};
pub use selector::{format_menu, parse_selection, select_subscriptions, InvalidChoice, Selection};
pub use summary::{RunSummary, SubscriptionReport};
