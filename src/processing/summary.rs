//! Run totals.

use super::Classification;
use crate::models::Subscription;

/// What one subscription contributed to the run.
#[derive(Debug)]
pub struct SubscriptionReport<'a> {
    pub subscription: &'a Subscription,
    pub resource_count: usize,
    pub flagged: Vec<Classification<'a>>,
}

/// Totals across all processed subscriptions. Folded by value, never global.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    pub total_resources: usize,
    pub total_flagged: usize,
}

impl RunSummary {
    pub fn new(total_resources: usize, total_flagged: usize) -> Self {
        RunSummary {
            total_resources,
            total_flagged,
        }
    }

    /// Add one subscription's counts.
    #[must_use]
    pub fn record(self, report: &SubscriptionReport) -> Self {
        RunSummary {
            total_resources: self.total_resources + report.resource_count,
            total_flagged: self.total_flagged + report.flagged.len(),
        }
    }

    /// Share of flagged resources in percent; `None` when nothing was analyzed.
    pub fn percentage(&self) -> Option<f64> {
        if self.total_resources == 0 {
            None
        } else {
            Some(self.total_flagged as f64 / self.total_resources as f64 * 100.0)
        }
    }
}
