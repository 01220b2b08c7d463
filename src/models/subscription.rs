//! Azure subscription data model.

use serde::{Deserialize, Serialize};

/// An Azure subscription. Extra fields from az are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subscription {
    /// Subscription id (GUID).
    pub id: String,
    /// Display name.
    pub name: String,
}

impl Subscription {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Subscription {
            id: id.into(),
            name: name.into(),
        }
    }
}
