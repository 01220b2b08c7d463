//! Azure resource data model.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One resource as projected by the `az resource list` query.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    /// Full ARM resource id.
    pub id: String,
    /// Resource name.
    pub name: String,
    /// Provider and kind, e.g. `Microsoft.Storage/storageAccounts`.
    #[serde(rename = "type")]
    pub resource_type: String,
    /// Resource group name.
    pub resource_group: String,
    /// Tags in the order az listed them; `null` is read as empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tags: IndexMap<String, String>,
    /// Creation timestamp as reported by az.
    #[serde(default)]
    pub created_time: Option<String>,
    /// Principal id of the managed identity.
    #[serde(default)]
    pub created_by: Option<String>,
    /// Id of the resource managing this one.
    #[serde(default)]
    pub managed_by: Option<String>,
    /// Managed identity block, kept as raw JSON.
    #[serde(default)]
    pub identity: Option<Value>,
    /// Provisioning state, e.g. `Succeeded`.
    #[serde(default)]
    pub provisioning_state: Option<String>,
}

impl ResourceRecord {
    /// Tags as `k=v` pairs joined with `sep`, or `None` when there are no tags.
    pub fn tags_joined(&self, pair_sep: &str, sep: &str) -> Option<String> {
        if self.tags.is_empty() {
            return None;
        }
        Some(itertools::join(
            self.tags.iter().map(|(k, v)| format!("{k}{pair_sep}{v}")),
            sep,
        ))
    }

    pub fn created_time_or_unknown(&self) -> &str {
        self.created_time.as_deref().unwrap_or("Unknown")
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<IndexMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<IndexMap<String, String>>::deserialize(deserializer)?.unwrap_or_default())
}
