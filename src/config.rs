//! Compile-time settings.

/// The Azure CLI binary. May carry leading arguments, quoted if they hold spaces.
#[cfg(windows)]
pub const AZ_CLI_PROGRAM: &str = "az.cmd";
#[cfg(not(windows))]
pub const AZ_CLI_PROGRAM: &str = "az";

/// Refuse to parse az output above this size (bytes).
pub const MAX_RESPONSE_BYTES: usize = 64 * 1024 * 1024;

/// JMESPath projection for `az resource list`.
pub const RESOURCE_QUERY: &str = "[].{id:id, name:name, type:type, resourceGroup:resourceGroup, tags:tags, createdTime:createdTime, createdBy:identity.principalId, managedBy:managedBy, identity:identity, provisioningState:provisioningState}";

/// Tag key/value substrings that point at automation tooling (lower case).
pub const AUTOMATION_TAG_INDICATORS: [&str; 10] = [
    "terraform",
    "arm-template",
    "bicep",
    "pulumi",
    "cloudformation",
    "managed-by",
    "created-by",
    "provisioner",
    "environment",
    "automation",
];

/// Fingerprint left in identity/managedBy/createdBy by the azurerm provider.
pub const AZURERM_MARKER: &str = "azurerm";

/// Optional log4rs config, read from the working directory.
pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

pub const CSV_HEADER: [&str; 7] = [
    "Subscription",
    "Resource Name",
    "Resource Type",
    "Resource Group",
    "Tags",
    "Created Time",
    "Portal Creation Indicators",
];
