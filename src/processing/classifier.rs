//! Heuristic classifier.
//!
//! Each rule is an independent predicate with a fixed reason. A resource is
//! flagged as portal-created when at least one rule applies; the reasons keep
//! rule order and are never deduplicated.

use crate::config::{AUTOMATION_TAG_INDICATORS, AZURERM_MARKER};
use crate::models::ResourceRecord;

/// What the rules look at, computed once per resource.
#[derive(Debug)]
pub struct RuleInput<'a> {
    pub resource: &'a ResourceRecord,
    pub has_automation_tags: bool,
}

impl<'a> RuleInput<'a> {
    pub fn new(resource: &'a ResourceRecord) -> Self {
        RuleInput {
            resource,
            has_automation_tags: has_automation_tags(resource),
        }
    }
}

/// A single heuristic.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub reason: &'static str,
    pub applies: fn(&RuleInput) -> bool,
}

/// The outcome of [`classify`].
#[derive(Debug, Clone, PartialEq)]
pub struct Classification<'a> {
    pub resource: &'a ResourceRecord,
    pub portal_created: bool,
    pub reasons: Vec<&'static str>,
}

const RULES: [Rule; 6] = [
    Rule {
        name: "identity-azurerm",
        reason: "Resource identity contains 'azurerm' identifier",
        applies: identity_has_marker,
    },
    Rule {
        name: "managed-by-azurerm",
        reason: "Resource managedBy field contains 'azurerm'",
        applies: managed_by_has_marker,
    },
    Rule {
        name: "created-by-azurerm",
        reason: "Resource createdBy field contains 'azurerm'",
        applies: created_by_has_marker,
    },
    Rule {
        name: "no-tags",
        reason: "Resource has no tags",
        applies: no_tags,
    },
    Rule {
        name: "no-automation-tags",
        reason: "Resource lacks automation-related tags",
        applies: lacks_automation_tags,
    },
    Rule {
        name: "provisioned-without-automation-tags",
        reason: "Resource was provisioned without automation tags",
        applies: provisioned_without_automation_tags,
    },
];

/// All rules in evaluation order.
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Run every rule against `resource`.
pub fn classify(resource: &ResourceRecord) -> Classification<'_> {
    let input = RuleInput::new(resource);
    let reasons: Vec<&'static str> = RULES
        .iter()
        .filter(|rule| (rule.applies)(&input))
        .map(|rule| rule.reason)
        .collect();
    log::trace!("classify({}) -> {:?}", resource.name, reasons);
    Classification {
        resource,
        portal_created: !reasons.is_empty(),
        reasons,
    }
}

/// True if any tag key or value contains an automation indicator (case-insensitive).
pub fn has_automation_tags(resource: &ResourceRecord) -> bool {
    resource.tags.iter().any(|(k, v)| {
        let (k, v) = (k.to_lowercase(), v.to_lowercase());
        AUTOMATION_TAG_INDICATORS
            .iter()
            .any(|indicator| k.contains(indicator) || v.contains(indicator))
    })
}

fn contains_marker(value: &str) -> bool {
    value.to_lowercase().contains(AZURERM_MARKER)
}

fn identity_has_marker(input: &RuleInput) -> bool {
    match &input.resource.identity {
        Some(identity) if identity.is_object() => contains_marker(&identity.to_string()),
        _ => false,
    }
}

fn managed_by_has_marker(input: &RuleInput) -> bool {
    input
        .resource
        .managed_by
        .as_deref()
        .is_some_and(contains_marker)
}

fn created_by_has_marker(input: &RuleInput) -> bool {
    input
        .resource
        .created_by
        .as_deref()
        .is_some_and(contains_marker)
}

fn no_tags(input: &RuleInput) -> bool {
    input.resource.tags.is_empty()
}

fn lacks_automation_tags(input: &RuleInput) -> bool {
    !input.resource.tags.is_empty() && !input.has_automation_tags
}

fn provisioned_without_automation_tags(input: &RuleInput) -> bool {
    input
        .resource
        .provisioning_state
        .as_deref()
        .is_some_and(|state| state.eq_ignore_ascii_case("succeeded"))
        && !input.has_automation_tags
}
