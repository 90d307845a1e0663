//! Principal-to-action policy definitions.

use std::collections::{HashMap, HashSet};

use shareguard_core::types::ShareAction;

/// Matches any resource type in a grant.
pub const ANY_RESOURCE_TYPE: &str = "*";

/// Materialized grants: principal → resource type → allowed actions.
///
/// Policies are values built at assembly time, not annotations discovered
/// at runtime. A grant on [`ANY_RESOURCE_TYPE`] applies to every type.
#[derive(Debug, Clone, Default)]
pub struct PolicySet {
    /// Principal id → resource type id → actions.
    grants: HashMap<i64, HashMap<String, HashSet<ShareAction>>>,
}

impl PolicySet {
    /// Creates an empty policy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants an action on one resource type.
    pub fn grant(
        mut self,
        principal_id: i64,
        resource_type_id: impl Into<String>,
        action: ShareAction,
    ) -> Self {
        self.grants
            .entry(principal_id)
            .or_default()
            .entry(resource_type_id.into())
            .or_default()
            .insert(action);
        self
    }

    /// Grants an action on every resource type.
    pub fn grant_all_types(self, principal_id: i64, action: ShareAction) -> Self {
        self.grant(principal_id, ANY_RESOURCE_TYPE, action)
    }

    /// Whether the principal holds the action on the resource type.
    pub fn allows(&self, principal_id: i64, resource_type_id: &str, action: ShareAction) -> bool {
        let Some(by_type) = self.grants.get(&principal_id) else {
            return false;
        };
        by_type
            .get(resource_type_id)
            .is_some_and(|actions| actions.contains(&action))
            || by_type
                .get(ANY_RESOURCE_TYPE)
                .is_some_and(|actions| actions.contains(&action))
    }

    /// The actions the principal holds on the resource type, wildcard
    /// grants included.
    pub fn actions_for(&self, principal_id: i64, resource_type_id: &str) -> HashSet<ShareAction> {
        let mut actions = HashSet::new();
        if let Some(by_type) = self.grants.get(&principal_id) {
            if let Some(typed) = by_type.get(resource_type_id) {
                actions.extend(typed.iter().copied());
            }
            if let Some(wild) = by_type.get(ANY_RESOURCE_TYPE) {
                actions.extend(wild.iter().copied());
            }
        }
        actions
    }

    /// Number of principals with at least one grant.
    pub fn len(&self) -> usize {
        self.grants.len()
    }

    /// Whether no grants exist.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty()
    }
}
