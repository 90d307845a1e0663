//! In-memory principal directory backed by a DashMap.

use async_trait::async_trait;
use dashmap::DashMap;

use shareguard_core::result::AppResult;
use shareguard_entity::principal::Principal;

use crate::directory::PrincipalDirectory;

/// Principal directory holding records in memory.
///
/// Email and username lookups are exact-match over the stored values.
#[derive(Debug, Default)]
pub struct MemoryPrincipalDirectory {
    principals: DashMap<i64, Principal>,
}

impl MemoryPrincipalDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a principal.
    pub fn put(&self, principal: Principal) {
        self.principals.insert(principal.id, principal);
    }

    /// Remove a principal, returning whether it existed.
    pub fn remove(&self, principal_id: i64) -> bool {
        self.principals.remove(&principal_id).is_some()
    }

    /// Number of stored principals.
    pub fn len(&self) -> usize {
        self.principals.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.principals.is_empty()
    }
}

#[async_trait]
impl PrincipalDirectory for MemoryPrincipalDirectory {
    async fn find_by_id(&self, principal_id: i64) -> AppResult<Option<Principal>> {
        Ok(self.principals.get(&principal_id).map(|p| p.clone()))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<Principal>> {
        Ok(self
            .principals
            .iter()
            .find(|entry| entry.email == email)
            .map(|entry| entry.clone()))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Principal>> {
        Ok(self
            .principals
            .iter()
            .find(|entry| entry.username == username)
            .map(|entry| entry.clone()))
    }
}
