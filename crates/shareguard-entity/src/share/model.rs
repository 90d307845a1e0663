//! Sharing record entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Composite key identifying one sharing grant.
///
/// The key is unique and immutable once a record is persisted: changing
/// any component means deleting the grant and creating a new one. Ordering
/// is lexicographic over (resource type, resource, principal) so listings
/// are deterministic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SharingKey {
    /// Stable, namespaced resource type identifier.
    pub resource_type_id: String,
    /// The shared resource's id.
    pub resource_id: i64,
    /// The grantee principal's id.
    pub principal_id: i64,
}

impl SharingKey {
    /// Create a new composite key.
    pub fn new(resource_type_id: impl Into<String>, resource_id: i64, principal_id: i64) -> Self {
        Self {
            resource_type_id: resource_type_id.into(),
            resource_id,
            principal_id,
        }
    }
}

impl std::fmt::Display for SharingKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}#{}",
            self.resource_type_id, self.resource_id, self.principal_id
        )
    }
}

impl std::str::FromStr for SharingKey {
    type Err = shareguard_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || {
            shareguard_core::AppError::serialization(format!(
                "Invalid sharing key '{s}'. Expected '<type>/<resource_id>#<principal_id>'"
            ))
        };

        let (left, principal) = s.rsplit_once('#').ok_or_else(parse_err)?;
        let (resource_type_id, resource_id) = left.rsplit_once('/').ok_or_else(parse_err)?;
        if resource_type_id.is_empty() {
            return Err(parse_err());
        }

        let resource_id = resource_id.parse().map_err(|_| parse_err())?;
        let principal_id = principal.parse().map_err(|_| parse_err())?;

        Ok(Self::new(resource_type_id, resource_id, principal_id))
    }
}

/// One grant of access: a resource instance shared with a principal.
///
/// Grants are binary, present or absent. There is no update operation;
/// records are created by `share` and destroyed by `unshare`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharingRecord {
    /// Stable, namespaced resource type identifier.
    pub resource_type_id: String,
    /// The shared resource's id.
    pub resource_id: i64,
    /// The grantee principal's id. Always resolved and positive; records
    /// are never persisted with an unresolved principal.
    pub principal_id: i64,
    /// The owner principal that created the grant.
    pub granted_by: i64,
    /// When the grant was created.
    pub created_at: DateTime<Utc>,
}

impl SharingRecord {
    /// Create a new record stamped with the current time.
    pub fn new(
        resource_type_id: impl Into<String>,
        resource_id: i64,
        principal_id: i64,
        granted_by: i64,
    ) -> Self {
        Self {
            resource_type_id: resource_type_id.into(),
            resource_id,
            principal_id,
            granted_by,
            created_at: Utc::now(),
        }
    }

    /// The record's composite key.
    pub fn key(&self) -> SharingKey {
        SharingKey::new(
            self.resource_type_id.clone(),
            self.resource_id,
            self.principal_id,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ordering_is_lexicographic() {
        let a = SharingKey::new("doc", 1, 9);
        let b = SharingKey::new("doc", 2, 1);
        let c = SharingKey::new("folder", 1, 1);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_record_key_round_trip() {
        let record = SharingRecord::new("doc", 100, 2, 1);
        let key = record.key();
        assert_eq!(key, SharingKey::new("doc", 100, 2));
        assert_eq!(key.to_string(), "doc/100#2");
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!(
            "doc/100#2".parse::<SharingKey>().unwrap(),
            SharingKey::new("doc", 100, 2)
        );
        assert!("doc/100".parse::<SharingKey>().is_err());
        assert!("/100#2".parse::<SharingKey>().is_err());
        assert!("doc/abc#2".parse::<SharingKey>().is_err());
    }
}
