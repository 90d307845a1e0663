//! Request context carrying the acting principal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Context for the current request.
///
/// Supplied by the caller's security boundary so every operation knows
/// *who* is acting. Deliberately carries no privilege claims: the acting
/// principal's admin status is looked up in the directory on every call
/// rather than trusted from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The acting principal's id.
    pub principal_id: i64,
    /// When the request was received. Audit events for mutations performed
    /// under this context are stamped with it.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a context for the given acting principal, stamped now.
    pub fn new(principal_id: i64) -> Self {
        Self {
            principal_id,
            request_time: Utc::now(),
        }
    }
}
