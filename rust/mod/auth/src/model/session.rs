use serde::{Deserialize, Serialize};
use serde_json::Value;

use opencrm_core::{new_id, now_rfc3339};

use super::PermissionSet;

/// An authenticated user's session, held for the lifetime of a login.
///
/// Permissions are normalized exactly once, when the session is built.
/// The struct serializes cleanly so a session can be cached locally
/// and restored without touching the raw payload again.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Session id (UUIDv4, no dashes).
    pub id: String,

    /// User id that owns this session.
    pub user_id: String,

    /// User display name (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Department the user belongs to (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Normalized permissions.
    #[serde(default)]
    pub permissions: PermissionSet,

    /// RFC 3339 timestamp when the permissions were fetched.
    pub fetched_at: String,
}

impl Session {
    /// Start a session from already-normalized permissions.
    pub fn new(user_id: impl Into<String>, permissions: PermissionSet) -> Session {
        Session {
            id: new_id(),
            user_id: user_id.into(),
            name: None,
            department: None,
            permissions,
            fetched_at: now_rfc3339(),
        }
    }

    /// Start a session straight from a raw backend permission payload.
    pub fn from_payload(user_id: impl Into<String>, payload: &Value) -> Session {
        Session::new(user_id, PermissionSet::from_value(payload))
    }

    /// Attach a display name (construction-time builder).
    pub fn with_name(mut self, name: impl Into<String>) -> Session {
        self.name = Some(name.into());
        self
    }

    /// Attach a department (construction-time builder).
    pub fn with_department(mut self, department: impl Into<String>) -> Session {
        self.department = Some(department.into());
        self
    }

    /// A copy of this session carrying `permissions` instead. The old
    /// session stays untouched until the caller swaps it out, so a
    /// check running mid-refresh sees one consistent set.
    pub fn with_permissions(&self, permissions: PermissionSet) -> Session {
        Session {
            id: self.id.clone(),
            user_id: self.user_id.clone(),
            name: self.name.clone(),
            department: self.department.clone(),
            permissions,
            fetched_at: now_rfc3339(),
        }
    }
}
