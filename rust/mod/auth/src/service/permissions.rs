//! Capability checks over a normalized [`PermissionSet`].
//!
//! Every question here is a plain boolean with no failure path: a
//! payload we could not understand was already reduced to the empty
//! set at normalization time, and the empty set denies everything.

use tracing::debug;

use crate::model::{PermissionSet, Session};

use super::AuthError;

/// Page names the backend uses for the surfaces this crate guards.
pub mod pages {
    pub const LEADS: &str = "Leads";
    pub const TASKS: &str = "Tasks";
    pub const TICKETS: &str = "Tickets";
    pub const ATTENDANCE: &str = "Attendance";
    pub const USERS: &str = "Users";
}

/// Action names as they appear in permission payloads. Matching is
/// exact and case-sensitive; pages are the case-insensitive half.
pub mod actions {
    pub const OWN: &str = "own";
    pub const VIEW_OTHER: &str = "view_other";
    pub const ALL: &str = "all";
    pub const JUNIOR: &str = "junior";
    pub const SHOW: &str = "show";
    pub const DELETE: &str = "delete";
    pub const CREATE: &str = "create";
    pub const ASSIGN: &str = "assign";

    /// Synthetic action: "can this user see the page at all". Resolves
    /// through [`VIEW_FAMILY`](super::VIEW_FAMILY) membership only; a
    /// literal `"view"` entry in a payload is inert.
    pub const VIEW: &str = "view";
}

/// Scope-flavored actions that each imply the page is visible. Asking
/// for one succeeds when any member is granted, so a user granted
/// `view_other` still passes an `own` gate on the same page.
pub const VIEW_FAMILY: &[&str] = &[
    actions::OWN,
    actions::VIEW_OTHER,
    actions::ALL,
    actions::JUNIOR,
    actions::SHOW,
];

/// Check one capability.
///
/// Resolution order: a super admin passes everything; an exact action
/// match on a matching page passes; a view-family ask (or the
/// synthetic [`actions::VIEW`]) passes when the page grants any family
/// member. [`actions::VIEW`] never matches by name: it is exactly the
/// union of the family, so it holds iff some family member does.
/// Everything else is a denial, including pages and actions the
/// payload never mentioned.
pub fn has_capability(permissions: &PermissionSet, page: &str, action: &str) -> bool {
    if permissions.is_super_admin() {
        return true;
    }
    let page_lower = page.to_lowercase();
    let aliasable = action == actions::VIEW || VIEW_FAMILY.contains(&action);
    for grant in permissions.grants() {
        if !grant.page.matches(&page_lower) {
            continue;
        }
        if action != actions::VIEW && grant.actions.contains(action) {
            return true;
        }
        if aliasable && grant.actions.intersects(VIEW_FAMILY) {
            return true;
        }
    }
    false
}

/// Whether the user can see `page` at all.
pub fn can_view(permissions: &PermissionSet, page: &str) -> bool {
    has_capability(permissions, page, actions::VIEW)
}

impl Session {
    /// Check a capability against this session's permissions.
    pub fn has_capability(&self, page: &str, action: &str) -> bool {
        has_capability(&self.permissions, page, action)
    }

    /// Whether this session can see `page` at all.
    pub fn can_view(&self, page: &str) -> bool {
        can_view(&self.permissions, page)
    }
}

/// Capability check for call sites that may not have a session at all.
/// No session, no capabilities.
pub fn session_has_capability(session: Option<&Session>, page: &str, action: &str) -> bool {
    session.is_some_and(|s| s.has_capability(page, action))
}

/// Guard for entry points that need a logged-in user.
pub fn require_session(session: Option<&Session>) -> Result<&Session, AuthError> {
    session.ok_or_else(|| AuthError::Unauthorized("no active session".into()))
}

/// Guard for entry points that need a specific capability.
pub fn require_capability(session: &Session, page: &str, action: &str) -> Result<(), AuthError> {
    if session.has_capability(page, action) {
        return Ok(());
    }
    let msg = format!("user '{}' lacks '{}' on {}", session.user_id, action, page);
    debug!("capability denied: {msg}");
    Err(AuthError::Forbidden(msg))
}
