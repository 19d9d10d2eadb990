//! Normalized permission model.
//!
//! Backends describe permissions in two shapes: a list of grants
//! (`[{"page": "Leads", "actions": ["own", "show"]}]`) and an older
//! page-keyed map (`{"Leads": "*"}`). Both collapse into a
//! [`PermissionSet`] here, once, at session load. Everything past this
//! point asks boolean questions and never sees the raw payload again.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Page names that scope a grant over every page, compared
/// case-insensitively.
const PAGE_WILDCARDS: &[&str] = &["*", "global", "any"];

// --------- page scope ---------

/// The page half of a grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageScope {
    /// Covers every page.
    Any,
    /// Covers one page, held lowercased.
    Named(String),
}

impl PageScope {
    /// Parse a raw page name. Wildcard markers become [`PageScope::Any`];
    /// anything else is lowercased and kept.
    pub fn parse(raw: &str) -> PageScope {
        let lowered = raw.to_lowercase();
        if PAGE_WILDCARDS.contains(&lowered.as_str()) {
            PageScope::Any
        } else {
            PageScope::Named(lowered)
        }
    }

    /// Whether this scope covers `page_lower`. Callers lowercase once
    /// and reuse the result across a scan.
    pub fn matches(&self, page_lower: &str) -> bool {
        match self {
            PageScope::Any => true,
            PageScope::Named(name) => name == page_lower,
        }
    }
}

// --------- action set ---------

/// The action half of a grant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionSet {
    /// Every action on the page.
    Any,
    /// An explicit set of action names, matched exactly.
    Named(HashSet<String>),
}

impl ActionSet {
    /// Whether `action` is granted.
    pub fn contains(&self, action: &str) -> bool {
        match self {
            ActionSet::Any => true,
            ActionSet::Named(set) => set.contains(action),
        }
    }

    /// Whether any action in `family` is granted.
    pub fn intersects(&self, family: &[&str]) -> bool {
        family.iter().any(|action| self.contains(action))
    }
}

// --------- grants ---------

/// One normalized grant: a page scope plus the actions allowed there.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grant {
    pub page: PageScope,
    pub actions: ActionSet,
}

/// A user's full permission set, normalized.
///
/// Built with [`PermissionSet::from_value`] (raw backend payload) or
/// [`PermissionSet::from_grants`]. The set is immutable after
/// construction; a permission change means building a new set and
/// swapping it into the session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PermissionSet {
    grants: Vec<Grant>,
    super_admin: bool,
}

impl PermissionSet {
    /// The empty set: every capability check fails.
    pub fn empty() -> PermissionSet {
        PermissionSet::default()
    }

    /// Build from already-normalized grants. `super_admin` is derived:
    /// a grant covering every page with every action marks the whole
    /// set.
    pub fn from_grants(grants: Vec<Grant>) -> PermissionSet {
        let super_admin = grants
            .iter()
            .any(|g| g.page == PageScope::Any && g.actions == ActionSet::Any);
        PermissionSet {
            grants,
            super_admin,
        }
    }

    /// Normalize a raw permission payload.
    ///
    /// Accepts the grant-list shape and the legacy page-keyed map. An
    /// unreadable element drops that element alone; the rest of the
    /// payload still counts. A payload with no usable shape normalizes
    /// to the empty set. This never fails.
    pub fn from_value(value: &Value) -> PermissionSet {
        match value {
            Value::Null => PermissionSet::empty(),
            Value::Array(items) => {
                let mut grants = Vec::with_capacity(items.len());
                let mut skipped = 0usize;
                for item in items {
                    match grant_from_item(item) {
                        Some(grant) => grants.push(grant),
                        None => skipped += 1,
                    }
                }
                if skipped > 0 {
                    warn!("permission payload: skipped {skipped} unreadable grant(s)");
                }
                PermissionSet::from_grants(grants)
            }
            Value::Object(map) => {
                let mut grants = Vec::with_capacity(map.len());
                let mut skipped = 0usize;
                for (page, rule) in map {
                    match actions_from_value(rule) {
                        Some(actions) => grants.push(Grant {
                            page: PageScope::parse(page),
                            actions,
                        }),
                        None => skipped += 1,
                    }
                }
                if skipped > 0 {
                    warn!("permission payload: skipped {skipped} unreadable page rule(s)");
                }
                PermissionSet::from_grants(grants)
            }
            other => {
                warn!(
                    "permission payload has unsupported shape ({}), treating as empty",
                    json_type(other)
                );
                PermissionSet::empty()
            }
        }
    }

    /// Whether the set grants nothing at all.
    pub fn is_empty(&self) -> bool {
        self.grants.is_empty() && !self.super_admin
    }

    /// Whether a global wildcard grant was present.
    pub fn is_super_admin(&self) -> bool {
        self.super_admin
    }

    /// The normalized grants, in payload order.
    pub fn grants(&self) -> &[Grant] {
        &self.grants
    }
}

/// One element of the grant-list shape. `page` is required; a missing
/// `actions` field keeps the grant with nothing allowed on it.
fn grant_from_item(item: &Value) -> Option<Grant> {
    let obj = item.as_object()?;
    let page = obj.get("page")?.as_str()?;
    let actions = match obj.get("actions") {
        None | Some(Value::Null) => ActionSet::Named(HashSet::new()),
        Some(raw) => actions_from_value(raw)?,
    };
    Some(Grant {
        page: PageScope::parse(page),
        actions,
    })
}

/// Normalize the action half of a grant.
///
/// `"*"` (as a bare string, a list element, or a `"*": true` flag)
/// grants every action. A plain string grants that one action, a list
/// grants each named action, and a map grants the keys whose value is
/// `true`.
fn actions_from_value(value: &Value) -> Option<ActionSet> {
    match value {
        Value::String(s) if s == "*" => Some(ActionSet::Any),
        Value::String(s) => Some(ActionSet::Named(HashSet::from([s.clone()]))),
        Value::Array(items) => {
            let mut set = HashSet::new();
            for item in items {
                let Some(name) = item.as_str() else { continue };
                if name == "*" {
                    return Some(ActionSet::Any);
                }
                set.insert(name.to_string());
            }
            Some(ActionSet::Named(set))
        }
        Value::Object(map) => {
            let mut set = HashSet::new();
            for (action, flag) in map {
                if flag.as_bool() != Some(true) {
                    continue;
                }
                if action == "*" {
                    return Some(ActionSet::Any);
                }
                set.insert(action.clone());
            }
            Some(ActionSet::Named(set))
        }
        _ => None,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
