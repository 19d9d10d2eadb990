use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

// ---------------------------------------------------------------------------
// StatusRecord — one main status as the backend sends it
// ---------------------------------------------------------------------------

/// One main status with its ordered sub-statuses.
///
/// The status endpoint emits an array of these. Sub-status entries
/// arrive either as bare strings or as `{"name": ...}` objects
/// depending on backend version; [`SubStatusEntry`] absorbs both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusRecord {
    pub name: String,

    /// Ordered sub-statuses; display order is significant.
    #[serde(default)]
    pub sub_statuses: Vec<SubStatusEntry>,

    /// Department that owns this status (optional).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    /// Department id(s); a single id or a list depending on backend
    /// version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department_ids: Option<DepartmentIds>,
}

impl StatusRecord {
    /// Whether this record applies to `department`.
    ///
    /// Permissive where scoping is absent: a record with neither
    /// `department` nor `department_ids` applies everywhere.
    pub fn matches_department(&self, department: &str) -> bool {
        if self.department.is_none() && self.department_ids.is_none() {
            return true;
        }
        self.department.as_deref() == Some(department)
            || self
                .department_ids
                .as_ref()
                .is_some_and(|ids| ids.contains(department))
    }
}

/// A sub-status as it appears on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubStatusEntry {
    Name(String),
    Object { name: String },
}

impl SubStatusEntry {
    pub fn name(&self) -> &str {
        match self {
            SubStatusEntry::Name(name) => name,
            SubStatusEntry::Object { name } => name,
        }
    }
}

/// Department ids, single or list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DepartmentIds {
    One(String),
    Many(Vec<String>),
}

impl DepartmentIds {
    pub fn contains(&self, department: &str) -> bool {
        match self {
            DepartmentIds::One(id) => id == department,
            DepartmentIds::Many(ids) => ids.iter().any(|id| id == department),
        }
    }
}

// ---------------------------------------------------------------------------
// Parsing & filtering
// ---------------------------------------------------------------------------

/// Parse a raw status-list payload.
///
/// Lenient: a missing or non-array payload yields an empty list, and a
/// record that does not deserialize is skipped so the rest of the list
/// survives.
pub fn parse_status_list(payload: &Value) -> Vec<StatusRecord> {
    let Some(items) = payload.as_array() else {
        if !payload.is_null() {
            warn!("status list payload is not an array, treating as empty");
        }
        return Vec::new();
    };
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = 0usize;
    for item in items {
        match StatusRecord::deserialize(item) {
            Ok(record) => records.push(record),
            Err(_) => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!("status list payload: skipped {skipped} unreadable record(s)");
    }
    records
}

/// Keep the records relevant to one department.
pub fn filter_by_department(records: Vec<StatusRecord>, department: &str) -> Vec<StatusRecord> {
    records
        .into_iter()
        .filter(|record| record.matches_department(department))
        .collect()
}

// ---------------------------------------------------------------------------
// StatusChange — the payload handed upward after a selection
// ---------------------------------------------------------------------------

/// The status-change payload an embedding client PUTs against the
/// record-update endpoint. Built here, transported elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub status: String,
    pub sub_status: String,
}
