//! Leads module — status hierarchy navigation for the lead workflow.
//!
//! # Resources
//!
//! - **StatusRecord** — one main status with ordered sub-statuses, as fetched
//! - **StatusHierarchyIndex** — bidirectional main ↔ sub lookup, rebuilt per fetch
//! - **NavigationCursor** — ephemeral drill-down state for one interaction
//! - **StatusChange** — the `{status, sub_status}` payload handed upward
//!
//! The backend's status endpoint returns a flat list of
//! `{name, sub_statuses}` records. This crate turns that into two-level
//! navigation: drill into a main status, search across every
//! sub-status at once, and resolve a picked name back to the pair the
//! record-update endpoint expects. All I/O stays with the embedding
//! client; this crate only computes.
//!
//! # Usage
//!
//! ```ignore
//! use leads::{NavigationCursor, StatusHierarchyIndex, StatusSelection};
//!
//! let records = leads::parse_status_list(&payload);
//! let records = leads::filter_by_department(records, "Sales");
//! let index = StatusHierarchyIndex::build_with_config(&records, &config);
//!
//! let cursor = NavigationCursor::open();
//! let candidates = index.search(&cursor, "rejec");
//! match index.resolve_sub(&candidates[0])? {
//!     StatusSelection::Sub(change) => client.update_lead(lead_id, &change)?,
//!     StatusSelection::Direct(status) => client.update_lead_status(lead_id, &status)?,
//! }
//! ```

pub mod model;
pub mod service;

pub use model::{
    DepartmentIds, NavigationCursor, StatusChange, StatusRecord, SubStatusEntry,
    filter_by_department, parse_status_list,
};
pub use service::hierarchy::{DuplicateSubStatus, StatusHierarchyIndex, StatusSelection};
pub use service::{LeadsConfig, LeadsError};
