//! Bidirectional status index: build, search, resolve.
//!
//! The backend hands over a flat list of main statuses, each with its
//! ordered sub-statuses. The index derived here answers the three
//! questions the status-change workflow asks: what are the levels
//! (main list, one main's subs), which labels match a search, and what
//! does a finalized pick mean for the record.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::model::{NavigationCursor, StatusChange, StatusRecord};

use super::{LeadsConfig, LeadsError};

// ---------------------------------------------------------------------------
// StatusHierarchyIndex
// ---------------------------------------------------------------------------

/// Derived main ↔ sub lookup, rebuilt whenever the backend's status
/// list changes and swapped in wholesale. Nothing mutates an index
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct StatusHierarchyIndex {
    /// Main statuses in first-seen order.
    mains: Vec<String>,
    main_to_subs: HashMap<String, Vec<String>>,
    sub_to_main: HashMap<String, String>,
    duplicates: Vec<DuplicateSubStatus>,
}

/// A sub-status name seen under two different main statuses. The
/// newest owner wins; the collision is kept for callers to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateSubStatus {
    pub sub_status: String,
    pub previous_main: String,
    pub new_main: String,
}

/// What a finalized dropdown pick means for the record being updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusSelection {
    /// A known leaf with its owning main status; persist the pair.
    Sub(StatusChange),
    /// A name outside the hierarchy, persisted verbatim as the status.
    /// Legacy/freeform escape hatch.
    Direct(String),
}

impl StatusHierarchyIndex {
    /// Fold the backend's records into an index. O(total sub-statuses).
    ///
    /// Repeated main names merge their sub-status lists. A sub-status
    /// reappearing under a different main keeps the newest owner in
    /// [`main_for`](Self::main_for) (both display lists still show it)
    /// and records a [`DuplicateSubStatus`].
    pub fn build(records: &[StatusRecord]) -> StatusHierarchyIndex {
        let mut index = StatusHierarchyIndex::default();
        for record in records {
            index.insert_main(&record.name);
            for sub in &record.sub_statuses {
                index.insert_sub(&record.name, sub.name());
            }
        }
        index
    }

    /// [`build`](Self::build), then seed `config.fallback_categories`
    /// pairs the backend did not claim. Backend data always wins;
    /// seeded mains append after the backend's, in key order.
    pub fn build_with_config(
        records: &[StatusRecord],
        config: &LeadsConfig,
    ) -> StatusHierarchyIndex {
        let mut index = StatusHierarchyIndex::build(records);
        let mut seeded = 0usize;
        for (sub, main) in &config.fallback_categories {
            if index.sub_to_main.contains_key(sub) {
                continue;
            }
            index.insert_main(main);
            index.insert_sub(main, sub);
            seeded += 1;
        }
        if seeded > 0 {
            debug!("seeded {seeded} fallback sub-status mapping(s)");
        }
        index
    }

    fn insert_main(&mut self, main: &str) {
        if !self.main_to_subs.contains_key(main) {
            self.mains.push(main.to_string());
            self.main_to_subs.insert(main.to_string(), Vec::new());
        }
    }

    fn insert_sub(&mut self, main: &str, sub: &str) {
        let subs = self.main_to_subs.entry(main.to_string()).or_default();
        if !subs.iter().any(|s| s == sub) {
            subs.push(sub.to_string());
        }
        if let Some(previous) = self.sub_to_main.insert(sub.to_string(), main.to_string()) {
            if previous != main {
                warn!("sub-status '{sub}' reassigned from '{previous}' to '{main}'");
                self.duplicates.push(DuplicateSubStatus {
                    sub_status: sub.to_string(),
                    previous_main: previous,
                    new_main: main.to_string(),
                });
            }
        }
    }

    // --- accessors ---

    /// Main statuses in first-seen order.
    pub fn main_statuses(&self) -> &[String] {
        &self.mains
    }

    /// Sub-statuses of `main` in display order; empty when unknown.
    pub fn sub_statuses(&self, main: &str) -> &[String] {
        self.main_to_subs
            .get(main)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Owning main status of a known sub-status.
    pub fn main_for(&self, sub: &str) -> Option<&str> {
        self.sub_to_main.get(sub).map(String::as_str)
    }

    /// Whether `name` is a main status.
    pub fn is_main(&self, name: &str) -> bool {
        self.main_to_subs.contains_key(name)
    }

    /// Collisions hit while building, in encounter order.
    pub fn duplicate_warnings(&self) -> &[DuplicateSubStatus] {
        &self.duplicates
    }

    /// Whether the index holds no statuses at all.
    pub fn is_empty(&self) -> bool {
        self.mains.is_empty()
    }

    // --- navigation ---

    /// Candidate labels for the dropdown, per the cursor's level and
    /// the live query.
    ///
    /// An empty query lists the visible level: all mains, or the
    /// selected main's subs. A non-empty query runs a flat
    /// case-insensitive substring search over every sub-status of
    /// every main, exact matches ranked before partials and duplicates
    /// collapsed; when no leaf matches at all, it falls back to main
    /// statuses whose own name or any sub-status contains the query.
    /// The flat search deliberately ignores the drill-down level:
    /// users search for a fine-grained sub-status without knowing its
    /// parent.
    pub fn search(&self, cursor: &NavigationCursor, query: &str) -> Vec<String> {
        if query.is_empty() {
            if cursor.showing_main_list {
                return self.mains.clone();
            }
            return match &cursor.selected_main {
                Some(main) => self.sub_statuses(main).to_vec(),
                None => Vec::new(),
            };
        }

        let needle = query.to_lowercase();
        let mut exact = Vec::new();
        let mut partial = Vec::new();
        for main in &self.mains {
            for sub in self.sub_statuses(main) {
                let lowered = sub.to_lowercase();
                if lowered == needle {
                    push_unique(&mut exact, sub);
                } else if lowered.contains(&needle) {
                    push_unique(&mut partial, sub);
                }
            }
        }
        exact.extend(partial);
        if !exact.is_empty() {
            return exact;
        }

        // no leaf hit: fall back to category-level matches
        self.mains
            .iter()
            .filter(|main| {
                main.to_lowercase().contains(&needle)
                    || self
                        .sub_statuses(main)
                        .iter()
                        .any(|sub| sub.to_lowercase().contains(&needle))
            })
            .cloned()
            .collect()
    }

    /// Resolve a finalized dropdown pick.
    ///
    /// A known sub-status yields the `(main, sub)` pair the caller
    /// persists. A category with sub-statuses is refused so the UI
    /// forces a drill-down. Anything else passes through as a direct
    /// status value, hierarchy bypassed.
    pub fn resolve_sub(&self, name: &str) -> Result<StatusSelection, LeadsError> {
        if let Some(main) = self.sub_to_main.get(name) {
            return Ok(StatusSelection::Sub(StatusChange {
                status: main.clone(),
                sub_status: name.to_string(),
            }));
        }
        if !self.sub_statuses(name).is_empty() {
            return Err(LeadsError::CategorySelected(name.to_string()));
        }
        Ok(StatusSelection::Direct(name.to_string()))
    }
}

fn push_unique(list: &mut Vec<String>, label: &str) {
    if !list.iter().any(|existing| existing == label) {
        list.push(label.to_string());
    }
}
