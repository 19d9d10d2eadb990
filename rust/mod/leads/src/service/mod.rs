pub mod hierarchy;

use std::collections::BTreeMap;

use thiserror::Error;

/// Leads service error type.
#[derive(Debug, Error)]
pub enum LeadsError {
    /// A category was finalized where a leaf sub-status is required.
    /// Recoverable: the UI prompts the user to drill down.
    #[error("'{0}' is a category, pick one of its sub-statuses")]
    CategorySelected(String),
}

impl From<LeadsError> for opencrm_core::ServiceError {
    fn from(e: LeadsError) -> Self {
        opencrm_core::ServiceError::Validation(e.to_string())
    }
}

/// Configuration for the leads module.
///
/// `fallback_categories` replaces the status tables older deployments
/// hardcoded: legacy sub-status name → owning category, consulted only
/// where the backend's status list says nothing. A `BTreeMap` keeps
/// seeding order deterministic.
#[derive(Debug, Clone, Default)]
pub struct LeadsConfig {
    pub fallback_categories: BTreeMap<String, String>,
}

impl LeadsConfig {
    /// Build a config from `(sub-status, category)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> LeadsConfig
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        LeadsConfig {
            fallback_categories: pairs
                .into_iter()
                .map(|(sub, main)| (sub.into(), main.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use opencrm_core::{ServiceError, error::error_code};

    #[test]
    fn error_conversion() {
        let e: ServiceError = LeadsError::CategorySelected("Active Leads".into()).into();
        assert_eq!(e.error_code(), error_code::VALIDATION_FAILED);
        assert!(e.to_string().contains("Active Leads"));
    }

    #[test]
    fn config_from_pairs() {
        let config = LeadsConfig::from_pairs([("Rejected", "Lost login")]);
        assert_eq!(
            config.fallback_categories.get("Rejected").map(String::as_str),
            Some("Lost login")
        );
    }
}
