//! Errors surfaced by guide lookups and store construction.

use thiserror::Error;

/// Lookup misses. The display strings are the messages shown to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuideError {
    #[error("Step not found")]
    StepNotFound { step_id: String },
    #[error("Checklist item not found")]
    ChecklistItemNotFound { step_id: String, item_id: String },
}

/// Step data that breaks the store's uniqueness rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid guide steps:\n- {}", .violations.join("\n- "))]
pub struct SeedError {
    pub violations: Vec<String>,
}
