//! Test-only helpers for constructing guide steps and stores.

use crate::model::{ChecklistItem, Resource, Step};
use crate::store::GuideStore;

/// Create a checklist item with a deterministic label.
pub fn item(id: &str, completed: bool) -> ChecklistItem {
    ChecklistItem {
        id: id.to_string(),
        label: format!("{} label", id),
        completed,
    }
}

/// Create `total` items named `item-0..`, the first `done` of them completed.
pub fn items(total: usize, done: usize) -> Vec<ChecklistItem> {
    (0..total)
        .map(|i| item(&format!("item-{}", i), i < done))
        .collect()
}

/// Create a step with deterministic text fields.
pub fn step(id: &str, order: i64, checklist: Vec<ChecklistItem>) -> Step {
    Step {
        id: id.to_string(),
        title: format!("{} title", id),
        summary: format!("{} summary", id),
        order,
        description: format!("{} description", id),
        checklist,
    }
}

pub fn resource(id: &str) -> Resource {
    Resource {
        id: id.to_string(),
        title: format!("{} title", id),
        url: format!("https://example.test/{}", id),
    }
}

/// Build a store from steps that are known to be valid.
pub fn store_with(steps: Vec<Step>) -> GuideStore {
    GuideStore::from_parts(steps, vec![resource("r1")]).expect("valid test steps")
}
