//! In-memory guide state keyed by step id.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{GuideError, SeedError};
use crate::invariants::validate_steps;
use crate::model::{ChecklistItem, Resource, Step};
use crate::seed;

/// Owns every step and resource for the lifetime of the process.
///
/// Entities are never added or removed after construction; only checklist
/// `completed` flags change, through [`GuideStore::toggle_item`].
#[derive(Debug, Clone)]
pub struct GuideStore {
    steps: BTreeMap<String, Step>,
    resources: Vec<Resource>,
}

impl GuideStore {
    /// Store populated from the built-in seed content.
    pub fn seeded() -> Self {
        Self {
            steps: index(seed::steps()),
            resources: seed::resources(),
        }
    }

    /// Build a store from arbitrary steps, rejecting duplicate ids.
    pub fn from_parts(steps: Vec<Step>, resources: Vec<Resource>) -> Result<Self, SeedError> {
        let violations = validate_steps(&steps);
        if !violations.is_empty() {
            return Err(SeedError { violations });
        }
        Ok(Self {
            steps: index(steps),
            resources,
        })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// All steps, in id order. Callers wanting display order sort by `order`.
    pub fn steps(&self) -> impl Iterator<Item = &Step> {
        self.steps.values()
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn step(&self, step_id: &str) -> Result<&Step, GuideError> {
        self.steps.get(step_id).ok_or_else(|| step_not_found(step_id))
    }

    pub fn item(&self, step_id: &str, item_id: &str) -> Result<&ChecklistItem, GuideError> {
        self.step(step_id)?
            .item(item_id)
            .ok_or_else(|| item_not_found(step_id, item_id))
    }

    /// Flip one item's `completed` flag and return the step that owns it.
    pub fn toggle_item(&mut self, step_id: &str, item_id: &str) -> Result<&Step, GuideError> {
        let step = self
            .steps
            .get_mut(step_id)
            .ok_or_else(|| step_not_found(step_id))?;
        let item = step
            .item_mut(item_id)
            .ok_or_else(|| item_not_found(step_id, item_id))?;

        item.completed = !item.completed;
        debug!(
            step_id,
            item_id,
            completed = item.completed,
            "toggled checklist item"
        );
        Ok(step)
    }
}

impl Default for GuideStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn index(steps: Vec<Step>) -> BTreeMap<String, Step> {
    steps
        .into_iter()
        .map(|step| (step.id.clone(), step))
        .collect()
}

fn step_not_found(step_id: &str) -> GuideError {
    debug!(step_id, "step not found");
    GuideError::StepNotFound {
        step_id: step_id.to_string(),
    }
}

fn item_not_found(step_id: &str, item_id: &str) -> GuideError {
    debug!(step_id, item_id, "checklist item not found");
    GuideError::ChecklistItemNotFound {
        step_id: step_id.to_string(),
        item_id: item_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{item, resource, step, store_with};

    #[test]
    fn seeded_store_holds_seven_steps_and_four_resources() {
        let store = GuideStore::seeded();
        assert_eq!(store.len(), 7);
        assert_eq!(store.resources().len(), 4);
    }

    #[test]
    fn lookup_distinguishes_missing_step_from_missing_item() {
        let store = GuideStore::seeded();
        assert!(matches!(
            store.item("nope", "analyze-income"),
            Err(GuideError::StepNotFound { step_id }) if step_id == "nope"
        ));
        assert!(matches!(
            store.item("budgeting", "nope"),
            Err(GuideError::ChecklistItemNotFound { item_id, .. }) if item_id == "nope"
        ));
        assert!(store.item("budgeting", "analyze-income").is_ok());
    }

    #[test]
    fn toggle_flips_only_the_target_item() {
        let mut store = store_with(vec![
            step("a", 1, vec![item("x", false), item("y", false)]),
            step("b", 2, vec![item("x", false)]),
        ]);

        let updated = store.toggle_item("a", "x").expect("toggle");
        assert!(updated.checklist[0].completed);
        assert!(!updated.checklist[1].completed);
        assert!(!store.item("b", "x").expect("b/x").completed);
    }

    #[test]
    fn double_toggle_restores_original_state() {
        let mut store = GuideStore::seeded();
        let before = store.step("closing").expect("closing").clone();
        store.toggle_item("closing", "sign-docs").expect("first");
        store.toggle_item("closing", "sign-docs").expect("second");
        assert_eq!(store.step("closing").expect("closing"), &before);
    }

    #[test]
    fn toggle_miss_leaves_state_untouched() {
        let mut store = GuideStore::seeded();
        let err = store.toggle_item("budgeting", "missing").unwrap_err();
        assert!(matches!(err, GuideError::ChecklistItemNotFound { .. }));
        assert!(store.steps().flat_map(|s| &s.checklist).all(|i| !i.completed));
    }

    #[test]
    fn from_parts_rejects_duplicate_step_ids() {
        let err = GuideStore::from_parts(
            vec![step("a", 1, Vec::new()), step("a", 2, Vec::new())],
            vec![resource("r")],
        )
        .unwrap_err();
        assert_eq!(err.violations, vec!["duplicate step id 'a'".to_string()]);
    }

    #[test]
    fn mutating_store_does_not_touch_seed() {
        let mut store = GuideStore::seeded();
        store.toggle_item("budgeting", "analyze-income").expect("toggle");
        assert!(!GuideStore::seeded()
            .item("budgeting", "analyze-income")
            .expect("item")
            .completed);
    }
}
