//! Uniqueness rules for guide step data.

use std::collections::HashSet;

use crate::model::Step;

/// Check the rules a store relies on for id lookup:
/// - No duplicate step ids
/// - No duplicate item ids within a step (reuse across steps is allowed)
pub fn validate_steps(steps: &[Step]) -> Vec<String> {
    let mut errors = Vec::new();
    let mut seen_steps = HashSet::new();

    for step in steps {
        if !seen_steps.insert(step.id.as_str()) {
            errors.push(format!("duplicate step id '{}'", step.id));
        }

        let mut seen_items = HashSet::new();
        for item in &step.checklist {
            if !seen_items.insert(item.id.as_str()) {
                errors.push(format!(
                    "{}: duplicate checklist item id '{}'",
                    step.id, item.id
                ));
            }
        }
    }

    errors
}
