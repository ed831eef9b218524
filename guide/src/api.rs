//! Query and command operations over a [`GuideStore`].
//!
//! Each operation returns an owned snapshot so callers can release any lock
//! guarding the store before serializing.

use crate::error::GuideError;
use crate::model::{Resource, StepDetail, StepSummary};
use crate::progress::{self, ProgressSummary};
use crate::store::GuideStore;

/// Step summaries ordered by `(order, id)` ascending.
pub fn list_steps(store: &GuideStore) -> Vec<StepSummary> {
    let mut steps: Vec<_> = store.steps().collect();
    steps.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
    steps.into_iter().map(StepSummary::from).collect()
}

pub fn get_step_detail(store: &GuideStore, step_id: &str) -> Result<StepDetail, GuideError> {
    store.step(step_id).map(StepDetail::from)
}

/// Flip an item's completion and return the updated step detail.
pub fn toggle_checklist_item(
    store: &mut GuideStore,
    step_id: &str,
    item_id: &str,
) -> Result<StepDetail, GuideError> {
    store.toggle_item(step_id, item_id).map(StepDetail::from)
}

pub fn list_resources(store: &GuideStore) -> Vec<Resource> {
    store.resources().to_vec()
}

pub fn get_progress(store: &GuideStore) -> ProgressSummary {
    progress::aggregate(store.steps())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{item, step, store_with};

    #[test]
    fn list_steps_sorts_by_order_then_id() {
        let store = store_with(vec![
            step("c", 2, Vec::new()),
            step("b", 1, Vec::new()),
            step("a", 2, Vec::new()),
            step("z", -1, Vec::new()),
        ]);
        let ids: Vec<String> = list_steps(&store).into_iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["z", "b", "a", "c"]);
    }

    #[test]
    fn empty_store_lists_nothing_and_reports_zero_progress() {
        let store = store_with(Vec::new());
        assert!(list_steps(&store).is_empty());
        assert_eq!(get_progress(&store), ProgressSummary::default());
    }

    #[test]
    fn toggle_returns_detail_with_new_completion() {
        let mut store = store_with(vec![step("a", 1, vec![item("x", false), item("y", false)])]);
        let detail = toggle_checklist_item(&mut store, "a", "y").expect("toggle");
        assert_eq!(detail.completion, 50.0);
        assert!(detail.checklist[1].completed);
        assert_eq!(get_step_detail(&store, "a").expect("detail"), detail);
    }
}
