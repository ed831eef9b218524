//! Behavior of the query/command operations against the built-in guide.

use guide::api::{
    get_progress, get_step_detail, list_resources, list_steps, toggle_checklist_item,
};
use guide::progress::ProgressSummary;
use guide::{GuideError, GuideStore};

fn completions(store: &GuideStore) -> Vec<(String, f64)> {
    list_steps(store)
        .into_iter()
        .map(|s| (s.id, s.completion))
        .collect()
}

#[test]
fn fresh_guide_reports_no_progress() {
    let store = GuideStore::seeded();
    assert_eq!(
        get_progress(&store),
        ProgressSummary {
            overall_completion: 0.0,
            completed_steps: 0,
            total_steps: 7,
        }
    );
}

#[test]
fn steps_are_listed_in_journey_order() {
    let store = GuideStore::seeded();
    let ids: Vec<String> = list_steps(&store).into_iter().map(|s| s.id).collect();
    assert_eq!(
        ids,
        vec![
            "budgeting",
            "preapproval",
            "search",
            "offer",
            "inspection",
            "closing",
            "move-in",
        ]
    );
}

#[test]
fn toggling_one_budgeting_item_moves_only_that_step() {
    let mut store = GuideStore::seeded();
    let before = completions(&store);

    let detail = toggle_checklist_item(&mut store, "budgeting", "analyze-income").expect("toggle");
    assert_eq!(detail.completion, 25.0);

    let after = completions(&store);
    for ((id, old), (_, new)) in before.iter().zip(&after) {
        if id == "budgeting" {
            assert_eq!((*old, *new), (0.0, 25.0));
        } else {
            assert_eq!(old, new, "{id} changed");
        }
    }
    assert_eq!(get_progress(&store).overall_completion, 3.57);
}

#[test]
fn finishing_a_step_counts_it_complete() {
    let mut store = GuideStore::seeded();
    for item in ["final-walkthrough", "review-closing", "sign-docs"] {
        toggle_checklist_item(&mut store, "closing", item).expect("toggle");
    }

    let progress = get_progress(&store);
    assert_eq!(progress.completed_steps, 1);
    assert_eq!(progress.overall_completion, 14.29);
    assert_eq!(
        get_step_detail(&store, "closing")
            .expect("closing")
            .completion,
        100.0
    );
}

#[test]
fn finishing_everything_reaches_one_hundred() {
    let mut store = GuideStore::seeded();
    let targets: Vec<(String, String)> = store
        .steps()
        .flat_map(|s| s.checklist.iter().map(|i| (s.id.clone(), i.id.clone())))
        .collect();
    for (step_id, item_id) in &targets {
        toggle_checklist_item(&mut store, step_id, item_id).expect("toggle");
    }

    assert_eq!(
        get_progress(&store),
        ProgressSummary {
            overall_completion: 100.0,
            completed_steps: 7,
            total_steps: 7,
        }
    );
}

#[test]
fn missing_step_and_missing_item_are_distinct() {
    let mut store = GuideStore::seeded();

    let step_err = get_step_detail(&store, "nonexistent").unwrap_err();
    assert!(matches!(step_err, GuideError::StepNotFound { .. }));

    let item_err = toggle_checklist_item(&mut store, "budgeting", "nonexistent-item").unwrap_err();
    assert!(matches!(item_err, GuideError::ChecklistItemNotFound { .. }));
    assert_ne!(step_err.to_string(), item_err.to_string());

    let toggle_step_err = toggle_checklist_item(&mut store, "nonexistent", "x").unwrap_err();
    assert_eq!(toggle_step_err, step_err);
}

#[test]
fn resources_are_static() {
    let mut store = GuideStore::seeded();
    let first = list_resources(&store);
    toggle_checklist_item(&mut store, "offer", "submit-offer").expect("toggle");
    let second = list_resources(&store);

    assert_eq!(first.len(), 4);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}
