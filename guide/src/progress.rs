//! Completion percentages derived from checklist state.
//!
//! Nothing here is stored. Progress is kept as integer counts and only turned
//! into a percentage at the boundary, rounded to two decimals with
//! round-half-away-from-zero (`f64::round`).

use serde::Serialize;

use crate::model::{ChecklistItem, Step};

/// Completed and total checklist item counts for one step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepProgress {
    pub completed: usize,
    pub total: usize,
}

impl StepProgress {
    pub fn of(checklist: &[ChecklistItem]) -> Self {
        Self {
            completed: checklist.iter().filter(|item| item.completed).count(),
            total: checklist.len(),
        }
    }

    /// True when every item is done. An empty checklist is never complete.
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    /// `100 * completed / total` rounded to two decimals, or `0.0` when empty.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round2(100.0 * self.completed as f64 / self.total as f64)
    }
}

/// Completion percentage for a checklist.
pub fn step_completion(checklist: &[ChecklistItem]) -> f64 {
    StepProgress::of(checklist).percent()
}

/// Aggregate progress across all steps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub overall_completion: f64,
    pub completed_steps: usize,
    pub total_steps: usize,
}

/// Mean of the per-step percentages (each already rounded), rounded again.
///
/// Returns all zeros for an empty input.
pub fn aggregate<'a>(steps: impl IntoIterator<Item = &'a Step>) -> ProgressSummary {
    let mut summary = ProgressSummary::default();
    let mut percent_sum = 0.0;

    for step in steps {
        let progress = step.progress();
        summary.total_steps += 1;
        if progress.is_complete() {
            summary.completed_steps += 1;
        }
        percent_sum += progress.percent();
    }

    if summary.total_steps > 0 {
        summary.overall_completion = round2(percent_sum / summary.total_steps as f64);
    }
    summary
}

/// Round to two decimal places, halves away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
