//! Guide records and the views returned to callers.

use serde::{Deserialize, Serialize};

use crate::progress::StepProgress;

/// A single actionable task within a step.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub completed: bool,
}

/// A named phase of the home buying process.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Step {
    pub id: String,
    pub title: String,
    pub summary: String,
    /// Display position; lower comes first.
    pub order: i64,
    pub description: String,
    pub checklist: Vec<ChecklistItem>,
}

impl Step {
    pub fn item(&self, item_id: &str) -> Option<&ChecklistItem> {
        self.checklist.iter().find(|item| item.id == item_id)
    }

    pub fn item_mut(&mut self, item_id: &str) -> Option<&mut ChecklistItem> {
        self.checklist.iter_mut().find(|item| item.id == item_id)
    }

    pub fn progress(&self) -> StepProgress {
        StepProgress::of(&self.checklist)
    }
}

/// External reading material. Never mutated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub url: String,
}

/// Step fields shown in the step list.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StepSummary {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub order: i64,
    pub completion: f64,
}

impl From<&Step> for StepSummary {
    fn from(step: &Step) -> Self {
        Self {
            id: step.id.clone(),
            title: step.title.clone(),
            summary: step.summary.clone(),
            order: step.order,
            completion: step.progress().percent(),
        }
    }
}

/// Full step, including description and the entire checklist.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct StepDetail {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub order: i64,
    pub description: String,
    pub checklist: Vec<ChecklistItem>,
    pub completion: f64,
}

impl From<&Step> for StepDetail {
    fn from(step: &Step) -> Self {
        Self {
            id: step.id.clone(),
            title: step.title.clone(),
            summary: step.summary.clone(),
            order: step.order,
            description: step.description.clone(),
            checklist: step.checklist.clone(),
            completion: step.progress().percent(),
        }
    }
}
