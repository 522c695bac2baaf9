use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Fixed option catalogs for the project hierarchy. The dropdowns in the
/// dashboard only ever offer these values.
pub const PROJECT_OPTIONS: [&str; 3] = [
    "Construction Stadium",
    "Construction Studio",
    "Underground metro railway project",
];

pub const SUB_PROJECT_OPTIONS: [&str; 3] = ["Execution", "Planning", "Initiation"];

pub const ACTIVITY_OPTIONS: [&str; 2] = ["Sign-Off", "Final Delivery"];

/// A planned/actual start date pair. Callers must check the ordering before
/// feeding this to the delay calculator; the pair itself carries no invariant
/// beyond both dates being valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayInput {
    pub planned_start: NaiveDate,
    pub actual_start: NaiveDate,
}

/// Result of the delay calculation. Recomputed on every submission, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayResult {
    pub total_days: i64,
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub message: String,
}

/// The project/sub-project/activity triple selected in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectSelection {
    pub project: String,
    pub sub_project: String,
    pub activity: String,
}

impl ProjectSelection {
    pub fn new(project: &str, sub_project: &str, activity: &str) -> Self {
        Self {
            project: project.to_string(),
            sub_project: sub_project.to_string(),
            activity: activity.to_string(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.project.is_empty() && !self.sub_project.is_empty() && !self.activity.is_empty()
    }

    /// Whether every selected value comes from the fixed catalogs. Free-form
    /// values are accepted by the form, this only drives a warning.
    pub fn is_cataloged(&self) -> bool {
        PROJECT_OPTIONS.contains(&self.project.as_str())
            && SUB_PROJECT_OPTIONS.contains(&self.sub_project.as_str())
            && ACTIVITY_OPTIONS.contains(&self.activity.as_str())
    }
}

/// Body sent to the email-generation endpoint. Field names follow the wire
/// contract of the backend (camelCase); `start_date` is the planned start and
/// `end_date` the actual start.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailRequest {
    pub project: String,
    pub sub_project: String,
    pub activity: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub days_diff: i64,
}

impl EmailRequest {
    pub fn new(selection: &ProjectSelection, input: &DelayInput, result: &DelayResult) -> Self {
        Self {
            project: selection.project.clone(),
            sub_project: selection.sub_project.clone(),
            activity: selection.activity.clone(),
            start_date: input.planned_start,
            end_date: input.actual_start,
            days_diff: result.total_days,
        }
    }
}

/// Generated email body, held only in view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailResponse {
    pub body: String,
}

/// A dashboard statistics card. The dashboard shows a fixed sample set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticCard {
    pub title: &'static str,
    pub value: &'static str,
}

pub fn sample_statistics() -> Vec<StatisticCard> {
    vec![
        StatisticCard {
            title: "Total Revenue",
            value: "$891.0M",
        },
        StatisticCard {
            title: "Percentage of Projects Delayed",
            value: "14%",
        },
        StatisticCard {
            title: "Late Penalties (liquidated damages)",
            value: "$64.9M",
        },
    ]
}
