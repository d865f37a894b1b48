use serde::{Deserialize, Serialize};

/// How a staff member records progress on an agenda item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    /// Plain checkbox, no extra input.
    #[default]
    None,
    /// Numeric counter (e.g. "clients contacted").
    Count,
    /// Free-text note.
    Text,
}

/// A recurring task definition, scheduled by weekday code.
///
/// Rows come from the persistence layer as-is; every field the admin UI can
/// leave blank is optional here and defaulted at this boundary. `schedule_days`
/// stays a list of raw strings so an unknown code simply never matches a day
/// instead of failing the whole row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTemplate {
    pub id: String,
    #[serde(default)]
    pub title: String,
    /// Weekday codes (SU..SA) this task is due on. Absent means never scheduled.
    #[serde(default)]
    pub schedule_days: Option<Vec<String>>,
    /// Display order; absent sorts as 0.
    #[serde(default)]
    pub sort_order: Option<i64>,
    #[serde(default)]
    pub input_type: Option<InputType>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
}

/// A one-off task bound to exactly one calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomTask {
    pub id: String,
    /// ISO `YYYY-MM-DD`; exact match against the agenda date, no range semantics.
    pub report_date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    /// Soft-disable flag. Inactive tasks are invisible everywhere.
    #[serde(default)]
    pub is_active: bool,
}

/// An override record suppressing a recurring template on one date.
///
/// Removal visibility is date-global: any `is_removed` row for a date hides
/// the task for everyone viewing that date, regardless of who requested it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRemoval {
    pub user_id: String,
    pub report_date: String,
    pub task_id: String,
    #[serde(default)]
    pub is_removed: bool,
}

/// A normalized completed-task record (post-migration schema).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionItem {
    #[serde(default)]
    pub task_id: String,
}

/// One clock-in/clock-out record per user per date. Multiple rows may exist
/// for one user/date (split shifts); times may be null or malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkReport {
    pub user_id: String,
    pub report_date: String,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// Roster entry consumed by delegate resolution. Flags are tri-state: the
/// roster table predates the manager flag, so either may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffCandidate {
    pub id: String,
    #[serde(default)]
    pub is_staff: Option<bool>,
    #[serde(default)]
    pub is_manager: Option<bool>,
}

/// One resolved agenda entry for a user+date, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaItem {
    /// Template id, or `custom:<id>` for one-off tasks.
    pub id: String,
    pub title: String,
    pub input_type: InputType,
    pub sort_order: i64,
    /// Caller-side progress placeholder; always starts empty.
    pub count: Option<u32>,
    pub estimated_minutes: Option<u32>,
}

/// Inclusive date-key span used to fetch custom tasks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateKeyRange {
    pub start_key: String,
    pub end_key: String,
}

/// Estimate-variance rollup across a set of dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStatus {
    /// Dates with both a positive estimate and a valid logged duration.
    pub comparable_days: u32,
    /// Comparable dates where the longest shift exceeded the estimate.
    pub over_estimate_days: u32,
    /// `over_estimate_days / comparable_days`, rounded to whole percent.
    pub over_estimate_pct: u32,
}
