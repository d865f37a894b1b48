//! Estimate-variance rollups for the manager status dashboard.
//!
//! For each date in a reporting window this compares the estimated task load
//! (scheduled templates minus removals, plus active custom tasks) against the
//! longest shift actually clocked that day, and counts the days where reality
//! exceeded the plan.

use std::collections::HashMap;

use crate::catalog::removed_task_ids_for_date;
use crate::clock::shift_duration_minutes;
use crate::types::{CustomTask, ManagerStatus, TaskRemoval, TaskTemplate, WorkReport};
use crate::weekday::DayCode;

/// Snapshot of everything the rollup needs for one reporting window.
#[derive(Debug, Clone)]
pub struct VarianceQuery<'a> {
    /// ISO date keys of the reporting window, typically a workweek or month.
    pub date_keys: &'a [String],
    pub templates: &'a [TaskTemplate],
    pub custom_tasks: &'a [CustomTask],
    pub removals: &'a [TaskRemoval],
    pub reports: &'a [WorkReport],
}

/// Count the days in the window where the longest logged shift exceeded the
/// estimated task load.
///
/// A day is *comparable* only when it has both a positive estimate and at
/// least one valid clock-in/out pair; only comparable days feed the
/// percentage, which is 0 (not NaN) when no day qualifies. Shift durations
/// are aggregated across all users on a date: the longest single shift wins.
pub fn compute_over_estimate_days(query: &VarianceQuery<'_>) -> ManagerStatus {
    // Longest valid shift per date, across every user's reports.
    let mut longest_shift: HashMap<&str, u32> = HashMap::new();
    for report in query.reports {
        let (Some(start), Some(end)) = (&report.start_time, &report.end_time) else {
            continue;
        };
        if let Some(minutes) = shift_duration_minutes(start, end) {
            let entry = longest_shift.entry(report.report_date.as_str()).or_insert(0);
            *entry = (*entry).max(minutes);
        }
    }

    let mut comparable_days = 0u32;
    let mut over_estimate_days = 0u32;

    for date_key in query.date_keys {
        let estimated = estimated_minutes_for_date(
            date_key,
            query.templates,
            query.custom_tasks,
            query.removals,
        );
        if estimated == 0 {
            continue;
        }
        let Some(&longest) = longest_shift.get(date_key.as_str()) else {
            continue;
        };
        comparable_days += 1;
        if longest > estimated {
            over_estimate_days += 1;
        }
    }

    let over_estimate_pct = if comparable_days == 0 {
        0
    } else {
        ((over_estimate_days as f64 / comparable_days as f64) * 100.0).round() as u32
    };

    ManagerStatus {
        comparable_days,
        over_estimate_days,
        over_estimate_pct,
    }
}

/// Total estimated minutes for one date: templates scheduled on its weekday
/// and not removed on that date, plus active custom tasks dated exactly that
/// day. Removals apply date-globally here, same as in catalog resolution.
///
/// An unparseable date key estimates to 0 — such a day can never become
/// comparable.
pub fn estimated_minutes_for_date(
    date_key: &str,
    templates: &[TaskTemplate],
    custom_tasks: &[CustomTask],
    removals: &[TaskRemoval],
) -> u32 {
    let Some(day_code) = DayCode::for_date_key(date_key) else {
        log::warn!("skipping unparseable date key in variance rollup: {date_key:?}");
        return 0;
    };

    let removed = removed_task_ids_for_date(removals, date_key);

    let template_minutes: u32 = templates
        .iter()
        .filter(|t| {
            t.schedule_days
                .as_deref()
                .is_some_and(|days| days.iter().any(|d| d == day_code.as_str()))
        })
        .filter(|t| !removed.contains(t.id.as_str()))
        .map(|t| t.estimated_minutes.unwrap_or(0))
        .sum();

    let custom_minutes: u32 = custom_tasks
        .iter()
        .filter(|c| c.is_active && c.report_date == date_key)
        .map(|c| c.estimated_minutes.unwrap_or(0))
        .sum();

    template_minutes + custom_minutes
}
