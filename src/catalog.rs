//! Task catalog resolution: which tasks are on a staff member's agenda for a
//! given date.
//!
//! Three sources merge into one ordered list: recurring templates scheduled on
//! the date's weekday, per-date removal overrides that suppress templates, and
//! one-off custom tasks bound to the exact date. Custom tasks always land
//! after every template, preserving their input order.

use std::collections::HashSet;

use crate::completion::{resolve_completed_task_ids, CompletionSources};
use crate::types::{AgendaItem, CustomTask, DateKeyRange, InputType, TaskRemoval, TaskTemplate};
use crate::weekday::DayCode;

/// Sort-order offset assigned to custom tasks so they sort after templates.
const CUSTOM_TASK_SORT_OFFSET: i64 = 10_000;

/// Everything needed to resolve one user+date agenda. Rows are snapshots the
/// caller already fetched; nothing here is mutated.
#[derive(Debug, Clone)]
pub struct AgendaQuery<'a> {
    /// ISO `YYYY-MM-DD` key of the agenda date.
    pub date_key: &'a str,
    /// Weekday code of `date_key` (the caller usually already has it).
    pub day_code: DayCode,
    pub templates: &'a [TaskTemplate],
    pub custom_tasks: &'a [CustomTask],
    /// The viewer's user id. Removals are date-global, so this never narrows
    /// which removal rows apply; it is carried so every agenda call site
    /// passes the same shape.
    pub current_user_id: Option<&'a str>,
    pub removals: &'a [TaskRemoval],
}

/// Resolve the ordered agenda for one date.
///
/// Templates scheduled on the date's weekday come first, stably sorted by
/// `sort_order` (absent sorts as 0), minus any template suppressed by a
/// removal row for this date. Active custom tasks dated exactly `date_key`
/// follow in input order under synthetic `custom:<id>` ids.
///
/// Pure and fail-soft: malformed schedule data degrades to "not scheduled",
/// never to an error.
pub fn build_agenda_items_for_date(query: &AgendaQuery<'_>) -> Vec<AgendaItem> {
    let removed_task_ids = removed_task_ids_for_date(query.removals, query.date_key);

    let mut scheduled: Vec<&TaskTemplate> = query
        .templates
        .iter()
        .filter(|t| is_scheduled_on(t, query.day_code))
        .filter(|t| !removed_task_ids.contains(t.id.as_str()))
        .collect();
    // Stable sort: templates sharing a sort_order keep their input order.
    scheduled.sort_by_key(|t| t.sort_order.unwrap_or(0));

    let mut items: Vec<AgendaItem> = scheduled
        .into_iter()
        .map(|t| AgendaItem {
            id: t.id.clone(),
            title: t.title.clone(),
            input_type: t.input_type.unwrap_or_default(),
            sort_order: t.sort_order.unwrap_or(0),
            count: None,
            estimated_minutes: t.estimated_minutes,
        })
        .collect();

    let custom_for_date = query
        .custom_tasks
        .iter()
        .filter(|c| c.is_active && c.report_date == query.date_key);
    for (index, custom) in custom_for_date.enumerate() {
        items.push(AgendaItem {
            id: format!("custom:{}", custom.id),
            title: custom.title.clone(),
            input_type: InputType::None,
            sort_order: CUSTOM_TASK_SORT_OFFSET + index as i64,
            count: None,
            estimated_minutes: custom.estimated_minutes,
        });
    }

    items
}

/// Task ids suppressed on `date_key`.
///
/// Removal visibility is date-global by design: any `is_removed` row for the
/// date hides its task for everyone viewing that date, no matter which user
/// requested the removal. The manager universal agenda depends on this.
pub(crate) fn removed_task_ids_for_date<'a>(
    removals: &'a [TaskRemoval],
    date_key: &str,
) -> HashSet<&'a str> {
    removals
        .iter()
        .filter(|r| r.is_removed && r.report_date == date_key)
        .map(|r| r.task_id.as_str())
        .collect()
}

fn is_scheduled_on(template: &TaskTemplate, day_code: DayCode) -> bool {
    match &template.schedule_days {
        Some(days) => days.iter().any(|d| d == day_code.as_str()),
        None => false,
    }
}

/// Inclusive date span covering both the explicitly selected date and the
/// rolling workweek window, so one custom-task fetch serves both views.
///
/// Empty keys are dropped; the bounds are the lexicographic min/max, which is
/// chronological for ISO date keys. `None` when no usable key remains.
pub fn custom_task_range(
    selected_date_key: Option<&str>,
    workweek_date_keys: &[String],
) -> Option<DateKeyRange> {
    let mut keys: Vec<&str> = workweek_date_keys
        .iter()
        .map(String::as_str)
        .chain(selected_date_key)
        .filter(|k| !k.is_empty())
        .collect();
    keys.sort_unstable();

    let start_key = (*keys.first()?).to_string();
    let end_key = (*keys.last()?).to_string();
    Some(DateKeyRange { start_key, end_key })
}

/// A fully resolved day view: the ordered agenda plus which of its task ids
/// are already completed.
#[derive(Debug, Clone)]
pub struct DayAgenda {
    pub items: Vec<AgendaItem>,
    pub completed_task_ids: HashSet<String>,
}

/// Catalog resolution followed by completion resolution for one user+date.
/// Composition only; all policy lives in the two resolvers.
pub fn resolve_day_agenda(query: &AgendaQuery<'_>, sources: &CompletionSources<'_>) -> DayAgenda {
    DayAgenda {
        items: build_agenda_items_for_date(query),
        completed_task_ids: resolve_completed_task_ids(sources),
    }
}
