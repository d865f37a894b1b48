//! Completion state across the schema migration.
//!
//! Completed tasks used to live in a serialized-array column on the daily
//! report row; they now live in a normalized completion-items table. Which
//! source wins is decided by an explicit availability flag the caller passes
//! (set once at startup when the table is detected), never by sniffing the
//! data shape. When the table is available it wins outright — an empty item
//! set means "nothing completed", not "fall back to legacy".

use std::collections::HashSet;

use serde_json::Value;

use crate::types::CompletionItem;

/// Both completion sources for one user+date, plus the migration flag.
#[derive(Debug, Clone)]
pub struct CompletionSources<'a> {
    /// Whether the normalized completion-items table exists in this
    /// deployment. Hard cutover: when true, legacy data is ignored entirely.
    pub completion_items_available: bool,
    pub completion_item_rows: &'a [CompletionItem],
    /// Ids from the legacy serialized-array column, already parsed
    /// (see [`parse_completed_task_ids`]).
    pub legacy_completed_task_ids: &'a [String],
}

/// The set of completed task ids for one user+date.
pub fn resolve_completed_task_ids(sources: &CompletionSources<'_>) -> HashSet<String> {
    if sources.completion_items_available {
        sources
            .completion_item_rows
            .iter()
            .map(|row| row.task_id.as_str())
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .collect()
    } else {
        sources
            .legacy_completed_task_ids
            .iter()
            .filter(|id| !id.is_empty())
            .cloned()
            .collect()
    }
}

/// Parse the legacy completed-tasks column into a deduplicated id list.
///
/// Depending on the fetch path the column arrives either as a native JSON
/// array or as that array re-encoded into a string. Anything else (null,
/// numbers, broken JSON, non-array JSON) yields an empty list; this never
/// fails. First-seen order is preserved.
pub fn parse_completed_task_ids(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(entries) => dedupe_ids(entries),
        Value::String(text) if !text.is_empty() => match serde_json::from_str::<Value>(text) {
            Ok(Value::Array(entries)) => dedupe_ids(&entries),
            Ok(_) => Vec::new(),
            Err(err) => {
                log::debug!("legacy completed-task column is not valid JSON: {err}");
                Vec::new()
            }
        },
        _ => Vec::new(),
    }
}

fn dedupe_ids(entries: &[Value]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    entries
        .iter()
        .filter_map(Value::as_str)
        .filter(|id| !id.is_empty())
        .filter(|id| seen.insert(*id))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(task_id: &str) -> CompletionItem {
        CompletionItem {
            task_id: task_id.to_string(),
        }
    }

    fn owned(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn completion_items_win_even_when_empty() {
        let legacy = owned(&["t1", "t2"]);
        let sources = CompletionSources {
            completion_items_available: true,
            completion_item_rows: &[],
            legacy_completed_task_ids: &legacy,
        };
        assert!(resolve_completed_task_ids(&sources).is_empty());
    }

    #[test]
    fn legacy_ids_apply_when_items_unavailable() {
        let legacy = owned(&["t1", "t2", "t1", ""]);
        let sources = CompletionSources {
            completion_items_available: false,
            completion_item_rows: &[item("ignored")],
            legacy_completed_task_ids: &legacy,
        };
        let resolved = resolve_completed_task_ids(&sources);
        assert_eq!(resolved, HashSet::from(["t1".to_string(), "t2".to_string()]));
    }

    #[test]
    fn item_rows_are_deduplicated_and_blank_ids_dropped() {
        let rows = vec![item("t1"), item("t1"), item(""), item("t3")];
        let sources = CompletionSources {
            completion_items_available: true,
            completion_item_rows: &rows,
            legacy_completed_task_ids: &[],
        };
        let resolved = resolve_completed_task_ids(&sources);
        assert_eq!(resolved, HashSet::from(["t1".to_string(), "t3".to_string()]));
    }

    #[test]
    fn parses_json_encoded_string_form() {
        let raw = json!("[\"task-1\",\"task-2\"]");
        assert_eq!(parse_completed_task_ids(&raw), owned(&["task-1", "task-2"]));
    }

    #[test]
    fn parses_native_array_form() {
        let raw = json!(["task-1", "task-2", "task-1"]);
        assert_eq!(parse_completed_task_ids(&raw), owned(&["task-1", "task-2"]));
    }

    #[test]
    fn garbage_inputs_yield_empty_lists() {
        assert!(parse_completed_task_ids(&json!("not-json")).is_empty());
        assert!(parse_completed_task_ids(&Value::Null).is_empty());
        assert!(parse_completed_task_ids(&json!(42)).is_empty());
        assert!(parse_completed_task_ids(&json!({"task": "t1"})).is_empty());
        assert!(parse_completed_task_ids(&json!("{\"not\":\"array\"}")).is_empty());
        assert!(parse_completed_task_ids(&json!("")).is_empty());
    }

    #[test]
    fn non_string_array_entries_are_skipped() {
        let raw = json!(["task-1", 7, null, ["nested"], "task-2", ""]);
        assert_eq!(parse_completed_task_ids(&raw), owned(&["task-1", "task-2"]));
    }
}
