//! Agenda resolution and estimate-variance engine for the staff intranet.
//!
//! Pure, synchronous functions over row snapshots the caller has already
//! fetched: which tasks are due for a user+date, which are completed across
//! the completion-items schema migration, whose agenda a manager mirrors by
//! default, and how logged work time compares against the estimated load.
//!
//! Nothing here performs I/O or throws: malformed rows degrade to defined
//! fallbacks (empty results, zero minutes, identity passthrough), so request
//! handlers can call into this crate from any number of threads and treat
//! every output as valid.

pub mod catalog;
pub mod clock;
pub mod completion;
pub mod mirror;
pub mod types;
pub mod variance;
pub mod weekday;

pub use catalog::{
    build_agenda_items_for_date, custom_task_range, resolve_day_agenda, AgendaQuery, DayAgenda,
};
pub use completion::{parse_completed_task_ids, resolve_completed_task_ids, CompletionSources};
pub use mirror::{resolve_mirror_user_id, resolve_universal_agenda_user_id};
pub use types::{
    AgendaItem, CompletionItem, CustomTask, DateKeyRange, InputType, ManagerStatus,
    StaffCandidate, TaskRemoval, TaskTemplate, WorkReport,
};
pub use variance::{compute_over_estimate_days, VarianceQuery};
pub use weekday::{workweek_date_keys, DayCode, DAY_CODES};
