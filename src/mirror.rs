//! Mirror/delegate resolution: whose agenda a manager sees by default.
//!
//! Managers open the intranet to supervise, not to work their own checklist,
//! so their default view mirrors a subordinate. Both entry points below share
//! one selection policy so the intranet view and the universal agenda can
//! never drift apart.

use crate::types::StaffCandidate;

/// The delegate selection policy, first match in roster order:
/// 1. a staff member who is not a manager and not `own_id`;
/// 2. any other staff member;
/// 3. nobody (caller falls back to `own_id`).
fn pick_delegate<'a>(candidates: &'a [StaffCandidate], own_id: &str) -> Option<&'a str> {
    let others = || {
        candidates
            .iter()
            .filter(|c| c.is_staff == Some(true) && c.id != own_id)
    };

    others()
        .find(|c| c.is_manager != Some(true))
        .or_else(|| others().next())
        .map(|c| c.id.as_str())
}

/// Which user's agenda the intranet should show for this session.
///
/// Non-managers always see their own agenda. Managers mirror the first
/// non-manager staff member in the roster, then any other staff member, and
/// only see their own agenda when no one else exists.
pub fn resolve_mirror_user_id(
    session_user_id: &str,
    is_manager: bool,
    staff_candidates: &[StaffCandidate],
) -> String {
    if !is_manager {
        return session_user_id.to_string();
    }
    pick_delegate(staff_candidates, session_user_id)
        .unwrap_or(session_user_id)
        .to_string()
}

/// Default subject for the manager universal agenda. Same policy as
/// [`resolve_mirror_user_id`] without the manager gate: the universal agenda
/// is only rendered for managers in the first place.
pub fn resolve_universal_agenda_user_id(
    staff_list: &[StaffCandidate],
    fallback_user_id: &str,
) -> String {
    pick_delegate(staff_list, fallback_user_id)
        .unwrap_or(fallback_user_id)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(id: &str, is_staff: Option<bool>, is_manager: Option<bool>) -> StaffCandidate {
        StaffCandidate {
            id: id.to_string(),
            is_staff,
            is_manager,
        }
    }

    #[test]
    fn non_manager_sessions_see_their_own_agenda() {
        let roster = vec![candidate("staff-1", Some(true), Some(false))];
        assert_eq!(resolve_mirror_user_id("staff-2", false, &roster), "staff-2");
    }

    #[test]
    fn manager_mirrors_first_non_manager_staff() {
        let roster = vec![
            candidate("manager-1", Some(true), Some(true)),
            candidate("staff-1", Some(true), Some(false)),
            candidate("staff-2", Some(true), Some(false)),
        ];
        assert_eq!(resolve_mirror_user_id("manager-1", true, &roster), "staff-1");
    }

    #[test]
    fn unset_manager_flag_counts_as_non_manager() {
        let roster = vec![
            candidate("manager-1", Some(true), Some(true)),
            candidate("staff-1", Some(true), None),
        ];
        assert_eq!(resolve_mirror_user_id("manager-1", true, &roster), "staff-1");
    }

    #[test]
    fn manager_falls_back_to_another_manager_when_no_plain_staff() {
        let roster = vec![
            candidate("manager-1", Some(true), Some(true)),
            candidate("manager-2", Some(true), Some(true)),
        ];
        assert_eq!(
            resolve_mirror_user_id("manager-1", true, &roster),
            "manager-2"
        );
    }

    #[test]
    fn manager_alone_sees_their_own_agenda() {
        let roster = vec![candidate("manager-1", Some(true), Some(true))];
        assert_eq!(
            resolve_mirror_user_id("manager-1", true, &roster),
            "manager-1"
        );
    }

    #[test]
    fn non_staff_rows_never_qualify() {
        let roster = vec![
            candidate("contractor", Some(false), Some(false)),
            candidate("unknown", None, None),
        ];
        assert_eq!(
            resolve_mirror_user_id("manager-1", true, &roster),
            "manager-1"
        );
    }

    #[test]
    fn universal_agenda_applies_the_same_policy() {
        let roster = vec![
            candidate("manager-1", Some(true), Some(true)),
            candidate("staff-1", Some(true), Some(false)),
        ];
        assert_eq!(
            resolve_universal_agenda_user_id(&roster, "manager-1"),
            "staff-1"
        );
        assert_eq!(resolve_universal_agenda_user_id(&[], "manager-1"), "manager-1");
    }
}
