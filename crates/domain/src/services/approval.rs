//! Handover approval policy.
//!
//! Pure decision logic for the handover state machine. Given the current
//! record, the acting user and the requested action, [`can_transition`]
//! either denies with a reason or allows and produces the field patch to
//! apply. It performs no I/O; the caller is responsible for loading the
//! record and applying the patch atomically.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::{Actor, Handover, HandoverPatch, HandoverStatus, TransitionAction};

/// Roles allowed to finalize handovers, as configuration.
///
/// The default set applies everywhere; a department listed in
/// `department_overrides` replaces the default set for records scoped to it.
#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalConfig {
    #[serde(default = "default_authorized_roles")]
    pub authorized_roles: Vec<String>,

    #[serde(default)]
    pub department_overrides: HashMap<String, Vec<String>>,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            authorized_roles: default_authorized_roles(),
            department_overrides: HashMap::new(),
        }
    }
}

fn default_authorized_roles() -> Vec<String> {
    vec!["Supervisor".to_string(), "Shift Manager".to_string()]
}

impl ApprovalConfig {
    /// Roles authorized to finalize a handover scoped to `department`.
    pub fn roles_for(&self, department: Option<&str>) -> &[String] {
        department
            .and_then(|d| self.department_overrides.get(d))
            .map(Vec::as_slice)
            .unwrap_or(&self.authorized_roles)
    }
}

/// Why a requested transition was refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DenyReason {
    #[error("handover is already {0}")]
    AlreadyFinalized(HandoverStatus),

    #[error("role '{0}' is not authorized to finalize handovers")]
    RoleNotAuthorized(String),
}

/// Outcome of a policy check.
#[derive(Debug, Clone, PartialEq)]
pub enum Decision {
    Allow(HandoverPatch),
    Deny(DenyReason),
}

/// Decides whether `actor` may apply `action` to `record`.
///
/// The clock is an input so the decision is a pure function of its
/// arguments: an approval patch carries `approved_at = now`, a rejection
/// carries none.
pub fn can_transition(
    record: &Handover,
    actor: &Actor,
    action: TransitionAction,
    config: &ApprovalConfig,
    now: DateTime<Utc>,
) -> Decision {
    if record.status != HandoverStatus::Pending {
        return Decision::Deny(DenyReason::AlreadyFinalized(record.status));
    }

    let authorized = config.roles_for(record.department.as_deref());
    if !authorized.iter().any(|role| role == &actor.role) {
        return Decision::Deny(DenyReason::RoleNotAuthorized(actor.role.clone()));
    }

    let patch = match action {
        TransitionAction::Approve => HandoverPatch {
            status: HandoverStatus::Approved,
            approved_at: Some(now),
        },
        TransitionAction::Reject => HandoverPatch {
            status: HandoverStatus::Rejected,
            approved_at: None,
        },
    };

    Decision::Allow(patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn pending_handover(department: Option<&str>) -> Handover {
        Handover {
            id: Uuid::new_v4(),
            shift_id: "1".to_string(),
            from_user_id: "2".to_string(),
            to_user_id: None,
            status: HandoverStatus::Pending,
            approved_at: None,
            remarks: Some("Line ok".to_string()),
            created_at: Utc::now(),
            department: department.map(String::from),
            area: None,
        }
    }

    fn actor(role: &str) -> Actor {
        Actor {
            user_id: "1".to_string(),
            role: role.to_string(),
        }
    }

    #[test]
    fn test_supervisor_may_approve_pending() {
        let record = pending_handover(None);
        let now = Utc::now();
        let decision = can_transition(
            &record,
            &actor("Supervisor"),
            TransitionAction::Approve,
            &ApprovalConfig::default(),
            now,
        );
        assert_eq!(
            decision,
            Decision::Allow(HandoverPatch {
                status: HandoverStatus::Approved,
                approved_at: Some(now),
            })
        );
    }

    #[test]
    fn test_reject_patch_carries_no_approval_time() {
        let record = pending_handover(None);
        let decision = can_transition(
            &record,
            &actor("Shift Manager"),
            TransitionAction::Reject,
            &ApprovalConfig::default(),
            Utc::now(),
        );
        match decision {
            Decision::Allow(patch) => {
                assert_eq!(patch.status, HandoverStatus::Rejected);
                assert!(patch.approved_at.is_none());
            }
            Decision::Deny(reason) => panic!("unexpected deny: {reason}"),
        }
    }

    #[test]
    fn test_operator_is_denied() {
        let record = pending_handover(None);
        let decision = can_transition(
            &record,
            &actor("Operator"),
            TransitionAction::Approve,
            &ApprovalConfig::default(),
            Utc::now(),
        );
        assert_eq!(
            decision,
            Decision::Deny(DenyReason::RoleNotAuthorized("Operator".to_string()))
        );
    }

    #[test]
    fn test_finalized_record_is_terminal_for_any_role() {
        let mut record = pending_handover(None);
        record.status = HandoverStatus::Approved;
        record.approved_at = Some(Utc::now());

        for action in [TransitionAction::Approve, TransitionAction::Reject] {
            let decision = can_transition(
                &record,
                &actor("Supervisor"),
                action,
                &ApprovalConfig::default(),
                Utc::now(),
            );
            assert_eq!(
                decision,
                Decision::Deny(DenyReason::AlreadyFinalized(HandoverStatus::Approved))
            );
        }
    }

    #[test]
    fn test_rejected_record_is_terminal() {
        let mut record = pending_handover(None);
        record.status = HandoverStatus::Rejected;
        let decision = can_transition(
            &record,
            &actor("Supervisor"),
            TransitionAction::Approve,
            &ApprovalConfig::default(),
            Utc::now(),
        );
        assert_eq!(
            decision,
            Decision::Deny(DenyReason::AlreadyFinalized(HandoverStatus::Rejected))
        );
    }

    #[test]
    fn test_department_override_replaces_default_set() {
        let mut config = ApprovalConfig::default();
        config.department_overrides.insert(
            "Packaging".to_string(),
            vec!["Packaging Lead".to_string()],
        );

        let record = pending_handover(Some("Packaging"));

        // The override role is authorized for its department.
        let decision = can_transition(
            &record,
            &actor("Packaging Lead"),
            TransitionAction::Approve,
            &config,
            Utc::now(),
        );
        assert!(matches!(decision, Decision::Allow(_)));

        // The default roles no longer apply there.
        let decision = can_transition(
            &record,
            &actor("Supervisor"),
            TransitionAction::Approve,
            &config,
            Utc::now(),
        );
        assert_eq!(
            decision,
            Decision::Deny(DenyReason::RoleNotAuthorized("Supervisor".to_string()))
        );
    }

    #[test]
    fn test_unlisted_department_uses_default_set() {
        let mut config = ApprovalConfig::default();
        config.department_overrides.insert(
            "Packaging".to_string(),
            vec!["Packaging Lead".to_string()],
        );

        let record = pending_handover(Some("Assembly"));
        let decision = can_transition(
            &record,
            &actor("Supervisor"),
            TransitionAction::Approve,
            &config,
            Utc::now(),
        );
        assert!(matches!(decision, Decision::Allow(_)));
    }

    #[test]
    fn test_finalized_check_precedes_role_check() {
        let mut record = pending_handover(None);
        record.status = HandoverStatus::Approved;
        let decision = can_transition(
            &record,
            &actor("Operator"),
            TransitionAction::Approve,
            &ApprovalConfig::default(),
            Utc::now(),
        );
        assert_eq!(
            decision,
            Decision::Deny(DenyReason::AlreadyFinalized(HandoverStatus::Approved))
        );
    }
}
