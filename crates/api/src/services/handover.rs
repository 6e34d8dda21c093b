//! Handover lifecycle service.
//!
//! Orchestrates the handover state machine: loads the record, asks the
//! approval policy whether the requested transition is legal, and applies
//! the resulting patch through the store's compare-and-set. The store is
//! never touched on a denied transition, and a patch only lands if the
//! status is still the one the decision was made against.

use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use domain::models::{
    Actor, CreateHandoverRequest, Handover, HandoverFilter, HandoverStatus, NewHandover,
    TransitionAction,
};
use domain::services::{can_transition, ApprovalConfig, Decision, DenyReason};
use persistence::{HandoverStore, StoreError};

use crate::middleware::metrics::{record_handover_finalized, record_handover_submitted};

/// Failures of handover operations. All variants are expected, recoverable
/// outcomes; the API layer maps them onto HTTP statuses.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandoverError {
    #[error("handover not found")]
    NotFound,

    #[error("{0}")]
    Forbidden(DenyReason),

    /// Lost the race: another transition finalized the record between this
    /// call's read and its write.
    #[error("handover was finalized concurrently")]
    Conflict,

    #[error("{0}")]
    Validation(String),
}

impl From<StoreError> for HandoverError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => HandoverError::NotFound,
            StoreError::Conflict => HandoverError::Conflict,
        }
    }
}

/// Orchestrates handover submissions and transitions.
///
/// Holds no mutable state of its own; safe to share across concurrent
/// requests.
#[derive(Clone)]
pub struct HandoverService {
    store: Arc<dyn HandoverStore>,
    approval: ApprovalConfig,
}

impl HandoverService {
    pub fn new(store: Arc<dyn HandoverStore>, approval: ApprovalConfig) -> Self {
        Self { store, approval }
    }

    /// Submits a shift-end handover. Creation is always allowed for an
    /// authenticated operator; only the request shape is validated.
    pub async fn submit(&self, request: CreateHandoverRequest) -> Result<Handover, HandoverError> {
        request
            .validate()
            .map_err(|e| HandoverError::Validation(flatten_validation_errors(&e)))?;

        let new = NewHandover {
            shift_id: request.shift_id,
            from_user_id: request.from_user_id,
            to_user_id: request.to_user_id,
            remarks: request.remarks,
            department: request.department,
            area: request.area,
        };

        let handover = self.store.create(new).await?;
        record_handover_submitted();
        info!(
            handover_id = %handover.id,
            shift_id = %handover.shift_id,
            from_user_id = %handover.from_user_id,
            "Handover submitted"
        );
        Ok(handover)
    }

    /// Applies `action` to a pending handover on behalf of `actor`.
    ///
    /// Decide-then-apply: the policy check runs against the record as read,
    /// and the store write is conditional on the status still matching that
    /// read. A denied decision leaves the store untouched.
    pub async fn transition(
        &self,
        id: Uuid,
        actor: &Actor,
        action: TransitionAction,
        note: Option<&str>,
    ) -> Result<Handover, HandoverError> {
        let record = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(HandoverError::NotFound)?;

        let patch = match can_transition(&record, actor, action, &self.approval, Utc::now()) {
            Decision::Deny(reason) => {
                info!(
                    handover_id = %id,
                    actor_user_id = %actor.user_id,
                    actor_role = %actor.role,
                    action = %action,
                    reason = %reason,
                    "Handover transition denied"
                );
                return Err(HandoverError::Forbidden(reason));
            }
            Decision::Allow(patch) => patch,
        };

        let updated = self.store.apply_patch(id, record.status, patch).await?;

        record_handover_finalized(&action.to_string());
        info!(
            handover_id = %id,
            actor_user_id = %actor.user_id,
            actor_role = %actor.role,
            action = %action,
            status = %updated.status,
            note = note.unwrap_or(""),
            "Handover finalized"
        );
        Ok(updated)
    }

    pub async fn get(&self, id: Uuid) -> Result<Handover, HandoverError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(HandoverError::NotFound)
    }

    /// Lists handovers, newest first.
    pub async fn list(&self, filter: &HandoverFilter) -> Result<Vec<Handover>, HandoverError> {
        Ok(self.store.list(filter).await?)
    }

    /// Lists pending handovers, optionally scoped to a department.
    pub async fn list_pending(
        &self,
        department: Option<String>,
    ) -> Result<Vec<Handover>, HandoverError> {
        let filter = HandoverFilter {
            status: Some(HandoverStatus::Pending),
            department,
        };
        Ok(self.store.list(&filter).await?)
    }
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let messages: Vec<String> = errors
        .field_errors()
        .values()
        .flat_map(|errs| {
            errs.iter()
                .map(|e| e.message.clone().map(|m| m.to_string()).unwrap_or_default())
        })
        .collect();
    messages.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use persistence::MemoryHandoverStore;

    fn service() -> HandoverService {
        HandoverService::new(
            Arc::new(MemoryHandoverStore::new()),
            ApprovalConfig::default(),
        )
    }

    fn create_request(shift_id: &str, from_user_id: &str) -> CreateHandoverRequest {
        CreateHandoverRequest {
            shift_id: shift_id.to_string(),
            from_user_id: from_user_id.to_string(),
            to_user_id: None,
            remarks: Some("Line ok".to_string()),
            department: None,
            area: None,
        }
    }

    fn actor(role: &str) -> Actor {
        Actor {
            user_id: "1".to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_creates_pending_handover() {
        let service = service();
        let handover = service.submit(create_request("1", "2")).await.unwrap();

        assert_eq!(handover.status, HandoverStatus::Pending);
        assert!(handover.approved_at.is_none());
        assert_eq!(handover.shift_id, "1");
        assert_eq!(handover.from_user_id, "2");
        assert_eq!(handover.remarks.as_deref(), Some("Line ok"));
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_shift_id() {
        let service = service();
        let result = service.submit(create_request("", "2")).await;
        assert!(matches!(result, Err(HandoverError::Validation(_))));
    }

    #[tokio::test]
    async fn test_supervisor_approval_sets_approved_at() {
        let service = service();
        let handover = service.submit(create_request("1", "2")).await.unwrap();

        let before = Utc::now();
        let approved = service
            .transition(
                handover.id,
                &actor("Supervisor"),
                TransitionAction::Approve,
                None,
            )
            .await
            .unwrap();
        let after = Utc::now();

        assert_eq!(approved.status, HandoverStatus::Approved);
        let approved_at = approved.approved_at.expect("approved_at must be set");
        assert!(approved_at >= before && approved_at <= after);
        assert!(approved_at >= approved.created_at);
    }

    #[tokio::test]
    async fn test_rejection_leaves_approved_at_unset() {
        let service = service();
        let handover = service.submit(create_request("1", "2")).await.unwrap();

        let rejected = service
            .transition(
                handover.id,
                &actor("Shift Manager"),
                TransitionAction::Reject,
                Some("Calibration incomplete"),
            )
            .await
            .unwrap();

        assert_eq!(rejected.status, HandoverStatus::Rejected);
        assert!(rejected.approved_at.is_none());
    }

    #[tokio::test]
    async fn test_operator_approval_forbidden_and_record_unchanged() {
        let service = service();
        let handover = service.submit(create_request("1", "2")).await.unwrap();

        let result = service
            .transition(
                handover.id,
                &actor("Operator"),
                TransitionAction::Approve,
                None,
            )
            .await;
        assert_eq!(
            result,
            Err(HandoverError::Forbidden(DenyReason::RoleNotAuthorized(
                "Operator".to_string()
            )))
        );

        let stored = service.get(handover.id).await.unwrap();
        assert_eq!(stored, handover);
    }

    #[tokio::test]
    async fn test_second_approval_forbidden_and_record_unchanged() {
        let service = service();
        let handover = service.submit(create_request("1", "2")).await.unwrap();

        let approved = service
            .transition(
                handover.id,
                &actor("Supervisor"),
                TransitionAction::Approve,
                None,
            )
            .await
            .unwrap();

        let result = service
            .transition(
                handover.id,
                &actor("Supervisor"),
                TransitionAction::Approve,
                None,
            )
            .await;
        assert_eq!(
            result,
            Err(HandoverError::Forbidden(DenyReason::AlreadyFinalized(
                HandoverStatus::Approved
            )))
        );

        let stored = service.get(handover.id).await.unwrap();
        assert_eq!(stored, approved);
    }

    #[tokio::test]
    async fn test_transition_unknown_id() {
        let service = service();
        let result = service
            .transition(
                Uuid::new_v4(),
                &actor("Supervisor"),
                TransitionAction::Approve,
                None,
            )
            .await;
        assert_eq!(result, Err(HandoverError::NotFound));
    }

    #[tokio::test]
    async fn test_list_pending_scopes_by_department() {
        let service = service();
        let mut request = create_request("1", "2");
        request.department = Some("Assembly".to_string());
        let assembly = service.submit(request).await.unwrap();

        let mut request = create_request("2", "2");
        request.department = Some("Packaging".to_string());
        service.submit(request).await.unwrap();

        let pending = service
            .list_pending(Some("Assembly".to_string()))
            .await
            .unwrap();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].id, assembly.id);
    }

    #[tokio::test]
    async fn test_concurrent_transitions_have_one_winner() {
        let service = service();
        let handover = service.submit(create_request("1", "2")).await.unwrap();
        let id = handover.id;

        let approve_service = service.clone();
        let reject_service = service.clone();

        let approve = tokio::spawn(async move {
            approve_service
                .transition(id, &actor("Supervisor"), TransitionAction::Approve, None)
                .await
        });
        let reject = tokio::spawn(async move {
            reject_service
                .transition(id, &actor("Shift Manager"), TransitionAction::Reject, None)
                .await
        });

        let approve = approve.await.unwrap();
        let reject = reject.await.unwrap();

        let winners = [approve.is_ok(), reject.is_ok()]
            .iter()
            .filter(|ok| **ok)
            .count();
        assert_eq!(winners, 1, "exactly one transition must win");

        // The loser saw Conflict (raced the write) or AlreadyFinalized
        // (read after the write); the stored status matches the winner.
        let stored = service.get(id).await.unwrap();
        match (&approve, &reject) {
            (Ok(won), Err(lost)) => {
                assert_eq!(stored.status, HandoverStatus::Approved);
                assert_eq!(stored, *won);
                assert!(matches!(
                    lost,
                    HandoverError::Conflict
                        | HandoverError::Forbidden(DenyReason::AlreadyFinalized(_))
                ));
            }
            (Err(lost), Ok(won)) => {
                assert_eq!(stored.status, HandoverStatus::Rejected);
                assert_eq!(stored, *won);
                assert!(matches!(
                    lost,
                    HandoverError::Conflict
                        | HandoverError::Forbidden(DenyReason::AlreadyFinalized(_))
                ));
            }
            _ => unreachable!("exactly one winner asserted above"),
        }
    }
}
