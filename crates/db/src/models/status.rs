//! Request type and status enums plus the lifecycle transition rules.
//!
//! Both enums are stored as snake_case TEXT (with CHECK constraints in the
//! schema) and serialized the same way on the wire.

use dsar_core::error::CoreError;
use serde::{Deserialize, Serialize};

/// What the data subject is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum RequestType {
    Access,
    Delete,
    Rectify,
}

impl RequestType {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestType::Access => "access",
            RequestType::Delete => "delete",
            RequestType::Rectify => "rectify",
        }
    }
}

/// Lifecycle state of a DSAR request.
///
/// `Pending` is the initial state. `Completed` and `Rejected` are terminal,
/// with two carve-outs encoded in [`validate_transition`]: re-entering
/// `Completed` is an idempotent no-op, and a `Rejected` request may be
/// reopened to `Pending` or `InProgress`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
pub enum RequestStatus {
    Pending,
    InProgress,
    Completed,
    Rejected,
}

impl RequestStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::InProgress => "in_progress",
            RequestStatus::Completed => "completed",
            RequestStatus::Rejected => "rejected",
        }
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RequestStatus::Completed | RequestStatus::Rejected)
    }
}

/// Check whether a status move is legal.
///
/// Rules:
/// - `Completed -> Completed` is allowed; callers treat it as a no-op and
///   must not touch `completed_at`.
/// - `Completed` cannot be left otherwise.
/// - `Rejected -> Completed` is illegal; the request has to be reopened to
///   `Pending` or `InProgress` first.
/// - Everything else (movement among `Pending`, `InProgress`, `Rejected`,
///   and entering `Completed` from a non-terminal state) is allowed.
pub fn validate_transition(from: RequestStatus, to: RequestStatus) -> Result<(), CoreError> {
    use RequestStatus::{Completed, Rejected};

    match (from, to) {
        (Completed, Completed) => Ok(()),
        (Completed, _) | (Rejected, Completed) => Err(CoreError::InvalidTransition {
            from: from.as_str(),
            to: to.as_str(),
        }),
        _ => Ok(()),
    }
}
