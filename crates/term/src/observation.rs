//! JSON observations for scripted callers.
//!
//! With `--json` the menu loop prints one observation per line instead of the
//! boxed menu: the action taken, whether it was accepted, messages, and the
//! queue and reserve as they stand afterwards.

use serde::Serialize;

use crate::core::{ActionOutcome, KindSource, Session};
use crate::menu_view::{error_message, outcome_lines};
use crate::types::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PieceSnapshot {
    pub kind: char,
    pub id: u64,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind.as_char(),
            id: value.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ObservationStatus {
    Ready,
    Ok,
    Rejected,
    Invalid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Observation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<&'static str>,
    pub status: ObservationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<&'static str>,
    pub messages: Vec<String>,
    pub queue: Vec<PieceSnapshot>,
    pub reserve: Vec<PieceSnapshot>,
    pub history_len: usize,
    pub next_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

impl Observation {
    fn from_session<S: KindSource>(session: &Session<S>, status: ObservationStatus) -> Self {
        Self {
            action: None,
            status,
            error: None,
            messages: Vec::new(),
            queue: session.queue_view().into_iter().map(Into::into).collect(),
            reserve: session.stack_view().into_iter().map(Into::into).collect(),
            history_len: session.history().len(),
            next_id: session.next_id(),
            seed: session.seed(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// State right after initialisation
pub fn ready_observation<S: KindSource>(session: &Session<S>) -> Observation {
    Observation::from_session(session, ObservationStatus::Ready)
}

/// State after `outcome` was applied
pub fn build_observation<S: KindSource>(
    session: &Session<S>,
    action: &'static str,
    outcome: &ActionOutcome,
) -> Observation {
    let error = outcome.error();
    let status = if error.is_some() {
        ObservationStatus::Rejected
    } else {
        ObservationStatus::Ok
    };
    let mut obs = Observation::from_session(session, status);
    obs.action = Some(action);
    obs.error = error.map(error_message);
    obs.messages = outcome_lines(outcome)
        .iter()
        .map(|line| line.text().trim().to_string())
        .collect();
    obs
}

/// Observation for input that maps to no action
pub fn invalid_observation<S: KindSource>(session: &Session<S>, input: &str) -> Observation {
    let mut obs = Observation::from_session(session, ObservationStatus::Invalid);
    obs.messages = vec![format!("invalid option: {}", input)];
    obs
}
