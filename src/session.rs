// src/session.rs
//! Orchestration state machine for the match workflow.
//!
//! `MatchSession` owns the shared session context: connectivity state, the
//! two document slots, the current match result and the processing
//! indicator. All remote calls go through [`ServiceClient`]; the lock is
//! taken to read or commit state and released before any call suspends, so
//! mutations stay serialized between suspension points.

use std::fmt;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::{ClientConfig, ServiceClient};
use crate::error::{MatchError, SubmissionError};
use crate::types::{DocumentRole, DocumentUpload, MatchResult, ParsedDocument};

/// The client's current belief about analysis-service reachability.
/// `Checking` only exists before the first probe resolves; after that the
/// state is always `Online` or `Offline`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectivityState {
    Checking,
    Online,
    Offline,
}

impl Default for ConnectivityState {
    fn default() -> Self {
        ConnectivityState::Checking
    }
}

impl fmt::Display for ConnectivityState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectivityState::Checking => write!(f, "checking"),
            ConnectivityState::Online => write!(f, "online"),
            ConnectivityState::Offline => write!(f, "offline"),
        }
    }
}

/// One document slot plus the freshness token for its submission stream.
/// The token increases on every issued request; only the response carrying
/// the latest token may be committed.
#[derive(Debug, Default)]
struct RoleSlot {
    document: Option<ParsedDocument>,
    latest_token: u64,
}

#[derive(Debug, Default)]
struct SessionState {
    connectivity: ConnectivityState,
    resume: RoleSlot,
    job: RoleSlot,
    result: Option<MatchResult>,
    in_flight: u32,
}

impl SessionState {
    fn slot(&self, role: DocumentRole) -> &RoleSlot {
        match role {
            DocumentRole::Resume => &self.resume,
            DocumentRole::Job => &self.job,
        }
    }

    fn slot_mut(&mut self, role: DocumentRole) -> &mut RoleSlot {
        match role {
            DocumentRole::Resume => &mut self.resume,
            DocumentRole::Job => &mut self.job,
        }
    }
}

pub struct MatchSession {
    client: ServiceClient,
    state: Arc<Mutex<SessionState>>,
}

impl MatchSession {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = ServiceClient::new(config.base_url.clone(), config.timeout_seconds)?;

        Ok(Self {
            client,
            state: Arc::new(Mutex::new(SessionState::default())),
        })
    }

    /// Probe the analysis service and record the outcome. Every failure is
    /// absorbed into `Offline`; this never returns an error.
    pub async fn check_connectivity(&self) -> ConnectivityState {
        let healthy = self.client.health().await;

        let mut state = self.state.lock().await;
        state.connectivity = if healthy {
            ConnectivityState::Online
        } else {
            ConnectivityState::Offline
        };
        state.connectivity
    }

    pub async fn connectivity(&self) -> ConnectivityState {
        self.state.lock().await.connectivity
    }

    /// Upload one document and commit the parsed result to its role slot.
    ///
    /// The upload is validated at the boundary: unsupported formats are
    /// rejected before any request is issued, and while the session is not
    /// online the call refuses with `ServiceUnavailable`. A failed request
    /// leaves the slot's previous document untouched.
    ///
    /// Each call gets a fresh per-role token; when two submissions for the
    /// same role overlap, only the response matching the latest token is
    /// committed. A superseded response is still returned to its caller,
    /// but session state keeps the newest submission only.
    pub async fn submit_document(
        &self,
        upload: DocumentUpload,
        role: DocumentRole,
    ) -> Result<ParsedDocument, SubmissionError> {
        if upload.content_type().is_none() {
            return Err(SubmissionError::UnsupportedFormat(upload.file_name));
        }

        let token = {
            let mut state = self.state.lock().await;
            if state.connectivity != ConnectivityState::Online {
                return Err(SubmissionError::ServiceUnavailable);
            }
            state.in_flight += 1;
            let slot = state.slot_mut(role);
            slot.latest_token += 1;
            slot.latest_token
        };

        let outcome = self.client.parse_document(&upload).await;

        let mut state = self.state.lock().await;
        state.in_flight -= 1;

        let document = outcome?;
        let slot = state.slot_mut(role);
        if token == slot.latest_token {
            info!("Storing {} document: {}", role, document.file_name);
            slot.document = Some(document.clone());
        } else {
            warn!(
                "Discarding stale {} response: {} (superseded by a newer upload)",
                role, document.file_name
            );
        }

        Ok(document)
    }

    pub async fn document(&self, role: DocumentRole) -> Option<ParsedDocument> {
        self.state.lock().await.slot(role).document.clone()
    }

    /// Whether both slots are populated, i.e. the match precondition holds.
    pub async fn ready_to_match(&self) -> bool {
        let state = self.state.lock().await;
        state.resume.document.is_some() && state.job.document.is_some()
    }

    /// Request a match for the currently held document pair and replace the
    /// stored result wholesale.
    ///
    /// If either slot is empty the call returns `DocumentMissing` without
    /// issuing a request. On a failed request the previously held result is
    /// retained so the user keeps prior context.
    pub async fn compute_match(&self) -> Result<MatchResult, MatchError> {
        let (resume, job) = {
            let mut state = self.state.lock().await;
            if state.connectivity != ConnectivityState::Online {
                return Err(MatchError::ServiceUnavailable);
            }
            let resume = state
                .resume
                .document
                .clone()
                .ok_or(MatchError::DocumentMissing(DocumentRole::Resume))?;
            let job = state
                .job
                .document
                .clone()
                .ok_or(MatchError::DocumentMissing(DocumentRole::Job))?;
            state.in_flight += 1;
            (resume, job)
        };

        let outcome = self.client.match_documents(&resume, &job).await;

        let mut state = self.state.lock().await;
        state.in_flight -= 1;

        let result = outcome?;
        state.result = Some(result.clone());
        Ok(result)
    }

    pub async fn match_result(&self) -> Option<MatchResult> {
        self.state.lock().await.result.clone()
    }

    /// True while any submission or match request is in flight. Implemented
    /// as a counter so overlapping role submissions cannot clear each
    /// other's flag early.
    pub async fn is_processing(&self) -> bool {
        self.state.lock().await.in_flight > 0
    }
}
