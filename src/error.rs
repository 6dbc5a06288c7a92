// src/error.rs
//! Error taxonomy for the remote-call lifecycle.
//!
//! Connectivity failure is deliberately not represented here: the health
//! probe absorbs every failure into `ConnectivityState::Offline` instead of
//! raising an error.

use thiserror::Error;

use crate::types::document::DocumentRole;

/// A document upload/parse operation failed. The previously held document
/// for the role, if any, is left untouched.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("unsupported file format: {0} (expected .pdf, .docx or .doc)")]
    UnsupportedFormat(String),

    #[error("analysis service is not reachable")]
    ServiceUnavailable,

    #[error("upload request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("analysis service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode parse response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The match computation failed. The previously held result, if any, is
/// retained so the user keeps prior context.
#[derive(Debug, Error)]
pub enum MatchError {
    #[error("no {0} has been uploaded yet")]
    DocumentMissing(DocumentRole),

    #[error("analysis service is not reachable")]
    ServiceUnavailable,

    #[error("match request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("analysis service returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("failed to decode match response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_missing_names_the_role() {
        let err = MatchError::DocumentMissing(DocumentRole::Job);
        assert_eq!(err.to_string(), "no job description has been uploaded yet");
    }

    #[test]
    fn test_unsupported_format_names_the_file() {
        let err = SubmissionError::UnsupportedFormat("notes.txt".to_string());
        assert!(err.to_string().contains("notes.txt"));
    }
}
