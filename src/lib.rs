// src/lib.rs
//! Client core for the resume / job-description match workflow.
//!
//! The heart of the crate is [`session::MatchSession`]: it tracks analysis
//! service reachability, sequences the per-document upload/parse requests
//! with a stale-response guard, gates the match computation on both
//! documents being present, and holds the last result for export. The
//! `cli` module is a thin presentation layer over it.

pub mod cli;
pub mod core;
pub mod error;
pub mod report;
pub mod session;
pub mod types;

pub use error::{MatchError, SubmissionError};
pub use report::MatchReport;
pub use session::{ConnectivityState, MatchSession};
pub use types::{DocumentRole, DocumentUpload, MatchResult, ParsedDocument};
