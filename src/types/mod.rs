// src/types/mod.rs

pub mod document;
pub mod match_result;

pub use document::{DocumentRole, DocumentUpload, ParsedDocument};
pub use match_result::{MatchRequest, MatchResult};
