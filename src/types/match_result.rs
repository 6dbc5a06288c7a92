// src/types/match_result.rs
//! Match computation contracts shared with the analysis service

use serde::{Deserialize, Serialize};

use crate::types::document::ParsedDocument;

/// Computed comparison between a resume and a job description.
///
/// `score`, `keyword_density` and `text_similarity` are percentages in
/// 0..=100 and are stored exactly as the service returned them, including
/// the boundary values. `recommendations` order is meaningful: earlier
/// entries carry higher impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub keyword_density: f64,
    pub text_similarity: f64,
    pub recommendations: Vec<String>,
}

/// Request body for the match endpoint. Wire keys are snake_case,
/// unlike the document and result payloads.
#[derive(Debug, Serialize)]
pub struct MatchRequest<'a> {
    pub resume_data: &'a ParsedDocument,
    pub job_data: &'a ParsedDocument,
}
