// src/report.rs
//! Downloadable report artifact built from the current match result

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::types::MatchResult;

pub const REPORT_FILE_NAME: &str = "resume-match-report.json";

/// JSON report artifact: the held match result echoed verbatim, plus the
/// generation timestamp. No versioning field.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    /// Generation time, RFC 3339 / ISO-8601.
    pub timestamp: String,
    pub match_score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub keyword_density: f64,
    pub text_similarity: f64,
    pub recommendations: Vec<String>,
}

impl MatchReport {
    /// Project a match result into the report shape. Pure transformation;
    /// reads nothing and mutates nothing beyond stamping `generated_at`.
    pub fn from_result(result: &MatchResult, generated_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: generated_at.to_rfc3339(),
            match_score: result.score,
            matched_skills: result.matched_skills.clone(),
            missing_skills: result.missing_skills.clone(),
            keyword_density: result.keyword_density,
            text_similarity: result.text_similarity,
            recommendations: result.recommendations.clone(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report")
    }

    /// Write the artifact under its fixed file name into `dir`.
    pub async fn save(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(REPORT_FILE_NAME);
        let content = self.to_json()?;

        tokio::fs::write(&path, content)
            .await
            .with_context(|| format!("Failed to write report: {}", path.display()))?;

        Ok(path)
    }
}
