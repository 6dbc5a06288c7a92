// src/core/service_client.rs
//! HTTP client for the remote analysis service

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use tracing::{error, info, warn};

use crate::error::{MatchError, SubmissionError};
use crate::types::{
    document::{DocumentUpload, ParsedDocument},
    match_result::{MatchRequest, MatchResult},
};

const HEALTH_ENDPOINT: &str = "/api/health";
const PARSE_ENDPOINT: &str = "/api/parse";
const MATCH_ENDPOINT: &str = "/api/match";

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create a new service client with the configured timeout
    pub fn new(base_url: impl Into<String>, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Liveness probe. Any 2xx response counts as healthy; every other
    /// status and every transport failure is absorbed into `false`.
    pub async fn health(&self) -> bool {
        let url = format!("{}{}", self.base_url, HEALTH_ENDPOINT);

        match self.client.get(&url).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                warn!("Health probe returned {}", response.status());
                false
            }
            Err(err) => {
                warn!("Health probe failed: {}", err);
                false
            }
        }
    }

    /// Document parsing - sends the file as multipart form data under the
    /// `file` field, receives a ParsedDocument.
    pub async fn parse_document(
        &self,
        upload: &DocumentUpload,
    ) -> Result<ParsedDocument, SubmissionError> {
        let content_type = upload
            .content_type()
            .ok_or_else(|| SubmissionError::UnsupportedFormat(upload.file_name.clone()))?;
        let url = format!("{}{}", self.base_url, PARSE_ENDPOINT);

        let form = Form::new().part(
            "file",
            Part::bytes(upload.content.clone())
                .file_name(upload.file_name.clone())
                .mime_str(content_type)?,
        );

        info!("Calling parse service: {} ({})", url, upload.file_name);

        let response = self.client.post(&url).multipart(form).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Parse service error {}: {}", status, body);
            return Err(SubmissionError::Status { status, body });
        }

        let body = response.text().await?;
        let document: ParsedDocument = serde_json::from_str(&body)?;

        info!("Parsed document received: {}", document.file_name);
        Ok(document)
    }

    /// Match computation - sends both parsed documents in one JSON body,
    /// receives a MatchResult.
    pub async fn match_documents(
        &self,
        resume: &ParsedDocument,
        job: &ParsedDocument,
    ) -> Result<MatchResult, MatchError> {
        let url = format!("{}{}", self.base_url, MATCH_ENDPOINT);

        let payload = MatchRequest {
            resume_data: resume,
            job_data: job,
        };

        info!("Calling match service: {}", url);

        let response = self.client.post(&url).json(&payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Match service error {}: {}", status, body);
            return Err(MatchError::Status { status, body });
        }

        let body = response.text().await?;
        let result: MatchResult = serde_json::from_str(&body)?;

        info!("Match result received (score {})", result.score);
        Ok(result)
    }
}
