// src/types/document.rs
//! Document contracts shared with the analysis service

use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured extraction the analysis service produces from one uploaded
/// file. Field names on the wire are camelCase (`fileName`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedDocument {
    pub file_name: String,
    /// Full extracted text. Empty when extraction found nothing; that is
    /// not an error at this layer.
    pub text: String,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub keywords: Vec<String>,
}

/// The session slot a document occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentRole {
    Resume,
    Job,
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRole::Resume => write!(f, "resume"),
            DocumentRole::Job => write!(f, "job description"),
        }
    }
}

/// A file selected for upload: original name plus raw content.
#[derive(Debug, Clone)]
pub struct DocumentUpload {
    pub file_name: String,
    pub content: Vec<u8>,
}

impl DocumentUpload {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }

    /// MIME type for the upload, derived from the file extension.
    /// Only PDF and word-processor documents are accepted; anything else
    /// returns `None` and must be rejected before a request is issued.
    pub fn content_type(&self) -> Option<&'static str> {
        match file_extension(&self.file_name).as_deref() {
            Some("pdf") => Some("application/pdf"),
            Some("docx") => {
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            }
            Some("doc") => Some("application/msword"),
            _ => None,
        }
    }
}

/// Get file extension in lowercase
pub fn file_extension(file_name: &str) -> Option<String> {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
}
