// src/cli.rs
//! Command-line front end. Renders whatever state the session holds and
//! drives its operations in order; all control flow lives in the session.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::ClientConfig;
use crate::report::MatchReport;
use crate::session::{ConnectivityState, MatchSession};
use crate::types::{DocumentRole, DocumentUpload, MatchResult, ParsedDocument};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Match a resume against a job description via the analysis service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check whether the analysis service is reachable
    Status,
    /// Parse both documents, compute the match and render the report
    Analyze {
        /// Resume file (.pdf, .docx or .doc)
        resume: PathBuf,
        /// Job description file (.pdf, .docx or .doc)
        job: PathBuf,
        /// Write the JSON report artifact after a successful match
        #[arg(long)]
        export: bool,
        /// Directory the report is written to
        #[arg(long, default_value = ".")]
        export_dir: PathBuf,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = ClientConfig::from_env();
    let session = MatchSession::new(&config)?;

    match cli.command {
        Command::Status => {
            let state = session.check_connectivity().await;
            print_status(state, &config.base_url);
        }

        Command::Analyze {
            resume,
            job,
            export,
            export_dir,
        } => {
            let state = session.check_connectivity().await;
            print_status(state, &config.base_url);

            if state != ConnectivityState::Online {
                anyhow::bail!(
                    "analysis service is offline; start it at {} and retry",
                    config.base_url
                );
            }

            let resume_upload = read_upload(&resume).await?;
            let job_upload = read_upload(&job).await?;

            // The two roles upload independently; neither blocks the other.
            let (resume_doc, job_doc) = tokio::join!(
                session.submit_document(resume_upload, DocumentRole::Resume),
                session.submit_document(job_upload, DocumentRole::Job),
            );

            let resume_doc = resume_doc.context("Resume upload failed")?;
            print_document(DocumentRole::Resume, &resume_doc);

            let job_doc = job_doc.context("Job description upload failed")?;
            print_document(DocumentRole::Job, &job_doc);

            let result = session
                .compute_match()
                .await
                .context("Match computation failed")?;
            print_result(&result);

            if export {
                let report = MatchReport::from_result(&result, chrono::Utc::now());
                let path = report.save(&export_dir).await?;
                println!("✓ Report written to {}", path.display());
            }
        }
    }

    Ok(())
}

async fn read_upload(path: &Path) -> Result<DocumentUpload> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| anyhow::anyhow!("Invalid file name: {}", path.display()))?;

    let content = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read file: {}", path.display()))?;

    Ok(DocumentUpload::new(file_name, content))
}

fn print_status(state: ConnectivityState, base_url: &str) {
    match state {
        ConnectivityState::Online => {
            println!("✓ Analysis service online at {}", base_url);
        }
        ConnectivityState::Offline => {
            println!("❌ Analysis service offline (expected at {})", base_url);
        }
        ConnectivityState::Checking => {
            println!("… Checking analysis service at {}", base_url);
        }
    }
}

fn print_document(role: DocumentRole, document: &ParsedDocument) {
    println!(
        "✓ {} processed: {} ({} skills, {} keywords)",
        role,
        document.file_name,
        document.skills.len(),
        document.keywords.len()
    );
}

fn print_result(result: &MatchResult) {
    println!();
    println!("Match score: {}%", result.score);
    println!("  Text similarity: {}%", result.text_similarity);
    println!("  Keyword density: {}%", result.keyword_density);

    if !result.matched_skills.is_empty() {
        println!("  Matched skills: {}", result.matched_skills.join(", "));
    }
    if !result.missing_skills.is_empty() {
        println!("  Missing skills: {}", result.missing_skills.join(", "));
    }

    if !result.recommendations.is_empty() {
        println!();
        println!("Recommendations (highest impact first):");
        for (index, recommendation) in result.recommendations.iter().enumerate() {
            println!("  {}. {}", index + 1, recommendation);
        }
    }
}
