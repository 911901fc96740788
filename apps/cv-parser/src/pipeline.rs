//! Extraction pipeline — one resume in, one JSON record out.
//!
//! Flow: extract_text_from_pdf → build_prompt → model.complete →
//!       recover_json → render / write.
//!
//! Each step runs after the previous one finishes; nothing is retried here.

use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::cv::prompts::CV_EXTRACTION_SYSTEM;
use crate::cv::{build_prompt, recover_json, CandidateRecord, ProcessingTag, Recovery};
use crate::errors::AppError;
use crate::extraction::{extract_text_from_pdf, ExtractedText, ExtractionError};
use crate::llm_client::CompletionModel;
use crate::output::{render_record, write_record, FAILURE_NOTICE};

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    /// When false the record is printed but not written to `output`.
    pub save: bool,
}

/// How a run ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    Saved { path: PathBuf, fields: usize },
    Printed { fields: usize },
    /// The model replied with `{}`.
    EmptyRecord,
    /// No JSON object could be recovered from the reply.
    Unrecoverable,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RunOutcome::Saved { .. } | RunOutcome::Printed { .. })
    }
}

/// Runs the whole pipeline. Console output (the JSON or the failure notice)
/// goes to `console`; logs go through `tracing`.
pub async fn run<W: Write>(
    options: &RunOptions,
    model: &dyn CompletionModel,
    console: &mut W,
) -> Result<RunOutcome, AppError> {
    let extracted = extract_text(options.input.clone()).await?;
    if extracted.is_blank() {
        warn!(
            "No text found in {} ({} pages); continuing with an empty document",
            options.input.display(),
            extracted.page_count
        );
    }

    let tag = ProcessingTag::new();
    info!(tag = %tag, "Processing {}", options.input.display());

    let prompt = build_prompt(&extracted.text, &tag);
    let reply = model.complete(&prompt, CV_EXTRACTION_SYSTEM).await?;
    debug!(chars = reply.chars().count(), "Received model reply");

    match recover_json(&reply) {
        Recovery::Parsed(record) if record.is_empty() => {
            warn!("Model returned an empty record");
            writeln!(console, "{FAILURE_NOTICE}")?;
            writeln!(console, "The model returned an empty record.")?;
            Ok(RunOutcome::EmptyRecord)
        }
        Recovery::Parsed(record) => {
            log_coverage(&CandidateRecord::from_map(&record));

            let rendered = render_record(&record).map_err(std::io::Error::from)?;
            writeln!(console, "{rendered}")?;

            let fields = record.len();
            if !options.save {
                return Ok(RunOutcome::Printed { fields });
            }

            write_record(&options.output, &record)?;
            writeln!(
                console,
                "CV content saved to '{}'",
                options.output.display()
            )?;
            info!(fields, "Wrote {}", options.output.display());
            Ok(RunOutcome::Saved {
                path: options.output.clone(),
                fields,
            })
        }
        Recovery::Unrecoverable { original } => {
            warn!(
                chars = original.chars().count(),
                "Could not recover a JSON object from the model reply"
            );
            debug!("Model reply: {original}");
            writeln!(console, "{FAILURE_NOTICE}")?;
            Ok(RunOutcome::Unrecoverable)
        }
    }
}

async fn extract_text(input: PathBuf) -> Result<ExtractedText, ExtractionError> {
    tokio::task::spawn_blocking(move || extract_text_from_pdf(&input))
        .await
        .map_err(|e| ExtractionError::Read(format!("extraction task failed: {e}")))?
}

fn log_coverage(record: &CandidateRecord) {
    info!(
        full_name = record.full_name.as_deref().unwrap_or("<missing>"),
        has_contact = record.email.is_some() || record.phone.is_some(),
        experience_level = record.experience_level.as_deref().unwrap_or("<missing>"),
        highest_degree = record.highest_degree.as_deref().unwrap_or("<missing>"),
        core_skills = record.core_skills.len(),
        "Recovered candidate record"
    );

    let report = record.section_coverage();
    if !report.missing_sections.is_empty() {
        warn!(missing = ?report.missing_sections, "Record is missing sections");
    }
    if let Ok(json) = serde_json::to_string(&report) {
        debug!("Section coverage: {json}");
    }
}
