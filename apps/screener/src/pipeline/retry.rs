//! Bounded retry driver. Re-invokes the orchestrator on the shrinking
//! set of unresolved candidates; exhausting the attempt budget with
//! candidates still pending is a reported soft failure, not an error.

use std::collections::HashSet;
use std::path::Path;

use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::JobPosting;
use crate::pipeline::{Screener, Skip};

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Final report of a screening session.
pub struct ScreeningReport {
    /// IDs that reached a terminal accept/reject resolution.
    pub resolved: HashSet<String>,
    /// IDs still unresolved after the attempt budget, sorted.
    pub pending: Vec<String>,
    /// Attempts actually made.
    pub attempts: u32,
    /// Per-candidate skips from the final attempt.
    pub skipped: Vec<Skip>,
}

/// Drives `run_once` until every candidate is resolved or `max_attempts`
/// is reached. The job description summary from the first attempt is
/// reused verbatim on later ones.
pub async fn run_with_retries(
    screener: &mut Screener,
    job: &JobPosting,
    resume_dir: &Path,
    max_attempts: u32,
) -> Result<ScreeningReport, AppError> {
    let mut pending: HashSet<String> = screener
        .scan_candidates(resume_dir)?
        .into_iter()
        .map(|(id, _)| id)
        .collect();
    info!(
        "Screening {} candidate(s) from {}",
        pending.len(),
        resume_dir.display()
    );

    let mut resolved = HashSet::new();
    let mut summary: Option<String> = None;
    let mut skipped = Vec::new();
    let mut attempts = 0;

    while !pending.is_empty() && attempts < max_attempts {
        attempts += 1;
        info!(
            "Attempt {attempts}/{max_attempts}: {} candidate(s) pending",
            pending.len()
        );
        let outcome = screener
            .run_once(job, resume_dir, &pending, summary.take())
            .await?;
        summary = Some(outcome.summary);
        for id in &outcome.resolved {
            pending.remove(id);
        }
        resolved.extend(outcome.resolved);
        skipped = outcome.skipped;
    }

    let mut pending: Vec<String> = pending.into_iter().collect();
    pending.sort();
    if pending.is_empty() {
        info!("All candidates have been processed");
    } else {
        warn!(
            "{} candidate(s) still unresolved after {attempts} attempt(s)",
            pending.len()
        );
    }

    Ok(ScreeningReport {
        resolved,
        pending,
        attempts,
        skipped,
    })
}
