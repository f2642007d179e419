//! Hiring orchestration — the per-candidate screening loop.
//!
//! Flow per candidate: skip-if-resolved → extract text → profile agent →
//! decision agent → (on invite) contact agent → persist → notify →
//! checkpoint. Candidate-scoped failures become skips in the run report;
//! everything else aborts the run and is retried by the driver.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::agents::AgentSet;
use crate::errors::AppError;
use crate::extract::{format_text, TextExtractor};
use crate::mail::Notifier;
use crate::models::JobPosting;
use crate::store::rejections::RejectionLog;
use crate::store::CandidateStore;

pub mod decision;
pub mod retry;

use decision::{classify, Verdict};

/// Summary artifact written for operator inspection and cross-retry reuse.
const SUMMARY_FILE: &str = "job_description_summary.txt";
/// Debug artifacts, overwritten every iteration. Not part of the
/// durable contract.
const SCRATCH_DIR: &str = "scratch";

/// Outcome of a single orchestrator pass.
pub struct RunOutcome {
    /// The (possibly freshly computed) job description summary.
    pub summary: String,
    /// Candidate IDs that reached a terminal resolution this pass:
    /// invited, rejected, or found already resolved in durable state.
    pub resolved: HashSet<String>,
    /// Candidates skipped with a recoverable error; still pending.
    pub skipped: Vec<Skip>,
}

#[derive(Debug, Clone)]
pub struct Skip {
    pub candidate_id: String,
    pub reason: String,
}

/// The orchestrator. Owns the durable state handles and the external
/// collaborators for the duration of a screening session.
pub struct Screener {
    pub(crate) store: CandidateStore,
    pub(crate) rejections: RejectionLog,
    extractor: Arc<dyn TextExtractor>,
    agents: AgentSet,
    notifier: Arc<dyn Notifier>,
    state_dir: PathBuf,
}

impl Screener {
    pub fn new(
        store: CandidateStore,
        rejections: RejectionLog,
        extractor: Arc<dyn TextExtractor>,
        agents: AgentSet,
        notifier: Arc<dyn Notifier>,
        state_dir: PathBuf,
    ) -> Self {
        Self {
            store,
            rejections,
            extractor,
            agents,
            notifier,
            state_dir,
        }
    }

    /// Enumerates resume files the extractor supports. Candidate ID is
    /// the file stem, assumed unique within the directory. Sorted for
    /// deterministic processing; correctness does not depend on order.
    pub fn scan_candidates(&self, resume_dir: &Path) -> Result<Vec<(String, PathBuf)>, AppError> {
        let mut candidates = Vec::new();
        for entry in std::fs::read_dir(resume_dir)? {
            let path = entry?.path();
            if !self.extractor.supports(&path) {
                debug!("Skipping non-resume entry: {}", path.display());
                continue;
            }
            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => candidates.push((stem.to_string(), path.clone())),
                None => debug!("Skipping undecodable filename: {}", path.display()),
            }
        }
        candidates.sort();
        Ok(candidates)
    }

    /// One orchestrator pass over the pending candidates.
    ///
    /// Summarizes the job description at most once: a cached summary
    /// from an earlier attempt is reused verbatim. Only IDs in
    /// `pending` are processed; durable state (rejection log, invite
    /// checkpoint) is still consulted so a restarted process never
    /// repeats side effects.
    pub async fn run_once(
        &mut self,
        job: &JobPosting,
        resume_dir: &Path,
        pending: &HashSet<String>,
        cached_summary: Option<String>,
    ) -> Result<RunOutcome, AppError> {
        let summary = match cached_summary {
            Some(summary) => summary,
            None => {
                info!("Summarizing job description for '{}'", job.title);
                self.agents.summarizer.summarize(&job.description).await?
            }
        };
        self.persist_summary(&summary)?;

        let mut resolved = HashSet::new();
        let mut skipped = Vec::new();

        for (candidate_id, path) in self.scan_candidates(resume_dir)? {
            if !pending.contains(&candidate_id) {
                continue;
            }
            if self.rejections.contains(&candidate_id) {
                info!("Skipping already rejected candidate: {candidate_id}");
                resolved.insert(candidate_id);
                continue;
            }
            if self.store.is_invited(&candidate_id).await? {
                info!("Candidate {candidate_id} has already been invited");
                resolved.insert(candidate_id);
                continue;
            }

            match self.process_candidate(&candidate_id, &path, &summary, &job.title).await {
                Ok(Verdict::Invite) => {
                    info!("Candidate {candidate_id} invited");
                    resolved.insert(candidate_id);
                }
                Ok(Verdict::Reject) => {
                    info!("Candidate {candidate_id} is not a fit");
                    self.rejections.add(&candidate_id)?;
                    resolved.insert(candidate_id);
                }
                Ok(Verdict::Undetermined) => {
                    // Deliberately unresolved: stays pending for the
                    // next attempt.
                    warn!("Undetermined decision for candidate {candidate_id}, leaving pending");
                }
                Err(e) if e.is_candidate_scoped() => {
                    warn!("Skipping candidate {candidate_id}: {e}");
                    skipped.push(Skip {
                        candidate_id,
                        reason: e.to_string(),
                    });
                }
                Err(e) => return Err(e),
            }
        }

        Ok(RunOutcome {
            summary,
            resolved,
            skipped,
        })
    }

    /// Runs one candidate through extraction, the decision agents, and
    /// (on invite) persistence and notification.
    async fn process_candidate(
        &self,
        candidate_id: &str,
        path: &Path,
        summary: &str,
        job_title: &str,
    ) -> Result<Verdict, AppError> {
        let raw_text = self.extractor.extract(path)?;
        let cv_text = format_text(&raw_text);

        let profile = self.agents.profiles.extract(&cv_text).await?;
        self.dump_scratch("candidate_profile.txt", &profile);

        let verdict_text = self.agents.manager.assess(summary, &profile).await?;
        self.dump_scratch("hiring_decision.txt", &verdict_text);

        let verdict = classify(&verdict_text);
        if verdict == Verdict::Invite {
            let card = self.agents.contacts.retrieve(&profile).await?;
            let invitee = card.into_invitee(candidate_id, job_title)?;
            self.store.upsert(&invitee).await?;
            if let Err(e) = self.notifier.send_invite(&invitee).await {
                // Delivery failure does not roll back acceptance: the
                // checkpoint records "attempted", not "delivered".
                warn!("Invite delivery failed for {candidate_id}: {e}");
            }
            self.store.mark_invited(&invitee.id).await?;
        }
        Ok(verdict)
    }

    fn persist_summary(&self, summary: &str) -> Result<(), AppError> {
        std::fs::create_dir_all(&self.state_dir)?;
        std::fs::write(self.state_dir.join(SUMMARY_FILE), summary)?;
        Ok(())
    }

    /// Best-effort debug artifact, overwritten each iteration.
    fn dump_scratch(&self, name: &str, content: &str) {
        let dir = self.state_dir.join(SCRATCH_DIR);
        let result = std::fs::create_dir_all(&dir).and_then(|_| std::fs::write(dir.join(name), content));
        if let Err(e) = result {
            debug!("Failed to write scratch file {name}: {e}");
        }
    }
}
