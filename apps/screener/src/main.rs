mod agents;
mod cli;
mod config;
mod errors;
mod extract;
mod llm_client;
mod mail;
mod models;
mod pipeline;
mod store;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agents::AgentSet;
use crate::config::Config;
use crate::extract::PdfTextExtractor;
use crate::llm_client::LlmClient;
use crate::mail::{InviteTemplate, Notifier, SimulatedNotifier, SmtpNotifier};
use crate::models::JobPosting;
use crate::pipeline::retry::run_with_retries;
use crate::pipeline::Screener;
use crate::store::rejections::RejectionLog;
use crate::store::CandidateStore;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting screener v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&args.state_dir)
        .with_context(|| format!("Failed to create state dir {}", args.state_dir.display()))?;

    // Durable state: candidate store + rejection log
    let store = CandidateStore::open(&args.state_dir.join("candidates.db")).await?;
    let rejections = RejectionLog::open(args.state_dir.join("not_selected_candidates.txt"))?;

    // LLM backend shared by all four agent roles
    let llm = LlmClient::new(config.ollama_url.clone(), config.ollama_model.clone());
    info!("LLM client initialized (model: {})", config.ollama_model);
    let agents = AgentSet::new(Arc::new(llm));

    let template = InviteTemplate {
        subject: config.invite_subject.clone(),
        body: config.invite_body.clone(),
    };
    let notifier: Arc<dyn Notifier> = if args.send_invites {
        let smtp = config
            .smtp
            .as_ref()
            .context("SMTP_HOST, SMTP_USERNAME, SMTP_PASSWORD and SMTP_FROM must be set with --send-invites")?;
        info!("SMTP delivery enabled via {}:{}", smtp.host, smtp.port);
        Arc::new(SmtpNotifier::new(smtp, template)?)
    } else {
        info!("Test mode: invitation emails will be simulated");
        Arc::new(SimulatedNotifier::new(template))
    };

    let mut screener = Screener::new(
        store,
        rejections,
        Arc::new(PdfTextExtractor),
        agents,
        notifier,
        args.state_dir.clone(),
    );

    let job = JobPosting {
        title: args.job_title,
        description: args.job_description,
    };
    let report = run_with_retries(&mut screener, &job, &args.cv_dir, args.max_attempts).await?;

    info!(
        "{} candidate(s) resolved over {} attempt(s)",
        report.resolved.len(),
        report.attempts
    );
    for skip in &report.skipped {
        warn!("Skipped {}: {}", skip.candidate_id, skip.reason);
    }
    if report.pending.is_empty() {
        println!("All candidates have been processed.");
    } else {
        // Partial success is a valid terminal state, not a hard failure.
        println!("Some candidates are still left to be processed:");
        for candidate_id in &report.pending {
            println!("  {candidate_id}");
        }
    }

    Ok(())
}
