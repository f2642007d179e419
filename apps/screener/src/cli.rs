use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::retry::DEFAULT_MAX_ATTEMPTS;

/// Batch resume screening: summarize a job description, screen every
/// resume in a directory, persist accepted candidates, and send (or
/// simulate) interview invitations.
#[derive(Parser, Debug)]
#[command(name = "screener", version)]
pub struct Cli {
    /// Title of the position being hired for
    #[arg(long)]
    pub job_title: String,

    /// Raw job description text
    #[arg(long)]
    pub job_description: String,

    /// Directory containing candidate resumes (PDF)
    #[arg(long)]
    pub cv_dir: PathBuf,

    /// Actually deliver invitation emails over SMTP. Without this flag
    /// every invite is simulated and logged. (Replaces the legacy
    /// inverted `--email_test` flag, where `1` meant real delivery.)
    #[arg(long)]
    pub send_invites: bool,

    /// Maximum orchestrator attempts before unresolved candidates are
    /// reported and left pending
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,

    /// Directory for durable run state: candidate database, rejection
    /// log, summary artifact, scratch files
    #[arg(long, default_value = "state")]
    pub state_dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_required_flags_with_defaults() {
        let cli = Cli::parse_from([
            "screener",
            "--job-title",
            "Rust Engineer",
            "--job-description",
            "Build backend services.",
            "--cv-dir",
            "cvs",
        ]);
        assert_eq!(cli.job_title, "Rust Engineer");
        assert_eq!(cli.cv_dir, PathBuf::from("cvs"));
        assert!(!cli.send_invites);
        assert_eq!(cli.max_attempts, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(cli.state_dir, PathBuf::from("state"));
    }

    #[test]
    fn send_invites_is_opt_in() {
        let cli = Cli::parse_from([
            "screener",
            "--job-title",
            "t",
            "--job-description",
            "d",
            "--cv-dir",
            "cvs",
            "--send-invites",
            "--max-attempts",
            "5",
        ]);
        assert!(cli.send_invites);
        assert_eq!(cli.max_attempts, 5);
    }

    #[test]
    fn missing_required_flag_is_rejected() {
        let result = Cli::try_parse_from(["screener", "--job-title", "t"]);
        assert!(result.is_err());
    }
}
