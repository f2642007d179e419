use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// Everything the run needs is collected up front so the pipeline never
/// blocks on interactive input.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub ollama_model: String,
    /// Present only when the SMTP_* variables are set. Required for
    /// `--send-invites`; ignored in simulate mode.
    pub smtp: Option<SmtpConfig>,
    pub invite_subject: String,
    pub invite_body: String,
    pub rust_log: String,
}

/// SMTP sender identity and relay settings for real invite delivery.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from: String,
}

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
const DEFAULT_OLLAMA_MODEL: &str = "gemma3";

const DEFAULT_INVITE_SUBJECT: &str = "Interview invitation: {job_title}";
const DEFAULT_INVITE_BODY: &str = "Hello {name},\n\n\
    Thank you for applying for the {job_title} position. We reviewed your \
    resume and would like to invite you to an interview. We will follow up \
    with scheduling details shortly.\n";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let smtp = match std::env::var("SMTP_HOST") {
            Ok(host) => Some(SmtpConfig {
                host,
                port: std::env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".to_string())
                    .parse::<u16>()
                    .context("SMTP_PORT must be a valid port number")?,
                username: require_env("SMTP_USERNAME")?,
                password: require_env("SMTP_PASSWORD")?,
                from: require_env("SMTP_FROM")?,
            }),
            Err(_) => None,
        };

        Ok(Config {
            ollama_url: std::env::var("OLLAMA_URL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
            ollama_model: std::env::var("OLLAMA_MODEL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.to_string()),
            smtp,
            invite_subject: std::env::var("INVITE_SUBJECT")
                .unwrap_or_else(|_| DEFAULT_INVITE_SUBJECT.to_string()),
            invite_body: std::env::var("INVITE_BODY")
                .unwrap_or_else(|_| DEFAULT_INVITE_BODY.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
