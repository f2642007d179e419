//! Invitation delivery. `Notifier` is the narrow seam over the external
//! notification service: production sends over SMTP, test mode logs a
//! simulated send and performs no network I/O.

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use tracing::info;

use crate::config::SmtpConfig;
use crate::errors::AppError;
use crate::models::Invitee;

/// Subject and body templates for the invitation email. `{name}` and
/// `{job_title}` are substituted per candidate.
#[derive(Debug, Clone)]
pub struct InviteTemplate {
    pub subject: String,
    pub body: String,
}

impl InviteTemplate {
    pub fn render(&self, invitee: &Invitee) -> (String, String) {
        let fill = |template: &str| {
            template
                .replace("{name}", &invitee.name)
                .replace("{job_title}", &invitee.job_title)
        };
        (fill(&self.subject), fill(&self.body))
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Delivers (or simulates) the invitation for an accepted candidate.
    async fn send_invite(&self, invitee: &Invitee) -> Result<(), AppError>;
}

/// Real SMTP delivery via lettre, STARTTLS with upfront credentials.
pub struct SmtpNotifier {
    transport: SmtpTransport,
    from: Mailbox,
    template: InviteTemplate,
}

impl SmtpNotifier {
    pub fn new(config: &SmtpConfig, template: InviteTemplate) -> Result<Self, AppError> {
        let transport = SmtpTransport::starttls_relay(&config.host)
            .map_err(|e| AppError::Mail(format!("invalid SMTP relay '{}': {e}", config.host)))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();
        let from = config
            .from
            .parse()
            .map_err(|e| AppError::Mail(format!("invalid sender address '{}': {e}", config.from)))?;
        Ok(Self {
            transport,
            from,
            template,
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn send_invite(&self, invitee: &Invitee) -> Result<(), AppError> {
        let (subject, body) = self.template.render(invitee);
        let message = Message::builder()
            .from(self.from.clone())
            .to(invitee.email.parse().map_err(|e| {
                AppError::Mail(format!("invalid recipient address '{}': {e}", invitee.email))
            })?)
            .subject(subject)
            .body(body)
            .map_err(|e| AppError::Mail(format!("failed to build message: {e}")))?;

        // lettre's SMTP transport is blocking; keep it off the runtime.
        let transport = self.transport.clone();
        tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| AppError::Mail(format!("send task failed: {e}")))?
            .map_err(|e| AppError::Mail(format!("SMTP delivery failed: {e}")))?;

        info!("Invite sent to {} <{}>", invitee.name, invitee.email);
        Ok(())
    }
}

/// Test-mode delivery: logs what would have been sent.
pub struct SimulatedNotifier {
    template: InviteTemplate,
}

impl SimulatedNotifier {
    pub fn new(template: InviteTemplate) -> Self {
        Self { template }
    }
}

#[async_trait]
impl Notifier for SimulatedNotifier {
    async fn send_invite(&self, invitee: &Invitee) -> Result<(), AppError> {
        let (subject, _) = self.template.render(invitee);
        info!(
            "Simulated invite to {} <{}>: {}",
            invitee.name, invitee.email, subject
        );
        Ok(())
    }
}
