use serde::Deserialize;
use sqlx::FromRow;

use crate::errors::AppError;

/// The position being hired for. The summarized description is run
/// state owned by the retry driver, not part of this struct.
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub title: String,
    pub description: String,
}

/// Raw contact projection returned by the contact-extractor agent.
///
/// Agent output is untrusted: every field is optional at parse time and
/// validated only when the candidate is about to be persisted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactCard {
    pub candidate_id: Option<String>,
    pub candidate_name: Option<String>,
    pub candidate_mail: Option<String>,
}

impl ContactCard {
    /// Validates the card and attaches the job title, producing the
    /// record that is persisted and notified.
    ///
    /// `file_id` (the resume's file stem) is the authoritative candidate
    /// ID: the skip checks on later runs key off the directory listing,
    /// so an agent-supplied ID that disagrees is logged and overridden.
    pub fn into_invitee(self, file_id: &str, job_title: &str) -> Result<Invitee, AppError> {
        let agent_id = self
            .candidate_id
            .ok_or_else(|| AppError::Validation("contact card is missing candidate_id".into()))?;
        let name = self
            .candidate_name
            .ok_or_else(|| AppError::Validation("contact card is missing candidate_name".into()))?;
        let email = self
            .candidate_mail
            .ok_or_else(|| AppError::Validation("contact card is missing candidate_mail".into()))?;
        if job_title.is_empty() {
            return Err(AppError::Validation("job title is empty".into()));
        }

        if agent_id != file_id {
            tracing::warn!(
                "contact agent returned candidate_id '{agent_id}', keeping file-derived id '{file_id}'"
            );
        }

        Ok(Invitee {
            id: file_id.to_string(),
            name,
            email,
            job_title: job_title.to_string(),
        })
    }
}

/// A validated, accepted candidate ready for persistence and invitation.
#[derive(Debug, Clone)]
pub struct Invitee {
    pub id: String,
    pub name: String,
    pub email: String,
    pub job_title: String,
}

/// Row shape of the `candidates` table.
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct CandidateRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub job_title: String,
    pub invite_sent: bool,
    pub invited_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_card() -> ContactCard {
        ContactCard {
            candidate_id: Some("jdoe".to_string()),
            candidate_name: Some("Jane Doe".to_string()),
            candidate_mail: Some("jane@example.com".to_string()),
        }
    }

    #[test]
    fn full_card_validates() {
        let invitee = full_card().into_invitee("jdoe", "Rust Engineer").unwrap();
        assert_eq!(invitee.id, "jdoe");
        assert_eq!(invitee.name, "Jane Doe");
        assert_eq!(invitee.email, "jane@example.com");
        assert_eq!(invitee.job_title, "Rust Engineer");
    }

    #[test]
    fn missing_email_fails_validation() {
        let card = ContactCard {
            candidate_mail: None,
            ..full_card()
        };
        let err = card.into_invitee("jdoe", "Rust Engineer").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(err.to_string().contains("candidate_mail"));
    }

    #[test]
    fn missing_name_fails_validation() {
        let card = ContactCard {
            candidate_name: None,
            ..full_card()
        };
        assert!(matches!(
            card.into_invitee("jdoe", "Rust Engineer"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn file_id_wins_over_agent_id() {
        let invitee = full_card().into_invitee("resume_17", "Rust Engineer").unwrap();
        assert_eq!(invitee.id, "resume_17");
    }

    #[test]
    fn card_parses_with_missing_fields() {
        let card: ContactCard = serde_json::from_str(r#"{"candidate_name": "Jane"}"#).unwrap();
        assert!(card.candidate_id.is_none());
        assert_eq!(card.candidate_name.as_deref(), Some("Jane"));
    }
}
