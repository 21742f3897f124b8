use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{AppError, OpportunityKind, RecordId};

/// Minimum length of a cover letter, after trimming.
pub const COVER_LETTER_MIN_LEN: usize = 20;

/// Review status of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplicationStatus {
    #[default]
    EnAttente,
    Examinee,
    Entretien,
    Acceptee,
    Refusee,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 5] = [
        ApplicationStatus::EnAttente,
        ApplicationStatus::Examinee,
        ApplicationStatus::Entretien,
        ApplicationStatus::Acceptee,
        ApplicationStatus::Refusee,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => "en_attente",
            ApplicationStatus::Examinee => "examinee",
            ApplicationStatus::Entretien => "entretien",
            ApplicationStatus::Acceptee => "acceptee",
            ApplicationStatus::Refusee => "refusee",
        }
    }

    /// Parse a wire status. Unknown values default to `EnAttente`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "examinee" | "examinée" => ApplicationStatus::Examinee,
            "entretien" => ApplicationStatus::Entretien,
            "acceptee" | "acceptée" => ApplicationStatus::Acceptee,
            "refusee" | "refusée" => ApplicationStatus::Refusee,
            _ => ApplicationStatus::EnAttente,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::EnAttente => "En attente",
            ApplicationStatus::Examinee => "Examinée",
            ApplicationStatus::Entretien => "Entretien",
            ApplicationStatus::Acceptee => "Acceptée",
            ApplicationStatus::Refusee => "Refusée",
        }
    }

    /// Accepted and refused applications are closed.
    pub fn is_final(&self) -> bool {
        matches!(self, ApplicationStatus::Acceptee | ApplicationStatus::Refusee)
    }
}

impl Serialize for ApplicationStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ApplicationStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ApplicationStatus::from_str_or_default(&raw))
    }
}

/// A candidacy submitted against an opportunity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: RecordId,
    pub user_id: RecordId,
    pub opportunity_id: RecordId,
    pub opportunity_type: OpportunityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opportunity_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    #[serde(default)]
    pub cover_letter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    #[serde(default)]
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// What the application form collects before submission.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ApplicationDraft {
    #[validate(length(min = 1, message = "L'opportunité est introuvable"))]
    pub opportunity_id: String,
    pub opportunity_type: Option<OpportunityKind>,
    pub opportunity_title: Option<String>,
    pub applicant_name: Option<String>,
    #[validate(custom(function = "validate_cover_letter"))]
    pub cover_letter: String,
    #[validate(url(message = "Le lien du CV doit être une URL valide"))]
    pub cv_url: Option<String>,
}

fn validate_cover_letter(letter: &str) -> Result<(), validator::ValidationError> {
    let len = letter.trim().chars().count();
    if len == 0 {
        let mut err = validator::ValidationError::new("required");
        err.message = Some("La lettre de motivation est obligatoire".into());
        return Err(err);
    }
    if len < COVER_LETTER_MIN_LEN {
        let mut err = validator::ValidationError::new("too_short");
        err.message = Some(
            format!("La lettre de motivation doit contenir au moins {COVER_LETTER_MIN_LEN} caractères")
                .into(),
        );
        return Err(err);
    }
    Ok(())
}

/// Request body posted to `/applications`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewApplication {
    pub user_id: RecordId,
    pub opportunity_id: RecordId,
    pub opportunity_type: OpportunityKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant_name: Option<String>,
    pub cover_letter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cv_url: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: String,
}

impl ApplicationDraft {
    /// Validate the draft and build the request body.
    ///
    /// Blank CV links are treated as absent. New applications always start
    /// in `en_attente`.
    pub fn into_request(
        mut self,
        user_id: RecordId,
        created_at: String,
    ) -> Result<NewApplication, AppError> {
        self.cv_url = self.cv_url.filter(|u| !u.trim().is_empty());
        self.validate()?;

        let opportunity_type = self.opportunity_type.ok_or_else(|| {
            AppError::bad_request("Type d'opportunité inconnu")
        })?;

        Ok(NewApplication {
            user_id,
            opportunity_id: RecordId::new(self.opportunity_id),
            opportunity_type,
            opportunity_title: self.opportunity_title,
            applicant_name: self.applicant_name,
            cover_letter: self.cover_letter.trim().to_string(),
            cv_url: self.cv_url,
            status: ApplicationStatus::EnAttente,
            created_at,
        })
    }
}

/// Body of the status-update PATCH.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
    pub updated_at: String,
}
