use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of application errors.
///
/// `Network` and `Decode` never come from a backend status code: they
/// describe a request that could not be sent and a body that could not be
/// parsed, so callers can tell the two apart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    ServerError,
    Network,
    Decode,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::ServerError => write!(f, "ServerError"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error returned by every data-access call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            field_errors: HashMap::new(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Conflict, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Unauthorized, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Forbidden, message)
    }

    pub fn server(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::ServerError, message)
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    /// Map a non-success HTTP status and its raw body to an error.
    ///
    /// JSON bodies carrying a `message` (or `error`) string field provide the
    /// message; otherwise the raw body is used, or the status itself when
    /// the body is empty.
    pub fn from_status(status: u16, body: &str) -> Self {
        let kind = match status {
            400 => AppErrorKind::BadRequest,
            401 => AppErrorKind::Unauthorized,
            403 => AppErrorKind::Forbidden,
            404 => AppErrorKind::NotFound,
            409 => AppErrorKind::Conflict,
            422 => AppErrorKind::ValidationError,
            500..=599 => AppErrorKind::ServerError,
            _ => AppErrorKind::BadRequest,
        };

        let parsed = serde_json::from_str::<serde_json::Value>(body).ok();
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message").or_else(|| v.get("error")))
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| {
                let trimmed = body.trim();
                if trimmed.is_empty() {
                    format!("HTTP {status}")
                } else {
                    trimmed.to_string()
                }
            });

        let field_errors = parsed
            .as_ref()
            .and_then(|v| v.get("field_errors").or_else(|| v.get("errors")))
            .and_then(|v| serde_json::from_value::<HashMap<String, String>>(v.clone()).ok())
            .unwrap_or_default();

        Self {
            kind,
            message,
            field_errors,
        }
    }

    /// French message suitable for the error banner.
    ///
    /// Validation and bad-request errors carry a message written for the
    /// user, so it is shown as-is; every other kind gets a fixed sentence.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::ValidationError | AppErrorKind::BadRequest
                if !self.message.is_empty() =>
            {
                self.message.clone()
            }
            AppErrorKind::ValidationError | AppErrorKind::BadRequest => {
                "Les données envoyées sont invalides.".to_string()
            }
            AppErrorKind::NotFound => "Ressource introuvable.".to_string(),
            AppErrorKind::Conflict => "Cette ressource existe déjà.".to_string(),
            AppErrorKind::Unauthorized => {
                "Votre session a expiré. Veuillez vous reconnecter.".to_string()
            }
            AppErrorKind::Forbidden => {
                "Vous n'avez pas les droits nécessaires pour cette action.".to_string()
            }
            AppErrorKind::ServerError => {
                "Erreur du serveur. Veuillez réessayer plus tard.".to_string()
            }
            AppErrorKind::Network => {
                "Impossible de joindre le serveur. Vérifiez votre connexion.".to_string()
            }
            AppErrorKind::Decode => "Réponse inattendue du serveur.".to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == AppErrorKind::NotFound
    }

    pub fn status_code_u16(&self) -> Option<u16> {
        match self.kind {
            AppErrorKind::NotFound => Some(404),
            AppErrorKind::BadRequest => Some(400),
            AppErrorKind::ValidationError => Some(422),
            AppErrorKind::Conflict => Some(409),
            AppErrorKind::Unauthorized => Some(401),
            AppErrorKind::Forbidden => Some(403),
            AppErrorKind::ServerError => Some(500),
            AppErrorKind::Network | AppErrorKind::Decode => None,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Valeur invalide pour {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Veuillez corriger les champs en erreur.", field_errors)
    }
}
