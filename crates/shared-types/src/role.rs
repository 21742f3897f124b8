use serde::{Deserialize, Serialize};
use std::fmt;

/// Marketplace role attached to an authenticated user.
///
/// - `Candidat` applies to offers, scholarships and funding.
/// - `Recruteur` publishes opportunities and reviews applications.
/// - `Prestataire` answers consultation requests.
/// - `Unrecognized` keeps whatever string the backend sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Candidat,
    Recruteur,
    Prestataire,
    Unrecognized(String),
}

impl Role {
    /// Parse a wire role. Never fails: unknown values become `Unrecognized`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "candidat" | "candidate" => Role::Candidat,
            "recruteur" | "recruiter" => Role::Recruteur,
            "prestataire" | "prestataire_service" | "provider" => Role::Prestataire,
            _ => Role::Unrecognized(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Candidat => "candidat",
            Role::Recruteur => "recruteur",
            Role::Prestataire => "prestataire",
            Role::Unrecognized(raw) => raw,
        }
    }

    /// Landing path for this role.
    pub fn home_path(&self) -> &'static str {
        match self {
            Role::Candidat => "/candidat",
            Role::Recruteur => "/recruteur",
            Role::Prestataire => "/prestataire",
            Role::Unrecognized(_) => "/",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Candidat => "Candidat",
            Role::Recruteur => "Recruteur",
            Role::Prestataire => "Prestataire",
            Role::Unrecognized(_) => "Visiteur",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Unrecognized(_))
    }

    /// Roles a visitor can pick when registering.
    pub const SELECTABLE: [Role; 3] = [Role::Candidat, Role::Recruteur, Role::Prestataire];
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}
