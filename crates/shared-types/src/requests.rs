use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;

use crate::{AppError, Listing, Role};

/// Request DTO for logging in.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Adresse email invalide"))]
    pub email: String,
    #[validate(length(min = 1, message = "Le mot de passe est obligatoire"))]
    pub password: String,
}

/// Request DTO for creating an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Le prénom est obligatoire"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Le nom est obligatoire"))]
    pub last_name: String,
    #[validate(email(message = "Adresse email invalide"))]
    pub email: String,
    #[validate(length(min = 6, message = "Le mot de passe doit contenir au moins 6 caractères"))]
    pub password: String,
    #[validate(custom(function = "validate_selectable_role"))]
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

fn validate_selectable_role(role: &str) -> Result<(), validator::ValidationError> {
    if Role::parse(role).is_recognized() {
        Ok(())
    } else {
        let mut err = validator::ValidationError::new("role");
        err.message = Some("Veuillez choisir un profil".into());
        Err(err)
    }
}

/// Run `validator` rules and convert failures into an [`AppError`].
pub trait ValidateRequest: Validate {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

impl ValidateRequest for LoginRequest {}
impl ValidateRequest for RegisterRequest {}

/// Required-field check of the recruiter's opportunity form.
pub fn validate_listing<T: Listing>(item: &T) -> Result<(), AppError> {
    let mut field_errors = HashMap::new();
    if item.title().trim().is_empty() {
        field_errors.insert("title".to_string(), "Le titre est obligatoire".to_string());
    }
    if item.organization().trim().is_empty() {
        field_errors.insert(
            "organization".to_string(),
            "L'organisation est obligatoire".to_string(),
        );
    }
    if item.description().trim().is_empty() {
        field_errors.insert(
            "description".to_string(),
            "La description est obligatoire".to_string(),
        );
    }
    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(
            "Veuillez corriger les champs en erreur.",
            field_errors,
        ))
    }
}
