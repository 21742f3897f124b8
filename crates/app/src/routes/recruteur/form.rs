//! Opportunity form shared by the four kinds.
//!
//! The page edits a flat [`ListingForm`]; [`FormRecord`] converts it to and
//! from the typed record so the data layer stays typed.

use client::DataService;
use shared_types::{
    AppError, Consultation, Financement, Listing, Offer, OpportunityKind, RecordId, Scholarship,
};
use std::collections::HashMap;

/// Raw form fields. Kind-specific fields are ignored by the other kinds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingForm {
    /// Empty until the record exists.
    pub id: RecordId,
    pub title: String,
    pub organization: String,
    pub category: String,
    pub description: String,
    pub deadline: String,
    /// Salary text for offers, an FCFA amount for the other kinds.
    pub amount: String,
    pub location: String,
    pub contract_type: String,
    /// One requirement per line.
    pub requirements: String,
    pub country: String,
    pub eligibility: String,
    pub duration: String,
    pub is_active: bool,
    pub created_at: Option<String>,
}

/// Labels of the shared fields for a kind.
pub struct FieldLabels {
    pub organization: &'static str,
    pub category: &'static str,
    pub amount: &'static str,
}

pub fn field_labels(kind: OpportunityKind) -> FieldLabels {
    match kind {
        OpportunityKind::Offre => FieldLabels {
            organization: "Entreprise",
            category: "Secteur",
            amount: "Salaire",
        },
        OpportunityKind::Bourse => FieldLabels {
            organization: "Organisme",
            category: "Niveau d'études",
            amount: "Montant (FCFA)",
        },
        OpportunityKind::Financement => FieldLabels {
            organization: "Organisme",
            category: "Secteur",
            amount: "Montant (FCFA)",
        },
        OpportunityKind::Consultation => FieldLabels {
            organization: "Client",
            category: "Domaine",
            amount: "Budget (FCFA)",
        },
    }
}

fn optional(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

/// Parse an FCFA amount typed with optional spaces and a decimal comma.
pub fn parse_amount(raw: &str) -> Result<Option<f64>, AppError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(Some(v)),
        _ => Err(AppError::validation(
            "Veuillez corriger les champs en erreur.",
            HashMap::from([("amount".to_string(), "Montant invalide".to_string())]),
        )),
    }
}

fn amount_text(amount: Option<f64>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_default()
}

/// A record the opportunity form can edit.
pub trait FormRecord: Listing {
    fn to_form(&self) -> ListingForm;
    /// Build a record from `form`, keeping `recruiter_id` as its owner.
    fn from_form(form: &ListingForm, recruiter_id: &RecordId) -> Result<Self, AppError>;
}

impl ListingForm {
    pub fn new() -> Self {
        Self {
            is_active: true,
            ..Default::default()
        }
    }

    fn deadline(&self) -> Option<String> {
        optional(&self.deadline)
    }
}

impl FormRecord for Offer {
    fn to_form(&self) -> ListingForm {
        ListingForm {
            id: self.id.clone(),
            title: self.title.clone(),
            organization: self.company.clone(),
            category: self.sector.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone().unwrap_or_default(),
            amount: self.salary.clone().unwrap_or_default(),
            location: self.location.clone(),
            contract_type: self.contract_type.clone(),
            requirements: self.requirements.join("\n"),
            is_active: self.is_active,
            created_at: self.created_at.clone(),
            ..Default::default()
        }
    }

    fn from_form(form: &ListingForm, recruiter_id: &RecordId) -> Result<Self, AppError> {
        Ok(Offer {
            id: form.id.clone(),
            title: form.title.trim().to_string(),
            company: form.organization.trim().to_string(),
            location: form.location.trim().to_string(),
            sector: form.category.trim().to_string(),
            contract_type: form.contract_type.trim().to_string(),
            salary: optional(&form.amount),
            description: form.description.trim().to_string(),
            requirements: form
                .requirements
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_string)
                .collect(),
            deadline: form.deadline(),
            recruiter_id: Some(recruiter_id.clone()),
            is_active: form.is_active,
            created_at: form.created_at.clone(),
        })
    }
}

impl FormRecord for Scholarship {
    fn to_form(&self) -> ListingForm {
        ListingForm {
            id: self.id.clone(),
            title: self.title.clone(),
            organization: self.organization.clone(),
            category: self.level.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone().unwrap_or_default(),
            amount: amount_text(self.amount),
            country: self.country.clone(),
            is_active: self.is_active,
            created_at: self.created_at.clone(),
            ..Default::default()
        }
    }

    fn from_form(form: &ListingForm, recruiter_id: &RecordId) -> Result<Self, AppError> {
        Ok(Scholarship {
            id: form.id.clone(),
            title: form.title.trim().to_string(),
            organization: form.organization.trim().to_string(),
            country: form.country.trim().to_string(),
            level: form.category.trim().to_string(),
            amount: parse_amount(&form.amount)?,
            deadline: form.deadline(),
            description: form.description.trim().to_string(),
            recruiter_id: Some(recruiter_id.clone()),
            is_active: form.is_active,
            created_at: form.created_at.clone(),
        })
    }
}

impl FormRecord for Financement {
    fn to_form(&self) -> ListingForm {
        ListingForm {
            id: self.id.clone(),
            title: self.title.clone(),
            organization: self.organization.clone(),
            category: self.sector.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone().unwrap_or_default(),
            amount: amount_text(self.amount),
            eligibility: self.eligibility.clone().unwrap_or_default(),
            is_active: self.is_active,
            created_at: self.created_at.clone(),
            ..Default::default()
        }
    }

    fn from_form(form: &ListingForm, recruiter_id: &RecordId) -> Result<Self, AppError> {
        Ok(Financement {
            id: form.id.clone(),
            title: form.title.trim().to_string(),
            organization: form.organization.trim().to_string(),
            amount: parse_amount(&form.amount)?,
            sector: form.category.trim().to_string(),
            deadline: form.deadline(),
            description: form.description.trim().to_string(),
            eligibility: optional(&form.eligibility),
            recruiter_id: Some(recruiter_id.clone()),
            is_active: form.is_active,
            created_at: form.created_at.clone(),
        })
    }
}

impl FormRecord for Consultation {
    fn to_form(&self) -> ListingForm {
        ListingForm {
            id: self.id.clone(),
            title: self.title.clone(),
            organization: self.client.clone(),
            category: self.domain.clone(),
            description: self.description.clone(),
            deadline: self.deadline.clone().unwrap_or_default(),
            amount: amount_text(self.budget),
            duration: self.duration.clone().unwrap_or_default(),
            is_active: self.is_active,
            created_at: self.created_at.clone(),
            ..Default::default()
        }
    }

    fn from_form(form: &ListingForm, recruiter_id: &RecordId) -> Result<Self, AppError> {
        Ok(Consultation {
            id: form.id.clone(),
            title: form.title.trim().to_string(),
            client: form.organization.trim().to_string(),
            domain: form.category.trim().to_string(),
            budget: parse_amount(&form.amount)?,
            duration: optional(&form.duration),
            deadline: form.deadline(),
            description: form.description.trim().to_string(),
            recruiter_id: Some(recruiter_id.clone()),
            is_active: form.is_active,
            created_at: form.created_at.clone(),
        })
    }
}

/// Only the recruiter who published a record may edit it.
pub fn ensure_owner(owner: Option<&RecordId>, recruiter_id: &RecordId) -> Result<(), AppError> {
    if owner == Some(recruiter_id) {
        Ok(())
    } else {
        Err(AppError::forbidden(
            "Vous ne pouvez modifier que vos propres publications.",
        ))
    }
}

async fn load_typed<T: FormRecord>(
    data: &DataService,
    id: &RecordId,
    recruiter_id: &RecordId,
) -> Result<ListingForm, AppError> {
    let record = data.get::<T>(id).await?;
    ensure_owner(record.recruiter_id(), recruiter_id)?;
    Ok(record.to_form())
}

async fn save_typed<T: FormRecord>(
    data: &DataService,
    form: &ListingForm,
    recruiter_id: &RecordId,
) -> Result<RecordId, AppError> {
    let record = T::from_form(form, recruiter_id)?;
    let saved = if form.id.is_empty() {
        data.create(&record).await?
    } else {
        data.update(&form.id, &record).await?
    };
    Ok(saved.id().clone())
}

/// Load a record of `recruiter_id` into a form. Someone else's record is
/// `Forbidden`.
pub async fn load_form(
    data: &DataService,
    kind: OpportunityKind,
    id: &RecordId,
    recruiter_id: &RecordId,
) -> Result<ListingForm, AppError> {
    match kind {
        OpportunityKind::Offre => load_typed::<Offer>(data, id, recruiter_id).await,
        OpportunityKind::Bourse => load_typed::<Scholarship>(data, id, recruiter_id).await,
        OpportunityKind::Financement => {
            load_typed::<Financement>(data, id, recruiter_id).await
        }
        OpportunityKind::Consultation => {
            load_typed::<Consultation>(data, id, recruiter_id).await
        }
    }
}

/// Create the record when the form has no id yet, replace it otherwise.
/// Returns its id.
pub async fn save_form(
    data: &DataService,
    kind: OpportunityKind,
    form: &ListingForm,
    recruiter_id: &RecordId,
) -> Result<RecordId, AppError> {
    match kind {
        OpportunityKind::Offre => save_typed::<Offer>(data, form, recruiter_id).await,
        OpportunityKind::Bourse => save_typed::<Scholarship>(data, form, recruiter_id).await,
        OpportunityKind::Financement => {
            save_typed::<Financement>(data, form, recruiter_id).await
        }
        OpportunityKind::Consultation => {
            save_typed::<Consultation>(data, form, recruiter_id).await
        }
    }
}
