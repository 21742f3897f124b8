use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::RecordId;

/// The four kinds of opportunity a candidate can apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpportunityKind {
    Offre,
    Bourse,
    Financement,
    Consultation,
}

impl OpportunityKind {
    pub const ALL: [OpportunityKind; 4] = [
        OpportunityKind::Offre,
        OpportunityKind::Bourse,
        OpportunityKind::Financement,
        OpportunityKind::Consultation,
    ];

    /// JSON-server collection holding records of this kind.
    pub fn collection(&self) -> &'static str {
        match self {
            OpportunityKind::Offre => "offers",
            OpportunityKind::Bourse => "scholarships",
            OpportunityKind::Financement => "financements",
            OpportunityKind::Consultation => "consultations",
        }
    }

    /// URL segment and wire value (`opportunityType` on applications).
    pub fn slug(&self) -> &'static str {
        match self {
            OpportunityKind::Offre => "offre",
            OpportunityKind::Bourse => "bourse",
            OpportunityKind::Financement => "financement",
            OpportunityKind::Consultation => "consultation",
        }
    }

    pub fn from_slug(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "offre" | "offer" | "offers" => Some(OpportunityKind::Offre),
            "bourse" | "scholarship" | "scholarships" => Some(OpportunityKind::Bourse),
            "financement" | "financements" => Some(OpportunityKind::Financement),
            "consultation" | "consultations" => Some(OpportunityKind::Consultation),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OpportunityKind::Offre => "Offre d'emploi",
            OpportunityKind::Bourse => "Bourse",
            OpportunityKind::Financement => "Financement",
            OpportunityKind::Consultation => "Consultation",
        }
    }

    pub fn plural_label(&self) -> &'static str {
        match self {
            OpportunityKind::Offre => "Offres d'emploi",
            OpportunityKind::Bourse => "Bourses",
            OpportunityKind::Financement => "Financements",
            OpportunityKind::Consultation => "Consultations",
        }
    }
}

impl fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// A record type stored in one of the opportunity collections.
pub trait Listing: Serialize + DeserializeOwned + Clone + PartialEq + 'static {
    const KIND: OpportunityKind;

    fn id(&self) -> &RecordId;
    fn title(&self) -> &str;
    /// Publisher shown next to the title: company, organisation or client.
    fn organization(&self) -> &str;
    /// Sector-like field used by the category filter.
    fn category(&self) -> &str;
    fn description(&self) -> &str;
    fn deadline(&self) -> Option<&str>;
    fn is_active(&self) -> bool;
    fn set_active(&mut self, active: bool);
    fn recruiter_id(&self) -> Option<&RecordId>;
    /// Formatted amount, salary or budget, when the record has one.
    fn amount_label(&self) -> Option<String>;
    fn created_at(&self) -> Option<&str>;
    /// Kind-specific facts shown on the detail page, as (label, value).
    fn details(&self) -> Vec<(&'static str, String)>;

    /// Kind-independent view used by lists, cards and dashboards.
    fn summary(&self) -> ListingSummary {
        ListingSummary {
            id: self.id().clone(),
            kind: Self::KIND,
            title: self.title().to_string(),
            organization: self.organization().to_string(),
            category: self.category().to_string(),
            description: self.description().to_string(),
            deadline: self.deadline().map(str::to_string),
            amount_label: self.amount_label(),
            is_active: self.is_active(),
            created_at: self.created_at().map(str::to_string),
            details: self
                .details()
                .into_iter()
                .map(|(label, value)| (label.to_string(), value))
                .collect(),
        }
    }
}

/// The fields every opportunity kind shares, detached from its record type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingSummary {
    pub id: RecordId,
    pub kind: OpportunityKind,
    pub title: String,
    pub organization: String,
    pub category: String,
    pub description: String,
    pub deadline: Option<String>,
    pub amount_label: Option<String>,
    pub is_active: bool,
    pub created_at: Option<String>,
    /// (label, value) rows for the detail page.
    pub details: Vec<(String, String)>,
}

fn default_true() -> bool {
    true
}

/// Job offer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub sector: String,
    #[serde(default)]
    pub contract_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<RecordId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Scholarship.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Scholarship {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<RecordId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Funding opportunity (grant, loan, investment programme).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Financement {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default)]
    pub sector: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<RecordId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Consultation request addressed to service providers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    #[serde(default)]
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub client: String,
    #[serde(default)]
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recruiter_id: Option<RecordId>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Format an amount in FCFA with thin grouping, e.g. `1 500 000 FCFA`.
pub fn format_amount(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        grouped.insert(0, '-');
    }
    format!("{grouped} FCFA")
}

fn non_blank(pairs: &[(&'static str, String)]) -> Vec<(&'static str, String)> {
    pairs
        .iter()
        .filter(|(_, v)| !v.trim().is_empty())
        .cloned()
        .collect()
}

/// Whether a `YYYY-MM-DD` (or RFC 3339) deadline lies strictly before `today`.
///
/// Unparseable deadlines are treated as open.
pub fn deadline_passed(deadline: &str, today: NaiveDate) -> bool {
    let date = NaiveDate::parse_from_str(deadline.get(..10).unwrap_or(deadline), "%Y-%m-%d");
    match date {
        Ok(d) => d < today,
        Err(_) => false,
    }
}

impl Listing for Offer {
    const KIND: OpportunityKind = OpportunityKind::Offre;

    fn id(&self) -> &RecordId {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn organization(&self) -> &str {
        &self.company
    }
    fn category(&self) -> &str {
        &self.sector
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
    fn recruiter_id(&self) -> Option<&RecordId> {
        self.recruiter_id.as_ref()
    }
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
    fn amount_label(&self) -> Option<String> {
        self.salary.clone().filter(|s| !s.trim().is_empty())
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        non_blank(&[
            ("Lieu", self.location.clone()),
            ("Secteur", self.sector.clone()),
            ("Contrat", self.contract_type.clone()),
        ])
    }
}

impl Listing for Scholarship {
    const KIND: OpportunityKind = OpportunityKind::Bourse;

    fn id(&self) -> &RecordId {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn organization(&self) -> &str {
        &self.organization
    }
    fn category(&self) -> &str {
        &self.level
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
    fn recruiter_id(&self) -> Option<&RecordId> {
        self.recruiter_id.as_ref()
    }
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
    fn amount_label(&self) -> Option<String> {
        self.amount.map(format_amount)
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        non_blank(&[
            ("Pays", self.country.clone()),
            ("Niveau", self.level.clone()),
        ])
    }
}

impl Listing for Financement {
    const KIND: OpportunityKind = OpportunityKind::Financement;

    fn id(&self) -> &RecordId {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn organization(&self) -> &str {
        &self.organization
    }
    fn category(&self) -> &str {
        &self.sector
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
    fn recruiter_id(&self) -> Option<&RecordId> {
        self.recruiter_id.as_ref()
    }
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
    fn amount_label(&self) -> Option<String> {
        self.amount.map(format_amount)
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        non_blank(&[
            ("Secteur", self.sector.clone()),
            ("Éligibilité", self.eligibility.clone().unwrap_or_default()),
        ])
    }
}

impl Listing for Consultation {
    const KIND: OpportunityKind = OpportunityKind::Consultation;

    fn id(&self) -> &RecordId {
        &self.id
    }
    fn title(&self) -> &str {
        &self.title
    }
    fn organization(&self) -> &str {
        &self.client
    }
    fn category(&self) -> &str {
        &self.domain
    }
    fn description(&self) -> &str {
        &self.description
    }
    fn deadline(&self) -> Option<&str> {
        self.deadline.as_deref()
    }
    fn is_active(&self) -> bool {
        self.is_active
    }
    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
    fn recruiter_id(&self) -> Option<&RecordId> {
        self.recruiter_id.as_ref()
    }
    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }
    fn amount_label(&self) -> Option<String> {
        self.budget.map(format_amount)
    }
    fn details(&self) -> Vec<(&'static str, String)> {
        non_blank(&[
            ("Domaine", self.domain.clone()),
            ("Durée", self.duration.clone().unwrap_or_default()),
        ])
    }
}
