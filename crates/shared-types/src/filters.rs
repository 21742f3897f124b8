//! Client-side filtering of already-fetched lists.
//!
//! Every text comparison is a case-insensitive substring or equality test;
//! a blank filter field matches everything.

use crate::{
    Application, ApplicationStatus, Consultation, Financement, Listing, ListingSummary, Offer,
    Scholarship,
};

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn eq_ci(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// What `OpportunityFilters` looks at.
pub trait Searchable {
    fn search_title(&self) -> &str;
    fn search_organization(&self) -> &str;
    fn search_category(&self) -> &str;
    fn search_active(&self) -> bool;
}

macro_rules! searchable_listing {
    ($($ty:ty),*) => {
        $(impl Searchable for $ty {
            fn search_title(&self) -> &str {
                self.title()
            }
            fn search_organization(&self) -> &str {
                self.organization()
            }
            fn search_category(&self) -> &str {
                self.category()
            }
            fn search_active(&self) -> bool {
                self.is_active()
            }
        })*
    };
}

searchable_listing!(Offer, Scholarship, Financement, Consultation);

impl Searchable for ListingSummary {
    fn search_title(&self) -> &str {
        &self.title
    }
    fn search_organization(&self) -> &str {
        &self.organization
    }
    fn search_category(&self) -> &str {
        &self.category
    }
    fn search_active(&self) -> bool {
        self.is_active
    }
}

/// Filters of the job offers page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferFilters {
    /// Matched against title or company.
    pub search: String,
    pub sector: String,
    pub location: String,
    pub contract_type: String,
}

impl OfferFilters {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: term.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        blank(&self.search) && blank(&self.sector) && blank(&self.location) && blank(&self.contract_type)
    }

    pub fn matches(&self, offer: &Offer) -> bool {
        let term = self.search.trim();
        if !term.is_empty() && !contains_ci(&offer.title, term) && !contains_ci(&offer.company, term) {
            return false;
        }
        if !blank(&self.sector) && !eq_ci(&offer.sector, &self.sector) {
            return false;
        }
        if !blank(&self.location) && !contains_ci(&offer.location, self.location.trim()) {
            return false;
        }
        if !blank(&self.contract_type) && !eq_ci(&offer.contract_type, &self.contract_type) {
            return false;
        }
        true
    }

    pub fn apply(&self, offers: &[Offer]) -> Vec<Offer> {
        offers.iter().filter(|o| self.matches(o)).cloned().collect()
    }
}

/// Filters shared by the scholarship, funding and consultation pages.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OpportunityFilters {
    /// Matched against title or publisher.
    pub search: String,
    /// Compared with the record's category (level, sector or domain).
    pub category: String,
    pub active_only: bool,
}

impl OpportunityFilters {
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        if self.active_only && !item.search_active() {
            return false;
        }
        let term = self.search.trim();
        if !term.is_empty()
            && !contains_ci(item.search_title(), term)
            && !contains_ci(item.search_organization(), term)
        {
            return false;
        }
        if !blank(&self.category) && !eq_ci(item.search_category(), &self.category) {
            return false;
        }
        true
    }

    pub fn apply<T: Searchable + Clone>(&self, items: &[T]) -> Vec<T> {
        items.iter().filter(|i| self.matches(*i)).cloned().collect()
    }
}

/// Distinct non-empty categories, sorted, for the filter drop-down.
pub fn distinct_categories<T: Searchable>(items: &[T]) -> Vec<String> {
    let mut out: Vec<String> = items
        .iter()
        .map(|i| i.search_category().trim().to_string())
        .filter(|c| !c.is_empty())
        .collect();
    out.sort_by_key(|c| c.to_lowercase());
    out.dedup_by(|a, b| eq_ci(a, b));
    out
}

/// Filters of the application lists (candidate and recruiter side).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationFilters {
    pub status: Option<ApplicationStatus>,
    /// Matched against opportunity title or applicant name.
    pub search: String,
}

impl ApplicationFilters {
    pub fn matches(&self, app: &Application) -> bool {
        if let Some(status) = self.status {
            if app.status != status {
                return false;
            }
        }
        let term = self.search.trim();
        if term.is_empty() {
            return true;
        }
        app.opportunity_title
            .as_deref()
            .map(|t| contains_ci(t, term))
            .unwrap_or(false)
            || app
                .applicant_name
                .as_deref()
                .map(|n| contains_ci(n, term))
                .unwrap_or(false)
    }

    pub fn apply(&self, apps: &[Application]) -> Vec<Application> {
        apps.iter().filter(|a| self.matches(a)).cloned().collect()
    }
}

/// Number of applications in each status, in `ApplicationStatus::ALL` order.
pub fn count_by_status(apps: &[Application]) -> Vec<(ApplicationStatus, usize)> {
    ApplicationStatus::ALL
        .iter()
        .map(|s| (*s, apps.iter().filter(|a| a.status == *s).count()))
        .collect()
}
