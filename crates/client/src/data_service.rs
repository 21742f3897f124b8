//! Calls against the JSON-server collections.
//!
//! Unlike a bare `fetch` wrapper, a missing record is `Err(NotFound)` and
//! never an empty value, and every failure carries an [`AppError`].

use serde_json::{json, Value};
use shared_types::{
    validate_listing, AppError, Application, ApplicationDraft, ApplicationStatus, BlogPost,
    Consultation, Financement, Listing, ListingSummary, Notification, Offer, OpportunityKind,
    RecordId, Scholarship, StatusUpdate,
};

use crate::http::{record_path, ApiClient, QueryPairs};

/// Sort direction for `_order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Query of an opportunity collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub recruiter_id: Option<RecordId>,
    pub is_active: Option<bool>,
    /// Substring match on the title, via JSON-server's `title_like`.
    pub title_like: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<SortOrder>,
}

impl ListQuery {
    /// Published records, newest first.
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            sort: Some("createdAt".into()),
            order: Some(SortOrder::Desc),
            ..Default::default()
        }
    }

    pub fn for_recruiter(recruiter_id: RecordId) -> Self {
        Self {
            recruiter_id: Some(recruiter_id),
            sort: Some("createdAt".into()),
            order: Some(SortOrder::Desc),
            ..Default::default()
        }
    }

    pub fn page(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page);
        self.limit = Some(limit);
        self
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(id) = &self.recruiter_id {
            pairs.push(("recruiterId", id.to_string()));
        }
        if let Some(active) = self.is_active {
            pairs.push(("isActive", active.to_string()));
        }
        if let Some(title) = self.title_like.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            pairs.push(("title_like", title.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("_page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("_limit", limit.to_string()));
        }
        if let Some(sort) = &self.sort {
            pairs.push(("_sort", sort.clone()));
            if let Some(order) = self.order {
                pairs.push(("_order", order.as_str().to_string()));
            }
        }
        pairs
    }
}

/// Query of the `/applications` collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationQuery {
    pub user_id: Option<RecordId>,
    /// Any of these opportunities (repeated `opportunityId`).
    pub opportunity_ids: Vec<RecordId>,
    pub opportunity_type: Option<OpportunityKind>,
    pub status: Option<ApplicationStatus>,
}

impl ApplicationQuery {
    pub fn for_user(user_id: RecordId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Default::default()
        }
    }

    pub fn to_pairs(&self) -> QueryPairs {
        let mut pairs = QueryPairs::new();
        if let Some(id) = &self.user_id {
            pairs.push(("userId", id.to_string()));
        }
        for id in &self.opportunity_ids {
            pairs.push(("opportunityId", id.to_string()));
        }
        if let Some(kind) = self.opportunity_type {
            pairs.push(("opportunityType", kind.slug().to_string()));
        }
        if let Some(status) = self.status {
            pairs.push(("status", status.as_str().to_string()));
        }
        pairs.push(("_sort", "createdAt".to_string()));
        pairs.push(("_order", SortOrder::Desc.as_str().to_string()));
        pairs
    }
}

fn summarize<T: Listing>(items: Vec<T>) -> Result<Vec<ListingSummary>, AppError> {
    Ok(items.iter().map(Listing::summary).collect())
}

pub(crate) fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Drop an empty `id` (the server assigns one) and stamp `createdAt`.
fn creation_body<T: Listing>(item: &T) -> Result<Value, AppError> {
    let mut body = serde_json::to_value(item).map_err(|e| AppError::decode(e.to_string()))?;
    if let Some(obj) = body.as_object_mut() {
        if obj.get("id").and_then(Value::as_str) == Some("") {
            obj.remove("id");
        }
        if !obj.contains_key("createdAt") {
            obj.insert("createdAt".to_string(), Value::String(timestamp()));
        }
    }
    Ok(body)
}

/// Data Access Layer over the JSON-server.
#[derive(Debug, Clone)]
pub struct DataService {
    api: ApiClient,
}

impl DataService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // ── Opportunities ──

    pub async fn list<T: Listing>(&self, query: &ListQuery) -> Result<Vec<T>, AppError> {
        self.api
            .get_json(T::KIND.collection(), &query.to_pairs())
            .await
    }

    pub async fn get<T: Listing>(&self, id: &RecordId) -> Result<T, AppError> {
        self.api
            .get_json(&record_path(T::KIND.collection(), id), &QueryPairs::new())
            .await
    }

    /// Create a record after checking its required fields.
    pub async fn create<T: Listing>(&self, item: &T) -> Result<T, AppError> {
        validate_listing(item)?;
        let body = creation_body(item)?;
        self.api.post_json(T::KIND.collection(), &body).await
    }

    /// Replace a record (PUT) after checking its required fields.
    pub async fn update<T: Listing>(&self, id: &RecordId, item: &T) -> Result<T, AppError> {
        validate_listing(item)?;
        self.api
            .put_json(&record_path(T::KIND.collection(), id), item)
            .await
    }

    /// Publish or unpublish a record.
    pub async fn set_active<T: Listing>(&self, id: &RecordId, active: bool) -> Result<T, AppError> {
        self.api
            .patch_json(
                &record_path(T::KIND.collection(), id),
                &json!({ "isActive": active }),
            )
            .await
    }

    pub async fn delete<T: Listing>(&self, id: &RecordId) -> Result<(), AppError> {
        self.api
            .delete(&record_path(T::KIND.collection(), id))
            .await
    }

    pub async fn recruiter_opportunities<T: Listing>(
        &self,
        recruiter_id: &RecordId,
    ) -> Result<Vec<T>, AppError> {
        self.list(&ListQuery::for_recruiter(recruiter_id.clone())).await
    }

    /// `list` for a kind only known at runtime (route segment, form select).
    pub async fn list_summaries(
        &self,
        kind: OpportunityKind,
        query: &ListQuery,
    ) -> Result<Vec<ListingSummary>, AppError> {
        match kind {
            OpportunityKind::Offre => summarize(self.list::<Offer>(query).await?),
            OpportunityKind::Bourse => summarize(self.list::<Scholarship>(query).await?),
            OpportunityKind::Financement => summarize(self.list::<Financement>(query).await?),
            OpportunityKind::Consultation => summarize(self.list::<Consultation>(query).await?),
        }
    }

    pub async fn get_summary(
        &self,
        kind: OpportunityKind,
        id: &RecordId,
    ) -> Result<ListingSummary, AppError> {
        Ok(match kind {
            OpportunityKind::Offre => self.get::<Offer>(id).await?.summary(),
            OpportunityKind::Bourse => self.get::<Scholarship>(id).await?.summary(),
            OpportunityKind::Financement => self.get::<Financement>(id).await?.summary(),
            OpportunityKind::Consultation => self.get::<Consultation>(id).await?.summary(),
        })
    }

    pub async fn set_active_by_kind(
        &self,
        kind: OpportunityKind,
        id: &RecordId,
        active: bool,
    ) -> Result<ListingSummary, AppError> {
        Ok(match kind {
            OpportunityKind::Offre => self.set_active::<Offer>(id, active).await?.summary(),
            OpportunityKind::Bourse => self.set_active::<Scholarship>(id, active).await?.summary(),
            OpportunityKind::Financement => {
                self.set_active::<Financement>(id, active).await?.summary()
            }
            OpportunityKind::Consultation => {
                self.set_active::<Consultation>(id, active).await?.summary()
            }
        })
    }

    pub async fn delete_by_kind(&self, kind: OpportunityKind, id: &RecordId) -> Result<(), AppError> {
        match kind {
            OpportunityKind::Offre => self.delete::<Offer>(id).await,
            OpportunityKind::Bourse => self.delete::<Scholarship>(id).await,
            OpportunityKind::Financement => self.delete::<Financement>(id).await,
            OpportunityKind::Consultation => self.delete::<Consultation>(id).await,
        }
    }

    pub async fn list_offers(&self, query: &ListQuery) -> Result<Vec<Offer>, AppError> {
        self.list(query).await
    }

    pub async fn list_scholarships(&self, query: &ListQuery) -> Result<Vec<Scholarship>, AppError> {
        self.list(query).await
    }

    pub async fn list_financements(&self, query: &ListQuery) -> Result<Vec<Financement>, AppError> {
        self.list(query).await
    }

    pub async fn list_consultations(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<Consultation>, AppError> {
        self.list(query).await
    }

    // ── Applications ──

    pub async fn list_applications(
        &self,
        query: &ApplicationQuery,
    ) -> Result<Vec<Application>, AppError> {
        self.api.get_json("applications", &query.to_pairs()).await
    }

    pub async fn get_application(&self, id: &RecordId) -> Result<Application, AppError> {
        self.api
            .get_json(&record_path("applications", id), &QueryPairs::new())
            .await
    }

    /// Validate the draft and post it. An invalid draft never reaches the
    /// network.
    pub async fn submit_application(
        &self,
        draft: &ApplicationDraft,
        user_id: &RecordId,
    ) -> Result<Application, AppError> {
        let body = draft.clone().into_request(user_id.clone(), timestamp())?;
        let created: Application = self.api.post_json("applications", &body).await?;
        tracing::info!(
            application = %created.id,
            opportunity = %created.opportunity_id,
            kind = %created.opportunity_type,
            "application submitted"
        );
        Ok(created)
    }

    pub async fn update_application_status(
        &self,
        id: &RecordId,
        status: ApplicationStatus,
    ) -> Result<Application, AppError> {
        let body = StatusUpdate {
            status,
            updated_at: timestamp(),
        };
        self.api
            .patch_json(&record_path("applications", id), &body)
            .await
    }

    pub async fn withdraw_application(&self, id: &RecordId) -> Result<(), AppError> {
        self.api.delete(&record_path("applications", id)).await
    }

    /// Applications received on any opportunity published by `recruiter_id`.
    pub async fn applications_for_recruiter(
        &self,
        recruiter_id: &RecordId,
    ) -> Result<Vec<Application>, AppError> {
        let mut ids_by_kind = vec![
            (
                OpportunityKind::Offre,
                self.opportunity_ids::<Offer>(recruiter_id).await?,
            ),
            (
                OpportunityKind::Bourse,
                self.opportunity_ids::<Scholarship>(recruiter_id).await?,
            ),
            (
                OpportunityKind::Financement,
                self.opportunity_ids::<Financement>(recruiter_id).await?,
            ),
            (
                OpportunityKind::Consultation,
                self.opportunity_ids::<Consultation>(recruiter_id).await?,
            ),
        ];
        ids_by_kind.retain(|(_, ids)| !ids.is_empty());

        let mut all = Vec::new();
        for (kind, ids) in ids_by_kind {
            let query = ApplicationQuery {
                opportunity_ids: ids,
                opportunity_type: Some(kind),
                ..Default::default()
            };
            all.extend(self.list_applications(&query).await?);
        }
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn opportunity_ids<T: Listing>(
        &self,
        recruiter_id: &RecordId,
    ) -> Result<Vec<RecordId>, AppError> {
        Ok(self
            .recruiter_opportunities::<T>(recruiter_id)
            .await?
            .iter()
            .map(|o| o.id().clone())
            .collect())
    }

    // ── Notifications (JSON-server collection) ──

    pub async fn list_user_notifications(
        &self,
        user_id: &RecordId,
    ) -> Result<Vec<Notification>, AppError> {
        let query = vec![
            ("userId", user_id.to_string()),
            ("_sort", "createdAt".to_string()),
            ("_order", "desc".to_string()),
        ];
        self.api.get_json("notifications", &query).await
    }

    pub async fn mark_notification_read(&self, id: &RecordId) -> Result<Notification, AppError> {
        self.api
            .patch_json(&record_path("notifications", id), &json!({ "read": true }))
            .await
    }

    pub async fn delete_notification(&self, id: &RecordId) -> Result<(), AppError> {
        self.api.delete(&record_path("notifications", id)).await
    }

    // ── Blog ──

    pub async fn list_posts(&self, title_like: Option<&str>) -> Result<Vec<BlogPost>, AppError> {
        let mut query = vec![
            ("_sort", "createdAt".to_string()),
            ("_order", "desc".to_string()),
        ];
        if let Some(term) = title_like.map(str::trim).filter(|t| !t.is_empty()) {
            query.push(("title_like", term.to_string()));
        }
        self.api.get_json("blog", &query).await
    }

    pub async fn get_post(&self, id: &RecordId) -> Result<BlogPost, AppError> {
        self.api
            .get_json(&record_path("blog", id), &QueryPairs::new())
            .await
    }
}
