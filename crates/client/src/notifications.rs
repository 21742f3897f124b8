use shared_types::{
    AppError, Notification, NotificationPreferences, PaginatedResponse, RecordId, UnreadCount,
};

use crate::http::{record_path, ApiClient, QueryPairs};

const BASE: &str = "/api/notifications";

/// Bearer-authenticated notification endpoints.
///
/// Built from a token-less client, every call fails with `Unauthorized`
/// without touching the network.
#[derive(Debug, Clone)]
pub struct NotificationApi {
    api: ApiClient,
}

impl NotificationApi {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Shorthand for `NotificationApi::new(api.with_token(token))`.
    pub fn for_token(api: &ApiClient, token: &str) -> Self {
        Self::new(api.with_token(token))
    }

    fn authed(&self) -> Result<&ApiClient, AppError> {
        if self.api.has_token() {
            Ok(&self.api)
        } else {
            Err(AppError::unauthorized("Authentification requise"))
        }
    }

    /// One page of the user's notifications, newest first.
    pub async fn list(
        &self,
        page: u32,
        limit: u32,
        unread_only: bool,
    ) -> Result<PaginatedResponse<Notification>, AppError> {
        let mut query: QueryPairs = vec![("page", page.to_string()), ("limit", limit.to_string())];
        if unread_only {
            query.push(("unread", "true".to_string()));
        }
        self.authed()?.get_json(BASE, &query).await
    }

    pub async fn unread_count(&self) -> Result<u64, AppError> {
        let body: UnreadCount = self
            .authed()?
            .get_json(&format!("{BASE}/unread-count"), &QueryPairs::new())
            .await?;
        Ok(body.count)
    }

    pub async fn mark_as_read(&self, id: &RecordId) -> Result<(), AppError> {
        self.authed()?
            .patch_empty(&format!("{}/read", record_path(BASE, id)))
            .await
    }

    pub async fn mark_all_as_read(&self) -> Result<(), AppError> {
        self.authed()?.patch_empty(&format!("{BASE}/read-all")).await
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), AppError> {
        self.authed()?.delete(&record_path(BASE, id)).await
    }

    pub async fn preferences(&self) -> Result<NotificationPreferences, AppError> {
        self.authed()?
            .get_json(&format!("{BASE}/preferences"), &QueryPairs::new())
            .await
    }

    pub async fn update_preferences(
        &self,
        prefs: &NotificationPreferences,
    ) -> Result<NotificationPreferences, AppError> {
        self.authed()?
            .put_json(&format!("{BASE}/preferences"), prefs)
            .await
    }
}
