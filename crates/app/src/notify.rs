use client::{DataService, NotificationApi};
use dioxus::prelude::*;
use shared_types::{unread_total, AppError, FeatureFlags, Notification, RecordId, Session};

use crate::auth::use_auth;
use crate::{use_flags, use_services, Services};

/// Page size requested from the notification API.
const PAGE_LIMIT: u32 = 50;

/// Bumped whenever a page changes read state, so the bell re-counts.
#[derive(Clone, Copy, PartialEq)]
pub struct NotificationTick(pub Signal<u32>);

impl NotificationTick {
    pub fn bump(&mut self) {
        *self.0.write() += 1;
    }
}

enum Source {
    Api(NotificationApi),
    Collection { data: DataService, user_id: RecordId },
}

/// Notifications of the logged-in user.
///
/// Served by the authenticated API when `notifications_api` is on, by the
/// JSON-server `notifications` collection otherwise.
pub struct NotificationFeed {
    source: Source,
}

impl NotificationFeed {
    pub fn new(services: &Services, flags: &FeatureFlags, session: &Session) -> Self {
        let source = if flags.notifications_api {
            Source::Api(services.notifications(&session.token))
        } else {
            Source::Collection {
                data: services.data.clone(),
                user_id: session.user.id.clone(),
            }
        };
        Self { source }
    }

    pub fn uses_api(&self) -> bool {
        matches!(self.source, Source::Api(_))
    }

    pub async fn list(&self) -> Result<Vec<Notification>, AppError> {
        match &self.source {
            Source::Api(api) => Ok(api.list(1, PAGE_LIMIT, false).await?.data),
            Source::Collection { data, user_id } => data.list_user_notifications(user_id).await,
        }
    }

    pub async fn unread_count(&self) -> Result<u64, AppError> {
        match &self.source {
            Source::Api(api) => api.unread_count().await,
            Source::Collection { data, user_id } => {
                let all = data.list_user_notifications(user_id).await?;
                Ok(unread_total(&all) as u64)
            }
        }
    }

    pub async fn mark_read(&self, id: &RecordId) -> Result<(), AppError> {
        match &self.source {
            Source::Api(api) => api.mark_as_read(id).await,
            Source::Collection { data, .. } => data.mark_notification_read(id).await.map(|_| ()),
        }
    }

    /// Mark everything read. The collection has no bulk endpoint, so each
    /// unread entry of `current` is patched in turn.
    pub async fn mark_all_read(&self, current: &[Notification]) -> Result<(), AppError> {
        match &self.source {
            Source::Api(api) => api.mark_all_as_read().await,
            Source::Collection { data, .. } => {
                for n in current.iter().filter(|n| !n.read) {
                    data.mark_notification_read(&n.id).await?;
                }
                Ok(())
            }
        }
    }

    pub async fn delete(&self, id: &RecordId) -> Result<(), AppError> {
        match &self.source {
            Source::Api(api) => api.delete(id).await,
            Source::Collection { data, .. } => data.delete_notification(id).await,
        }
    }
}

/// Unread notifications of the logged-in user, 0 when logged out or when the
/// count cannot be loaded.
pub fn use_unread_count() -> u64 {
    let auth = use_auth();
    let services = use_services();
    let flags = use_flags();
    let tick: NotificationTick = use_context();

    let count = use_resource(move || {
        let services = services.clone();
        let flags = flags.clone();
        let session = auth.session.read().clone();
        let _ = (tick.0)();
        async move {
            let session = session?;
            match NotificationFeed::new(&services, &flags, &session)
                .unread_count()
                .await
            {
                Ok(n) => Some(n),
                Err(e) => {
                    tracing::error!(error = %e, "could not load unread notifications");
                    None
                }
            }
        }
    });

    let value = *count.read();
    value.flatten().unwrap_or(0)
}
