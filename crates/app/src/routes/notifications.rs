use chrono::Utc;
use dioxus::prelude::*;
use shared_types::{unread_total, AppError, Notification, RecordId};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, EmptyState, PageActions,
    PageHeader, PageSubtitle, PageTitle, SkeletonList,
};

use crate::auth::use_auth;
use crate::components::ErrorBanner;
use crate::format_helpers::format_relative_fr;
use crate::notify::{NotificationFeed, NotificationTick};
use crate::{use_flags, use_services};

enum FeedAction {
    Read(RecordId),
    ReadAll(Vec<Notification>),
    Delete(RecordId),
}

/// Notifications of the logged-in user, whatever the role.
#[component]
pub fn NotificationsPage() -> Element {
    let auth = use_auth();
    let services = use_services();
    let flags = use_flags();
    let mut tick: NotificationTick = use_context();
    let mut reload = use_signal(|| 0u32);
    let mut action_error = use_signal(|| Option::<AppError>::None);

    let feed = move || {
        auth.session()
            .map(|session| NotificationFeed::new(&services, &flags, &session))
            .ok_or_else(|| AppError::unauthorized("Authentification requise"))
    };

    let feed_for_list = feed.clone();
    let notifications = use_resource(move || {
        let _ = reload();
        let feed = feed_for_list();
        async move { feed?.list().await }
    });

    let run = use_callback(move |action: FeedAction| {
        let feed = feed();
        spawn(async move {
            let result = match feed {
                Ok(feed) => match action {
                    FeedAction::Read(id) => feed.mark_read(&id).await,
                    FeedAction::ReadAll(current) => feed.mark_all_read(&current).await,
                    FeedAction::Delete(id) => feed.delete(&id).await,
                },
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => action_error.set(None),
                Err(e) => {
                    tracing::error!(error = %e, "notification update failed");
                    action_error.set(Some(e));
                }
            }
            *reload.write() += 1;
            tick.bump();
        });
    });

    let now = Utc::now();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./notifications.css") }

        match &*notifications.read() {
            Some(Ok(list)) => {
                let unread = unread_total(list);
                let current = list.clone();
                rsx! {
                    PageHeader {
                        div {
                            PageTitle { "Notifications" }
                            PageSubtitle { "{unread} non lue(s)" }
                        }
                        PageActions {
                            Button {
                                variant: ButtonVariant::Outline,
                                disabled: unread == 0,
                                onclick: move |_| run.call(FeedAction::ReadAll(current.clone())),
                                "Tout marquer comme lu"
                            }
                        }
                    }
                    if let Some(err) = action_error() {
                        ErrorBanner { error: err }
                    }
                    if list.is_empty() {
                        EmptyState { title: "Aucune notification" }
                    }
                    for n in list.iter().cloned() {
                        Card {
                            key: "{n.id}",
                            class: if n.read { "notification" } else { "notification unread" },
                            CardContent {
                                div { class: "notification-head",
                                    strong { "{n.title}" }
                                    if !n.read {
                                        Badge { variant: BadgeVariant::Primary, "Nouveau" }
                                    }
                                    if let Some(created) = &n.created_at {
                                        span { class: "notification-time", "{format_relative_fr(created, now)}" }
                                    }
                                }
                                if !n.message.is_empty() {
                                    p { "{n.message}" }
                                }
                                div { class: "notification-actions",
                                    if let Some(link) = n.link.clone() {
                                        Link { to: link, "Voir" }
                                    }
                                    if !n.read {
                                        Button {
                                            variant: ButtonVariant::Ghost,
                                            onclick: {
                                                let id = n.id.clone();
                                                move |_| run.call(FeedAction::Read(id.clone()))
                                            },
                                            "Marquer comme lu"
                                        }
                                    }
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let id = n.id.clone();
                                            move |_| run.call(FeedAction::Delete(id.clone()))
                                        },
                                        "Supprimer"
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Some(Err(e)) => rsx! {
                PageHeader { PageTitle { "Notifications" } }
                ErrorBanner { error: e.clone() }
            },
            None => rsx! { SkeletonList {} },
        }
    }
}
