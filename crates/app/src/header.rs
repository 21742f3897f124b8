//! Role-dependent site header.
//!
//! `resolve_header` picks the variant; `DynamicHeader` renders it.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBell, LdBriefcase, LdLayoutDashboard};
use dioxus_free_icons::Icon;
use shared_types::{OpportunityKind, Role, Session};
use shared_ui::{Badge, BadgeVariant, Button, ButtonVariant, Navbar, NavbarActions, NavbarBrand, NavbarLinks, Skeleton};

use crate::auth::{use_auth, use_auth_service};
use crate::notify::use_unread_count;
use crate::routes::Route;

/// Which header to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderVariant {
    Loading,
    Public,
    Candidat,
    Recruteur,
    Prestataire,
}

/// Choose the header for the current auth state.
///
/// A role the app does not know falls back to the public header. That is
/// logged, never shown to the user.
pub fn resolve_header(loading: bool, session: Option<&Session>) -> HeaderVariant {
    if loading {
        return HeaderVariant::Loading;
    }
    let Some(session) = session else {
        return HeaderVariant::Public;
    };
    match session.role() {
        Role::Candidat => HeaderVariant::Candidat,
        Role::Recruteur => HeaderVariant::Recruteur,
        Role::Prestataire => HeaderVariant::Prestataire,
        Role::Unrecognized(raw) => {
            tracing::warn!(role = %raw, user = %session.user.id, "unrecognized role, using public header");
            HeaderVariant::Public
        }
    }
}

#[component]
pub fn DynamicHeader() -> Element {
    let auth = use_auth();
    let session = auth.session.read().clone();
    let variant = resolve_header(auth.is_loading(), session.as_ref());

    match variant {
        HeaderVariant::Loading => rsx! { HeaderSkeleton {} },
        HeaderVariant::Public => rsx! { PublicHeader {} },
        HeaderVariant::Candidat => rsx! { CandidatHeader {} },
        HeaderVariant::Recruteur => rsx! { RecruteurHeader {} },
        HeaderVariant::Prestataire => rsx! { PrestataireHeader {} },
    }
}

#[component]
fn Brand() -> Element {
    rsx! {
        NavbarBrand {
            Link { to: Route::Home {}, class: "brand-link",
                Icon::<LdBriefcase> { icon: LdBriefcase, width: 20, height: 20 }
                span { "Opportunités" }
            }
        }
    }
}

#[component]
fn HeaderSkeleton() -> Element {
    rsx! {
        Navbar {
            Brand {}
            NavbarLinks {
                Skeleton { class: "header-skeleton-link" }
                Skeleton { class: "header-skeleton-link" }
                Skeleton { class: "header-skeleton-link" }
            }
            NavbarActions {
                Skeleton { class: "header-skeleton-avatar" }
            }
        }
    }
}

#[component]
fn BrowseLinks() -> Element {
    rsx! {
        for kind in OpportunityKind::ALL {
            Link {
                key: "{kind.slug()}",
                to: Route::OpportunityList { kind: kind.slug().to_string() },
                active_class: "active",
                "{kind.plural_label()}"
            }
        }
    }
}

#[component]
fn PublicHeader() -> Element {
    let flags = crate::use_flags();

    rsx! {
        Navbar {
            Brand {}
            NavbarLinks {
                Link { to: Route::Home {}, active_class: "active", "Accueil" }
                BrowseLinks {}
                if flags.blog {
                    Link { to: Route::BlogList {}, active_class: "active", "Blog" }
                }
            }
            NavbarActions {
                Link { to: Route::Login { redirect: None }, class: "link-button link-button-ghost", "Connexion" }
                Link { to: Route::Register {}, class: "link-button", "Inscription" }
            }
        }
    }
}

#[component]
fn CandidatHeader() -> Element {
    rsx! {
        Navbar {
            Brand {}
            NavbarLinks {
                Link { to: Route::CandidatDashboard {}, active_class: "active",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Tableau de bord"
                }
                BrowseLinks {}
                Link { to: Route::CandidatApplications {}, active_class: "active", "Mes candidatures" }
            }
            NavbarActions {
                NotificationBell { to: Route::CandidatNotifications {} }
                UserMenu { role: Role::Candidat }
            }
        }
    }
}

#[component]
fn RecruteurHeader() -> Element {
    rsx! {
        Navbar {
            Brand {}
            NavbarLinks {
                Link { to: Route::RecruteurDashboard {}, active_class: "active",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Tableau de bord"
                }
                Link {
                    to: Route::ManageOpportunities { kind: OpportunityKind::Offre.slug().to_string() },
                    active_class: "active",
                    "Mes publications"
                }
                Link { to: Route::ReceivedApplications {}, active_class: "active", "Candidatures reçues" }
            }
            NavbarActions {
                NotificationBell { to: Route::RecruteurNotifications {} }
                UserMenu { role: Role::Recruteur }
            }
        }
    }
}

#[component]
fn PrestataireHeader() -> Element {
    rsx! {
        Navbar {
            Brand {}
            NavbarLinks {
                Link { to: Route::PrestataireDashboard {}, active_class: "active",
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Tableau de bord"
                }
                Link {
                    to: Route::OpportunityList { kind: OpportunityKind::Consultation.slug().to_string() },
                    active_class: "active",
                    "Consultations"
                }
                Link { to: Route::PrestataireApplications {}, active_class: "active", "Mes candidatures" }
            }
            NavbarActions {
                NotificationBell { to: Route::PrestataireNotifications {} }
                UserMenu { role: Role::Prestataire }
            }
        }
    }
}

/// Bell linking to the notifications page, with the unread count.
#[component]
fn NotificationBell(to: Route) -> Element {
    let unread = use_unread_count();

    rsx! {
        Link { to: to, class: "notification-bell",
            Icon::<LdBell> { icon: LdBell, width: 20, height: 20 }
            span { class: "sr-only", "Notifications" }
            if unread > 0 {
                Badge { variant: BadgeVariant::Destructive, class: "notification-count",
                    if unread > 99 { "99+" } else { "{unread}" }
                }
            }
        }
    }
}

#[component]
fn UserMenu(role: Role) -> Element {
    let mut auth = use_auth();
    let service = use_auth_service();
    let Some(user) = auth.user() else {
        return rsx! {};
    };

    rsx! {
        div { class: "user-menu",
            span { class: "user-avatar", "{user.initials()}" }
            div { class: "user-menu-text",
                span { class: "user-name", "{user.display_name()}" }
                span { class: "user-role", "{role.label()}" }
            }
            Button {
                variant: ButtonVariant::Ghost,
                onclick: move |_| {
                    auth.logout(&service);
                    navigator().replace(Route::Home {});
                },
                "Déconnexion"
            }
        }
    }
}
