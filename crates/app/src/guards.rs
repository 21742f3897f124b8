//! Route guards.
//!
//! The decision is a pure function of the auth state and the current path;
//! the components only apply it. Their one side effect is a `replace`
//! navigation, so a guarded page never shows up in history.

use dioxus::prelude::*;
use shared_types::{Role, Session};
use shared_ui::SkeletonList;

use crate::auth::use_auth;
use crate::routes::Route;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The session is still being restored.
    Loading,
    /// No session: go to the login page, then come back to `redirect`.
    RedirectToLogin { redirect: String },
    /// Logged in with another role: go to that role's home.
    RedirectHome(Role),
    Render,
}

/// Decide what a protected route does.
///
/// `current` is the path (with query) being visited.
pub fn protected_outcome(
    loading: bool,
    session: Option<&Session>,
    required_role: Option<&Role>,
    current: &str,
) -> GuardOutcome {
    if loading {
        return GuardOutcome::Loading;
    }
    let Some(session) = session else {
        return GuardOutcome::RedirectToLogin {
            redirect: current.to_string(),
        };
    };
    let role = session.role();
    match required_role {
        Some(required) if *required != role => GuardOutcome::RedirectHome(role),
        _ => GuardOutcome::Render,
    }
}

/// Decide what a login/register page does: logged-in users are sent home.
pub fn public_only_outcome(loading: bool, session: Option<&Session>) -> GuardOutcome {
    if loading {
        return GuardOutcome::Loading;
    }
    match session {
        Some(session) => GuardOutcome::RedirectHome(session.role()),
        None => GuardOutcome::Render,
    }
}

pub fn home_route(role: &Role) -> Route {
    match role {
        Role::Candidat => Route::CandidatDashboard {},
        Role::Recruteur => Route::RecruteurDashboard {},
        Role::Prestataire => Route::PrestataireDashboard {},
        Role::Unrecognized(_) => Route::Home {},
    }
}

/// Keep `redirect` only when it is a path on this site.
pub fn safe_redirect(redirect: Option<&str>) -> Option<String> {
    let path = redirect?.trim();
    let local = path.starts_with('/') && !path.starts_with("//") && !path.contains('\\');
    local.then(|| path.to_string())
}

/// Where to go once logged in: the requested page if it is local and
/// routable, the role's home otherwise.
pub fn post_login_target(redirect: Option<&str>, role: &Role) -> Route {
    safe_redirect(redirect)
        .and_then(|path| path.parse::<Route>().ok())
        .filter(|route| !matches!(route, Route::Login { .. } | Route::Register {}))
        .unwrap_or_else(|| home_route(role))
}

#[component]
fn GuardLoading() -> Element {
    rsx! {
        div { class: "guard-loading", "aria-busy": "true",
            SkeletonList { count: 2 }
        }
    }
}

/// Render `children` only for a logged-in user, of `required_role` if set.
#[component]
pub fn ProtectedRoute(required_role: Option<Role>, children: Element) -> Element {
    let auth = use_auth();
    let current = use_route::<Route>().to_string();
    let session = auth.session.read().clone();

    match protected_outcome(
        auth.is_loading(),
        session.as_ref(),
        required_role.as_ref(),
        &current,
    ) {
        GuardOutcome::Render => children,
        GuardOutcome::Loading => rsx! { GuardLoading {} },
        GuardOutcome::RedirectToLogin { redirect } => {
            tracing::debug!(%redirect, "not logged in, redirecting to login");
            navigator().replace(Route::Login {
                redirect: Some(redirect),
            });
            rsx! { GuardLoading {} }
        }
        GuardOutcome::RedirectHome(role) => {
            tracing::debug!(%role, path = %current, "role mismatch, redirecting home");
            navigator().replace(home_route(&role));
            rsx! { GuardLoading {} }
        }
    }
}

/// Render `children` only for visitors; logged-in users go home, or to the
/// page the login form was asked to return to.
#[component]
pub fn PublicOnlyRoute(children: Element) -> Element {
    let auth = use_auth();
    let route = use_route::<Route>();
    let session = auth.session.read().clone();

    match public_only_outcome(auth.is_loading(), session.as_ref()) {
        GuardOutcome::RedirectHome(role) => {
            let redirect = match &route {
                Route::Login { redirect } => redirect.clone(),
                _ => None,
            };
            navigator().replace(post_login_target(redirect.as_deref(), &role));
            rsx! { GuardLoading {} }
        }
        GuardOutcome::Loading => rsx! { GuardLoading {} },
        _ => children,
    }
}

#[component]
pub fn CandidatArea() -> Element {
    rsx! {
        ProtectedRoute { required_role: Role::Candidat, Outlet::<Route> {} }
    }
}

#[component]
pub fn RecruteurArea() -> Element {
    rsx! {
        ProtectedRoute { required_role: Role::Recruteur, Outlet::<Route> {} }
    }
}

#[component]
pub fn PrestataireArea() -> Element {
    rsx! {
        ProtectedRoute { required_role: Role::Prestataire, Outlet::<Route> {} }
    }
}

/// Any logged-in user, whatever the role.
#[component]
pub fn SignedInArea() -> Element {
    rsx! {
        ProtectedRoute { Outlet::<Route> {} }
    }
}

#[component]
pub fn PublicOnlyArea() -> Element {
    rsx! {
        PublicOnlyRoute { Outlet::<Route> {} }
    }
}
