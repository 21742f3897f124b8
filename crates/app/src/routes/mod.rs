pub mod applications;
pub mod apply;
pub mod blog;
pub mod candidat;
pub mod home;
pub mod login;
pub mod not_found;
pub mod notifications;
pub mod opportunities;
pub mod prestataire;
pub mod recruteur;
pub mod register;

use dioxus::prelude::*;
use shared_types::FeatureFlags;

use crate::guards::{CandidatArea, PrestataireArea, PublicOnlyArea, RecruteurArea, SignedInArea};
use crate::header::DynamicHeader;

use apply::Apply;
use blog::{BlogList, BlogPostDetail};
use candidat::{CandidatApplications, CandidatDashboard, CandidatNotifications};
use home::Home;
use login::Login;
use not_found::NotFound;
use opportunities::{OpportunityDetail, OpportunityList};
use prestataire::{PrestataireApplications, PrestataireDashboard, PrestataireNotifications};
use recruteur::{
    ManageOpportunities, OpportunityCreate, OpportunityEdit, ReceivedApplications,
    RecruteurDashboard, RecruteurNotifications,
};
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/opportunites/:kind")]
        OpportunityList { kind: String },
        #[route("/opportunites/:kind/:id")]
        OpportunityDetail { kind: String, id: String },
        #[route("/blog")]
        BlogList {},
        #[route("/blog/:id")]
        BlogPostDetail { id: String },

        #[layout(PublicOnlyArea)]
            #[route("/login?:redirect")]
            Login { redirect: Option<String> },
            #[route("/register")]
            Register {},
        #[end_layout]

        #[layout(SignedInArea)]
            #[route("/postuler/:kind/:id")]
            Apply { kind: String, id: String },
        #[end_layout]

        // ── Candidat ──
        #[layout(CandidatArea)]
            #[route("/candidat")]
            CandidatDashboard {},
            #[route("/candidat/candidatures")]
            CandidatApplications {},
            #[route("/candidat/notifications")]
            CandidatNotifications {},
        #[end_layout]

        // ── Recruteur ──
        #[layout(RecruteurArea)]
            #[route("/recruteur")]
            RecruteurDashboard {},
            #[route("/recruteur/opportunites/:kind")]
            ManageOpportunities { kind: String },
            #[route("/recruteur/opportunites/:kind/nouveau")]
            OpportunityCreate { kind: String },
            #[route("/recruteur/opportunites/:kind/:id/modifier")]
            OpportunityEdit { kind: String, id: String },
            #[route("/recruteur/candidatures")]
            ReceivedApplications {},
            #[route("/recruteur/notifications")]
            RecruteurNotifications {},
        #[end_layout]

        // ── Prestataire ──
        #[layout(PrestataireArea)]
            #[route("/prestataire")]
            PrestataireDashboard {},
            #[route("/prestataire/candidatures")]
            PrestataireApplications {},
            #[route("/prestataire/notifications")]
            PrestataireNotifications {},
        #[end_layout]

        #[route("/:..route")]
        NotFound { route: Vec<String> },
}

/// Footer navigation. The blog link follows its feature flag.
fn footer_links(flags: &FeatureFlags) -> Vec<(Route, &'static str)> {
    let mut links = vec![(Route::Home {}, "Accueil")];
    if flags.blog {
        links.push((Route::BlogList {}, "Blog"));
    }
    links
}

/// Site layout: role-dependent header, routed page, footer.
#[component]
fn AppLayout() -> Element {
    let flags = crate::use_flags();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "app-shell",
            DynamicHeader {}
            main { class: "page-content",
                Outlet::<Route> {}
            }
            footer { class: "site-footer",
                p { "Opportunités · Emplois, bourses, financements et consultations" }
                nav { class: "site-footer-links",
                    for (to, label) in footer_links(&flags) {
                        Link { key: "{label}", to, "{label}" }
                    }
                }
            }
        }
    }
}
