use dioxus::prelude::*;
use shared_types::Application;
use shared_ui::{Button, ButtonVariant};

use super::StatusBadge;
use crate::format_helpers::format_date_fr;
use crate::routes::Route;

/// Table of the current user's applications.
///
/// Withdrawal is offered only while the application is still open.
#[component]
pub fn ApplicationTable(
    applications: Vec<Application>,
    #[props(default)] on_withdraw: Option<EventHandler<Application>>,
) -> Element {
    rsx! {
        table { class: "table",
            thead {
                tr {
                    th { "Opportunité" }
                    th { "Type" }
                    th { "Envoyée le" }
                    th { "Statut" }
                    th {}
                }
            }
            tbody {
                for app in applications {
                    tr { key: "{app.id}",
                        td {
                            Link {
                                to: Route::OpportunityDetail {
                                    kind: app.opportunity_type.slug().to_string(),
                                    id: app.opportunity_id.to_string(),
                                },
                                {app.opportunity_title.clone().unwrap_or_else(|| format!("#{}", app.opportunity_id))}
                            }
                        }
                        td { "{app.opportunity_type.label()}" }
                        td { {app.created_at.as_deref().map(format_date_fr).unwrap_or_default()} }
                        td { StatusBadge { status: app.status } }
                        td {
                            if let Some(handler) = on_withdraw {
                                if !app.status.is_final() {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        onclick: {
                                            let app = app.clone();
                                            move |_| handler.call(app.clone())
                                        },
                                        "Retirer"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
