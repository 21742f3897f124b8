use dioxus::prelude::*;
use shared_types::{deadline_passed, ListingSummary};
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

use crate::format_helpers::{deadline_label, today, truncate};
use crate::routes::Route;

/// Characters of description shown on a card.
const TEASER_CHARS: usize = 160;

/// Card linking to an opportunity's detail page. `children` go in the footer,
/// after the link.
#[component]
pub fn ListingCard(summary: ListingSummary, #[props(default)] children: Element) -> Element {
    let today = today();
    let closed = summary
        .deadline
        .as_deref()
        .is_some_and(|d| deadline_passed(d, today));
    let detail = Route::OpportunityDetail {
        kind: summary.kind.slug().to_string(),
        id: summary.id.to_string(),
    };

    rsx! {
        Card { class: "listing-card", muted: !summary.is_active,
            CardHeader {
                div { class: "meta-row",
                    Badge { variant: BadgeVariant::Outline, "{summary.kind.label()}" }
                    if !summary.category.is_empty() {
                        Badge { variant: BadgeVariant::Secondary, "{summary.category}" }
                    }
                    if !summary.is_active {
                        Badge { variant: BadgeVariant::Warning, "Inactive" }
                    }
                }
                CardTitle { "{summary.title}" }
                if !summary.organization.is_empty() {
                    CardDescription { "{summary.organization}" }
                }
            }
            CardContent {
                p { "{truncate(&summary.description, TEASER_CHARS)}" }
                div { class: "meta-row",
                    if let Some(amount) = &summary.amount_label {
                        span { "{amount}" }
                    }
                    span { class: if closed { "deadline closed" } else { "deadline" },
                        "{deadline_label(summary.deadline.as_deref(), today)}"
                    }
                }
            }
            CardFooter {
                Link { to: detail, class: "link-button link-button-ghost", "Voir le détail" }
                {children}
            }
        }
    }
}
