use dioxus::prelude::*;
use shared_types::{AppError, ApplicationStatus};
use shared_ui::{Badge, BadgeVariant, Banner, BannerVariant};

/// Badge tone for an application status.
pub fn status_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::EnAttente => BadgeVariant::Secondary,
        ApplicationStatus::Examinee => BadgeVariant::Outline,
        ApplicationStatus::Entretien => BadgeVariant::Warning,
        ApplicationStatus::Acceptee => BadgeVariant::Success,
        ApplicationStatus::Refusee => BadgeVariant::Destructive,
    }
}

#[component]
pub fn StatusBadge(status: ApplicationStatus) -> Element {
    rsx! {
        Badge { variant: status_variant(status), "{status.label()}" }
    }
}

/// Error banner showing the user-facing message of `error`.
#[component]
pub fn ErrorBanner(error: AppError) -> Element {
    rsx! {
        Banner { variant: BannerVariant::Error, "{error.friendly_message()}" }
    }
}
