use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdInfo, LdX};
use dioxus_free_icons::Icon;

/// Tone of a banner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BannerVariant {
    #[default]
    Info,
    Success,
    Error,
}

impl BannerVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BannerVariant::Info => "info",
            BannerVariant::Success => "success",
            BannerVariant::Error => "error",
        }
    }

    /// ARIA role: errors interrupt, the rest are polite.
    pub fn aria_role(&self) -> &'static str {
        match self {
            BannerVariant::Error => "alert",
            _ => "status",
        }
    }
}

/// Inline message block for load failures and form outcomes.
#[component]
pub fn Banner(
    #[props(default)] variant: BannerVariant,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "banner", None, false),
        Attribute::new("data-style", variant.class(), None, false),
        Attribute::new("role", variant.aria_role(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..merged,
            span { class: "banner-icon",
                {match variant {
                    BannerVariant::Info => rsx! { Icon::<LdInfo> { icon: LdInfo, width: 18, height: 18 } },
                    BannerVariant::Success => rsx! { Icon::<LdCheck> { icon: LdCheck, width: 18, height: 18 } },
                    BannerVariant::Error => rsx! { Icon::<LdX> { icon: LdX, width: 18, height: 18 } },
                }}
            }
            div { class: "banner-body", {children} }
        }
    }
}
