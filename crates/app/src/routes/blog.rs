use dioxus::prelude::*;
use shared_types::RecordId;
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, EmptyState,
    Input, PageHeader, PageSubtitle, PageTitle, SkeletonList,
};

use crate::components::ErrorBanner;
use crate::format_helpers::format_date_fr;
use crate::routes::Route;
use crate::{use_flags, use_services};

const TEASER_CHARS: usize = 200;

#[component]
pub fn BlogList() -> Element {
    let flags = use_flags();
    let services = use_services();
    let mut search = use_signal(String::new);

    let posts = use_resource(move || {
        let data = services.data.clone();
        let term = search();
        async move { data.list_posts(Some(&term)).await }
    });

    if !flags.blog {
        return rsx! { EmptyState { title: "Le blog n'est pas disponible" } };
    }

    rsx! {
        PageHeader {
            div {
                PageTitle { "Blog" }
                PageSubtitle { "Conseils carrière, financement et entrepreneuriat." }
            }
        }
        div { class: "filters",
            Input {
                label: "Rechercher un article",
                value: search(),
                on_input: move |evt: FormEvent| search.set(evt.value()),
            }
        }
        match &*posts.read() {
            Some(Ok(list)) if list.is_empty() => rsx! { EmptyState { title: "Aucun article trouvé" } },
            Some(Ok(list)) => rsx! {
                div { class: "grid",
                    for post in list.iter() {
                        Link { key: "{post.id}", to: Route::BlogPostDetail { id: post.id.to_string() },
                            Card {
                                CardHeader {
                                    if let Some(category) = &post.category {
                                        Badge { variant: BadgeVariant::Secondary, "{category}" }
                                    }
                                    CardTitle { "{post.title}" }
                                    if let Some(created) = &post.created_at {
                                        CardDescription { "{format_date_fr(created)}" }
                                    }
                                }
                                CardContent {
                                    p { "{post.summary(TEASER_CHARS)}" }
                                }
                            }
                        }
                    }
                }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList {} },
        }
    }
}

#[component]
pub fn BlogPostDetail(id: String) -> Element {
    rsx! { PostView { key: "{id}", id: RecordId::new(id.clone()) } }
}

#[component]
fn PostView(id: RecordId) -> Element {
    let services = use_services();

    let post = use_resource(move || {
        let data = services.data.clone();
        let id = id.clone();
        async move { data.get_post(&id).await }
    });

    rsx! {
        match &*post.read() {
            Some(Ok(post)) => rsx! {
                article { class: "blog-post",
                    PageHeader {
                        div {
                            PageTitle { "{post.title}" }
                            PageSubtitle {
                                {post.author.clone().unwrap_or_default()}
                                if let Some(created) = &post.created_at {
                                    " · {format_date_fr(created)}"
                                }
                            }
                        }
                    }
                    for (i, paragraph) in post.content.split("\n\n").enumerate() {
                        p { key: "{i}", "{paragraph}" }
                    }
                    Link { to: Route::BlogList {}, "← Tous les articles" }
                }
            },
            Some(Err(e)) if e.is_not_found() => rsx! {
                EmptyState {
                    title: "Article introuvable",
                    Link { to: Route::BlogList {}, class: "link-button", "Retour au blog" }
                }
            },
            Some(Err(e)) => rsx! { ErrorBanner { error: e.clone() } },
            None => rsx! { SkeletonList { count: 1 } },
        }
    }
}
