use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{SectionCardVm, map_section_cards};

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let cards = map_section_cards(&ctx.catalog().sections());

    use_effect(move || {
        if let Some(slug) = ctx.take_initial_section() {
            let _ = navigator.replace(Route::Quiz { slug });
        }
    });

    rsx! {
        div { class: "page",
            h2 { "Test your knowledge" }
            p { "Each section ends with a short multiple-choice quiz." }
            if cards.is_empty() {
                p { "No quizzes available." }
            } else {
                ul { class: "section-list",
                    for card in cards {
                        SectionCard { key: "{card.slug}", card }
                    }
                }
            }
        }
    }
}

#[component]
fn SectionCard(card: SectionCardVm) -> Element {
    rsx! {
        li { class: "section-card",
            Link { class: "section-card__link", to: Route::Quiz { slug: card.slug.clone() },
                span { class: "section-card__name", "{card.name} Quiz" }
                span { class: "section-card__count", "{card.count_label}" }
            }
        }
    }
}
