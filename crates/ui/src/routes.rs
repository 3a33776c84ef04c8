use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::context::AppContext;
use crate::views::{HomeView, QuizPage};
use crate::vm::map_section_cards;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/quiz/:slug", QuizPage)] Quiz { slug: String },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let cards = map_section_cards(&ctx.catalog().sections());

    rsx! {
        nav { class: "sidebar",
            h1 { "Quizzes" }
            ul {
                li { Link { to: Route::Home {}, "All sections" } }
                for card in cards {
                    li { key: "{card.slug}",
                        Link { to: Route::Quiz { slug: card.slug.clone() }, "{card.name}" }
                    }
                }
            }
        }
    }
}
