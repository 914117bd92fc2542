use dioxus::prelude::*;

use crate::components::icons::{MusicIcon, UserIcon};
use crate::routes::Route;
use crate::services::roster::{self, DjRecord};
use crate::utils::page_state::PageState;

/// Roster index: one card per DJ, linking to the profile page.
#[component]
pub fn Home() -> Element {
    let mut state = use_signal(|| PageState::<Vec<DjRecord>>::Loading);

    use_effect(move || {
        state.set(PageState::Loading);

        spawn(async move {
            match roster::fetch_roster().await {
                Ok(records) => state.set(PageState::Ready(records)),
                Err(err) => {
                    log::error!("Error loading roster: {}", err);
                    state.set(PageState::Failed(err));
                }
            }
        });
    });

    let page = state.read().clone();

    let body = match page {
        PageState::Loading => rsx! {
            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                for _ in 0..4 {
                    div { class: "aspect-square bg-gray-700 rounded-lg animate-pulse" }
                }
            }
        },
        PageState::Ready(records) if records.is_empty() => rsx! {
            p { class: "text-gray-400", "No DJs on the roster yet." }
        },
        PageState::Ready(records) => rsx! {
            div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                for dj in records.iter() {
                    DjCard { key: "{dj.id}", dj: dj.clone() }
                }
            }
        },
        PageState::NotFound | PageState::Failed(_) => rsx! {
            p { class: "error text-red-400", "Error loading the roster. Please try again later." }
        },
    };

    rsx! {
        div { class: "container mx-auto px-4 py-8 space-y-6",
            h1 { class: "text-2xl font-bold", "Resident DJs" }
            {body}
        }
    }
}

#[component]
fn DjCard(dj: DjRecord) -> Element {
    let name = if dj.name.trim().is_empty() {
        "—".to_string()
    } else {
        dj.name.clone()
    };
    let mix_count = dj.mixes.len();

    rsx! {
        Link {
            to: Route::DjProfile { id: dj.id.clone() },
            class: "group block rounded-lg border border-gray-700 hover:border-gray-500 overflow-hidden transition-colors",

            div { class: "aspect-square bg-gray-800 overflow-hidden",
                if let Some(artwork) = dj.artwork_url.clone() {
                    img {
                        src: "{artwork}",
                        alt: "{name}",
                        loading: "lazy",
                        class: "w-full h-full object-cover group-hover:scale-105 transition-transform",
                    }
                } else {
                    div { class: "w-full h-full flex items-center justify-center",
                        UserIcon { class: "w-12 h-12 text-gray-500" }
                    }
                }
            }

            div { class: "p-3 space-y-1",
                h3 { class: "font-semibold truncate", "{name}" }
                p { class: "text-sm text-gray-400 flex items-center gap-1",
                    MusicIcon { class: "w-3 h-3" }
                    "{mix_count} "
                    if mix_count == 1 { "mix" } else { "mixes" }
                }
            }
        }
    }
}
