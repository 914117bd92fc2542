use dioxus::prelude::*;

use crate::components::icons::{ExternalLinkIcon, TrashIcon};
use crate::models::MixEntry;
use crate::utils::{browser, embed};

/// One archived mix: an embedded player when the URL transforms into a
/// well-formed embed URL, an inline error note otherwise. The original URL
/// stays reachable through the listen control.
#[component]
pub fn MixCard(mix: MixEntry, on_remove: EventHandler<String>) -> Element {
    let embed_src = embed::checked_embed_url(&mix.url);
    let is_playable = embed_src.is_some();
    let listen_url = mix.url.clone();
    let remove_url = mix.url.clone();

    rsx! {
        div { class: "mix-show rounded-lg border border-gray-700 p-3 space-y-2",

            if let Some(src) = embed_src {
                iframe {
                    src: "{src}",
                    "loading": "lazy",
                    title: "Mix player",
                    class: "mix-player w-full",
                }
            } else {
                p { class: "error text-red-400", "Invalid mix URL." }
            }

            div { class: "mix-actions flex items-center gap-2",
                if is_playable {
                    button {
                        class: "inline-flex items-center gap-1 px-3 py-1 rounded border border-gray-600 text-sm text-gray-300 hover:text-white transition-colors",
                        onclick: move |_| browser::open_in_new_tab(&listen_url),
                        ExternalLinkIcon { class: "w-3 h-3" }
                        "Listen on Mixcloud"
                    }
                }
                button {
                    class: "inline-flex items-center gap-1 px-3 py-1 rounded border border-gray-600 text-sm text-gray-400 hover:text-red-400 transition-colors",
                    onclick: move |_| on_remove.call(remove_url.clone()),
                    TrashIcon { class: "w-3 h-3" }
                    "Remove"
                }
            }
        }
    }
}
