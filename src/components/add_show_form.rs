use dioxus::prelude::*;

use crate::components::icons::PlusIcon;

/// Controlled input + button for adding a show to the archive. The parent
/// owns the secret prompt and the persistence call; this only collects a
/// non-empty URL.
#[component]
pub fn AddShowForm(on_add: EventHandler<String>) -> Element {
    let mut url_input = use_signal(String::new);

    rsx! {
        div { class: "add-show flex items-center gap-2",
            input {
                id: "add-show-input",
                r#type: "url",
                placeholder: "https://www.mixcloud.com/…",
                class: "flex-1 rounded border border-gray-600 bg-transparent px-3 py-2 text-sm",
                value: "{url_input}",
                oninput: move |evt| url_input.set(evt.value()),
            }
            button {
                id: "add-show-btn",
                class: "inline-flex items-center gap-1 px-3 py-2 rounded border border-gray-600 text-sm text-gray-300 hover:text-white transition-colors",
                onclick: move |_| {
                    let url = url_input.read().trim().to_string();
                    if url.is_empty() {
                        return;
                    }
                    on_add.call(url);
                    url_input.set(String::new());
                },
                PlusIcon { class: "w-4 h-4" }
                "Add show"
            }
        }
    }
}
