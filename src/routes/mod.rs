use dioxus::prelude::*;

pub mod home;
pub mod profile;

use home::Home;
use profile::DjProfile;

use crate::components::icons::RadioIcon;

/// App routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},

        #[route("/dj?:id")]
        DjProfile { id: String },

        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "min-h-screen bg-background",
            header { class: "site-header border-b border-gray-700",
                div { class: "container mx-auto px-4 py-3",
                    Link {
                        to: Route::Home {},
                        class: "inline-flex items-center gap-2 font-bold hover:opacity-80 transition",
                        RadioIcon { class: "w-6 h-6" }
                        "djbooth"
                    }
                }
            }
            main {
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    log::warn!("Unknown route: /{}", segments.join("/"));

    rsx! {
        div { class: "container mx-auto px-4 py-12 text-center",
            p { class: "error text-gray-300", "Page not found." }
        }
    }
}
