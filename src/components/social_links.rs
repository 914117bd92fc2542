use dioxus::prelude::*;

use crate::components::icons::ExternalLinkIcon;
use crate::models::SocialLink;

/// Social link list for a profile. Links open in a new browsing context
/// with `noopener` so the target never reaches back to this page.
#[component]
pub fn SocialLinks(socials: Vec<SocialLink>) -> Element {
    rsx! {
        ul {
            id: "social-links",
            class: "social-links flex flex-wrap items-center gap-3",

            if socials.is_empty() {
                li { class: "text-gray-400", "No socials available." }
            } else {
                for link in socials.iter() {
                    li {
                        key: "{link.url}",
                        a {
                            href: "{link.url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            class: "inline-flex items-center gap-1 text-gray-300 hover:text-white transition-colors",
                            ExternalLinkIcon { class: "w-3 h-3" }
                            "{link.name}"
                        }
                    }
                }
            }
        }
    }
}
