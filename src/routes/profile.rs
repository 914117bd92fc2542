use dioxus::prelude::*;

use crate::components::icons::{ArrowLeftIcon, CalendarIcon, MusicIcon, UserIcon};
use crate::components::{AddShowForm, MixCard, SocialLinks};
use crate::models::{EventWindow, MixEntry, ProfileRecord};
use crate::routes::Route;
use crate::services::{self, archive, schedule, DataSource};
use crate::utils::bio::{self, BioContent};
use crate::utils::page_state::PageState;
use crate::utils::{browser, calendar, time};

/// Placeholder artwork when the record carries none.
const FALLBACK_ARTWORK_URL: &str = "https://i.imgur.com/qWOfxOS.png";

/// The profile page. Resolves the record for the `id` query value, renders
/// the fixed profile slots, and wires the calendar and mix management
/// affordances. A blank identifier is terminal: no network call is made.
#[component]
pub fn DjProfile(id: String) -> Element {
    let mut state = use_signal(|| PageState::<ProfileRecord>::Loading);
    let mut mixes = use_signal(Vec::<MixEntry>::new);
    let mut next_event = use_signal(|| None::<EventWindow>);
    let mut current_id = use_signal(String::new);

    use_effect(use_reactive!(|id| {
        let dj_id = id.clone();
        current_id.set(dj_id.clone());
        state.set(PageState::Loading);
        next_event.set(None);
        mixes.set(Vec::new());

        if dj_id.trim().is_empty() {
            log::warn!("No \"?id=\" supplied in the URL");
            state.set(PageState::NotFound);
            return;
        }

        spawn(async move {
            match services::load_profile(&dj_id).await {
                Ok(Some(record)) => {
                    next_event.set(record.next_event);
                    mixes.set(record.mixes.clone());

                    // Only the artist API relies on a separate schedule
                    // endpoint; the roster carries nextEvent inline.
                    if services::DATA_SOURCE == DataSource::ArtistApi
                        && record.next_event.is_none()
                    {
                        match schedule::fetch_next_window(&dj_id).await {
                            Ok(window) => next_event.set(window),
                            Err(err) => log::warn!("Schedule lookup failed: {}", err),
                        }
                    }

                    // The archive list supersedes the record's own mixes
                    // when the collaborator is deployed.
                    match archive::fetch_mixes(&dj_id).await {
                        Ok(list) => mixes.set(list),
                        Err(err) => {
                            log::warn!("Mix archive unavailable, keeping record mixes: {}", err)
                        }
                    }

                    state.set(PageState::Ready(record));
                }
                Ok(None) => {
                    log::warn!("No DJ with id {:?}", dj_id);
                    state.set(PageState::NotFound);
                }
                Err(err) => {
                    log::error!("Error loading DJ data: {}", err);
                    state.set(PageState::Failed(err));
                }
            }
        });
    }));

    let add_show = use_callback(move |mix_url: String| {
        let dj_id = current_id();
        let Some(secret) = browser::prompt("Enter the shared secret to add this show:") else {
            log::info!("Add show aborted at the prompt");
            return;
        };

        spawn(async move {
            match archive::add_mix(&dj_id, &mix_url, &secret).await {
                Ok(()) => match archive::fetch_mixes(&dj_id).await {
                    Ok(list) => mixes.set(list),
                    Err(err) => log::warn!("Mix list reload failed: {}", err),
                },
                Err(err) => {
                    log::error!("Failed to add show: {}", err);
                    browser::alert("Could not add the show. Please try again.");
                }
            }
        });
    });

    let remove_show = use_callback(move |mix_url: String| {
        let dj_id = current_id();
        let Some(secret) = browser::prompt("Enter the shared secret to remove this show:") else {
            log::info!("Remove show aborted at the prompt");
            return;
        };

        spawn(async move {
            match archive::remove_mix(&dj_id, &mix_url, &secret).await {
                Ok(()) => match archive::fetch_mixes(&dj_id).await {
                    Ok(list) => mixes.set(list),
                    Err(err) => log::warn!("Mix list reload failed: {}", err),
                },
                Err(err) => {
                    log::error!("Failed to remove show: {}", err);
                    browser::alert("Could not remove the show. Please try again.");
                }
            }
        });
    });

    let blank_id = id.trim().is_empty();
    let page = state.read().clone();

    let body = match page {
        PageState::Loading => rsx! {
            ProfileSkeleton {}
        },

        PageState::NotFound => {
            let message = if blank_id {
                "Unknown DJ ID. Please check your link."
            } else {
                "DJ not found. Please check the ID."
            };
            rsx! {
                div { class: "text-center py-12",
                    UserIcon { class: "w-12 h-12 text-gray-400 mx-auto mb-4" }
                    p { class: "error text-gray-300", {message} }
                }
            }
        }

        PageState::Failed(_) => rsx! {
            div { class: "text-center py-12",
                p { class: "error text-red-400", "Error loading DJ profile. Please try again later." }
            }
        },

        PageState::Ready(record) => {
            let display_name = if record.name.trim().is_empty() {
                "—".to_string()
            } else {
                record.name.clone()
            };
            let artwork_url = record
                .artwork_url
                .clone()
                .unwrap_or_else(|| FALLBACK_ARTWORK_URL.to_string());
            let bio_view = render_bio(record.bio.as_deref());
            let event = *next_event.read();
            let mix_list = mixes();

            let calendar_title = format!("{} Live Set", display_name);
            let calendar_details = match record.profile_url.clone().or_else(browser::page_url) {
                Some(url) => format!("Catch {} live: {}", display_name, url),
                None => format!("Catch {} live.", display_name),
            };

            rsx! {
                section { class: "profile-header flex items-start gap-6",
                    img {
                        id: "dj-artwork",
                        src: "{artwork_url}",
                        alt: "{display_name}",
                        class: "w-32 h-32 rounded-lg object-cover flex-shrink-0",
                    }
                    div { class: "flex-1 space-y-3",
                        h1 { id: "dj-name", class: "text-3xl font-bold", "{display_name}" }
                        SocialLinks { socials: record.socials.clone() }

                        div { class: "flex items-center gap-3 flex-wrap",
                            if let Some(window) = event {
                                button {
                                    id: "calendar-btn",
                                    class: "inline-flex items-center gap-2 px-4 py-2 rounded border border-gray-600 hover:border-gray-400 transition-colors",
                                    onclick: move |_| {
                                        let url = calendar::event_url(
                                            &calendar_title,
                                            window,
                                            &calendar_details,
                                        );
                                        browser::open_in_new_tab(&url);
                                    },
                                    CalendarIcon { class: "w-4 h-4" }
                                    "Add to Calendar"
                                }
                                span { class: "text-sm text-gray-400",
                                    "Next: "
                                    {time::format_event_date(window.start)}
                                }
                            } else {
                                button {
                                    id: "calendar-btn",
                                    class: "inline-flex items-center gap-2 px-4 py-2 rounded border border-gray-700 text-gray-500 cursor-not-allowed",
                                    disabled: true,
                                    CalendarIcon { class: "w-4 h-4" }
                                    "Add to Calendar"
                                }
                            }
                        }
                    }
                }

                section { class: "profile-bio",
                    div { id: "dj-bio", class: "dj-bio space-y-2 leading-relaxed",
                        {bio_view}
                    }
                }

                section { class: "profile-mixes space-y-4",
                    h2 { class: "flex items-center gap-2 text-xl font-bold",
                        MusicIcon { class: "w-5 h-5" }
                        "Mixes"
                    }

                    div { id: "mixes-list", class: "space-y-3",
                        if mix_list.is_empty() {
                            p { class: "text-gray-400", "No mixes available." }
                        } else {
                            for mix in mix_list.iter() {
                                MixCard {
                                    key: "{mix.url}",
                                    mix: mix.clone(),
                                    on_remove: remove_show,
                                }
                            }
                        }
                    }

                    AddShowForm { on_add: add_show }
                }
            }
        }
    };

    rsx! {
        div { class: "profile-wrapper container mx-auto px-4 py-8 space-y-6",
            Link {
                to: Route::Home {},
                class: "inline-flex items-center gap-2 text-gray-400 hover:text-white transition-colors",
                ArrowLeftIcon { class: "w-4 h-4" }
                "All residents"
            }
            {body}
        }
    }
}

fn render_bio(source: Option<&str>) -> Element {
    match bio::bio_content(source) {
        BioContent::Markup(html) => rsx! {
            div { dangerous_inner_html: "{html}" }
        },
        BioContent::Paragraphs(paragraphs) => rsx! {
            for paragraph in paragraphs.iter() {
                p { "{paragraph}" }
            }
        },
        BioContent::Missing => rsx! {
            p { class: "text-gray-400", {bio::NO_BIO_PLACEHOLDER} }
        },
    }
}

#[component]
fn ProfileSkeleton() -> Element {
    rsx! {
        div { class: "flex items-start gap-6",
            div { class: "w-32 h-32 bg-gray-700 rounded-lg animate-pulse" }
            div { class: "flex-1 space-y-4",
                div { class: "h-8 bg-gray-700 rounded w-64 animate-pulse" }
                div { class: "h-4 bg-gray-700 rounded w-48 animate-pulse" }
                div { class: "h-16 bg-gray-700 rounded w-full animate-pulse" }
            }
        }
    }
}
