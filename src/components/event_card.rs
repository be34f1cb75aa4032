use dioxus::prelude::*;

use crate::api::{format_datetime, Excursion};
use crate::route::Route;

#[component]
pub fn EventCard(excursion: Excursion) -> Element {
    let photo = excursion.photos.first().map(|x| x.photo_url.clone());

    let cost_label = match excursion.sessions.iter().map(|x| x.cost).reduce(f64::min) {
        Some(c) if c > 0.0 => format!("от {c:.0} ₽"),
        Some(_) => "Бесплатно".to_string(),
        None => "Сеансов нет".to_string(),
    };

    let next_session = excursion
        .sessions
        .iter()
        .map(|x| x.start_datetime.as_str())
        .min()
        .map(format_datetime);

    let media = match photo {
        Some(photo) => rsx! {
            img {
                src: "{photo}",
                alt: "{excursion.title}",
                class: "w-full h-48 object-cover"
            }
        },
        None => rsx! {
            div {
                class: "w-full h-48 bg-gray-100 flex items-center justify-center text-gray-400",
                "Нет фото"
            }
        },
    };

    rsx! {
        div {
            class: "bg-white border border-gray-200 rounded-lg shadow-sm overflow-hidden flex flex-col",
            {media}
            div {
                class: "p-4 flex flex-col flex-1 gap-2",
                h5 {
                    class: "text-lg font-bold tracking-tight text-gray-900",
                    "{excursion.title}"
                }
                div {
                    class: "flex flex-wrap gap-2 text-xs",
                    if let Some(category) = excursion.category.as_deref() {
                        span {
                            class: "bg-blue-100 text-blue-800 font-medium px-2.5 py-0.5 rounded",
                            "{category}"
                        }
                    }
                    if let Some(age) = excursion.age_category.as_deref() {
                        span {
                            class: "bg-gray-100 text-gray-800 font-medium px-2.5 py-0.5 rounded",
                            "{age}"
                        }
                    }
                }
                if let Some(place) = excursion.place.as_deref() {
                    p {
                        class: "text-sm text-gray-600",
                        "{place}"
                    }
                }
                div {
                    class: "mt-auto flex items-center justify-between text-sm",
                    if let Some(next) = next_session {
                        span {
                            class: "text-gray-600",
                            "{next}"
                        }
                    }
                    span {
                        class: "font-semibold text-gray-900",
                        "{cost_label}"
                    }
                }
                Link {
                    to: Route::EventPage { id: excursion.event_id },
                    class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center",
                    "Подробнее"
                }
            }
        }
    }
}
