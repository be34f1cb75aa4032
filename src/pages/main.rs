use dioxus::prelude::*;

use crate::api::{format_datetime, Excursion, ExcursionsResponse, NewsItem, NewsResponse};
use crate::components::event_card::EventCard;
use crate::route::Route;
use crate::BACKEND_URL;

pub fn MainPage() -> Element {
    let mut excursions_signal = use_signal(|| Option::<Vec<Excursion>>::None);
    let mut excursions_error_signal = use_signal(|| Option::<String>::None);
    let mut news_signal = use_signal(|| Vec::<NewsItem>::new());

    use_effect(move || {
        spawn(async move {
            let task: Result<ExcursionsResponse, anyhow::Error> = async move {
                let response = reqwest::Client::new()
                    .get(format!("{}/api/user/excursions", BACKEND_URL))
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<ExcursionsResponse>().await?)
            }
            .await;

            match task {
                Ok(res) => excursions_signal.set(Some(res.excursions)),
                Err(e) => excursions_error_signal.set(Some(e.to_string())),
            }
        });
    });

    use_effect(move || {
        spawn(async move {
            let task: Result<NewsResponse, anyhow::Error> = async move {
                let response = reqwest::Client::new()
                    .get(format!("{}/api/user/news", BACKEND_URL))
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<NewsResponse>().await?)
            }
            .await;

            // The teaser is optional, the page works without it.
            if let Ok(res) = task {
                news_signal.set(res.news);
            }
        });
    });

    let events = match (excursions_signal(), excursions_error_signal()) {
        (Some(excursions), _) => rsx! {
            div {
                class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                for excursion in excursions.into_iter().take(3) {
                    EventCard { excursion }
                }
            }
        },
        (None, Some(error)) => rsx! {
            div {
                class: "p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                "{error}"
            }
        },
        (None, None) => rsx! {
            p { class: "text-gray-500", "Загрузка..." }
        },
    };

    let news = news_signal();

    rsx! {
        section {
            class: "py-12 text-center",
            h1 {
                class: "text-4xl font-bold tracking-tight text-gray-900",
                "Креативное пространство УКНО"
            }
            p {
                class: "mt-4 text-lg text-gray-600 max-w-2xl mx-auto",
                "Экскурсии, мастер-классы и события от резидентов Ульяновска"
            }
            Link {
                class: "inline-block mt-6 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-6 py-3",
                to: Route::EventsFeed,
                "Смотреть афишу"
            }
        }
        section {
            class: "py-8",
            div {
                class: "flex items-center justify-between mb-4",
                h2 {
                    class: "text-2xl font-bold text-gray-900",
                    "Ближайшие события"
                }
                Link {
                    class: "text-sm text-blue-700 hover:underline",
                    to: Route::EventsFeed,
                    "Вся афиша"
                }
            }
            {events}
        }
        if !news.is_empty() {
            section {
                class: "py-8",
                div {
                    class: "flex items-center justify-between mb-4",
                    h2 {
                        class: "text-2xl font-bold text-gray-900",
                        "Новости"
                    }
                    Link {
                        class: "text-sm text-blue-700 hover:underline",
                        to: Route::News,
                        "Все новости"
                    }
                }
                ul {
                    class: "space-y-3",
                    for item in news.into_iter().take(3) {
                        li {
                            class: "p-4 bg-white border border-gray-200 rounded-lg",
                            p {
                                class: "font-medium text-gray-900",
                                "{item.title}"
                            }
                            if let Some(created_at) = item.created_at.as_deref() {
                                p {
                                    class: "mt-1 text-sm text-gray-500",
                                    {format_datetime(created_at)}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
