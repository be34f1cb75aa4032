use dioxus::prelude::*;

use crate::api::{format_datetime, NewsItem, NewsResponse};
use crate::BACKEND_URL;

pub fn News() -> Element {
    let mut news_signal = use_signal(|| Option::<Vec<NewsItem>>::None);
    let mut error_signal = use_signal(|| Option::<String>::None);

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

            match task {
                Ok(res) => news_signal.set(Some(res.news)),
                Err(e) => error_signal.set(Some(e.to_string())),
            }
        });
    });

    let body = match (news_signal(), error_signal()) {
        (Some(news), _) => {
            if news.is_empty() {
                rsx! {
                    p { class: "text-gray-500", "Новостей пока нет" }
                }
            } else {
                rsx! {
                    div {
                        class: "space-y-6",
                        for item in news {
                            article {
                                class: "bg-white border border-gray-200 rounded-lg overflow-hidden",
                                if let Some(image) = item.images.first() {
                                    img {
                                        class: "w-full h-64 object-cover",
                                        src: "{image}",
                                        alt: "{item.title}"
                                    }
                                }
                                div {
                                    class: "p-5",
                                    h2 {
                                        class: "text-xl font-bold text-gray-900",
                                        "{item.title}"
                                    }
                                    if let Some(created_at) = item.created_at.as_deref() {
                                        p {
                                            class: "mt-1 text-sm text-gray-500",
                                            {format_datetime(created_at)}
                                        }
                                    }
                                    p {
                                        class: "mt-3 text-gray-700 whitespace-pre-line",
                                        "{item.content}"
                                    }
                                    if let Some(photo_author) = item.photo_author.as_deref() {
                                        p {
                                            class: "mt-3 text-xs text-gray-400",
                                            "Фото: {photo_author}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
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

    rsx! {
        h1 {
            class: "text-3xl font-bold text-gray-900 mb-6",
            "Новости"
        }
        {body}
    }
}
