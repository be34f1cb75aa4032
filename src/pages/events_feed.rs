use dioxus::prelude::*;

use crate::api::{CategoryRef, Excursion, ExcursionsResponse};
use crate::components::event_card::EventCard;
use crate::BACKEND_URL;

pub fn EventsFeed() -> Element {
    let mut excursions_signal = use_signal(|| Option::<Vec<Excursion>>::None);
    let mut error_signal = use_signal(|| Option::<String>::None);
    let mut categories_signal = use_signal(|| Vec::<CategoryRef>::new());

    let mut search_signal = use_signal(|| "".to_string());
    let mut category_signal = use_signal(|| "".to_string());
    let mut sort_signal = use_signal(|| "".to_string());
    let mut applied_signal = use_signal(|| ("".to_string(), "".to_string(), "".to_string()));

    use_effect(move || {
        spawn(async move {
            let task: Result<Vec<CategoryRef>, anyhow::Error> = async move {
                let response = reqwest::Client::new()
                    .get(format!("{}/api/references/categories", BACKEND_URL))
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<Vec<CategoryRef>>().await?)
            }
            .await;

            // The feed still renders without the reference list.
            if let Ok(res) = task {
                categories_signal.set(res);
            }
        });
    });

    use_effect(move || {
        // The backend does the filtering, a new query runs on every apply.
        let (title, category, sort) = applied_signal();

        spawn(async move {
            error_signal.set(None);

            let task: Result<ExcursionsResponse, anyhow::Error> = async move {
                let mut params = Vec::new();

                if !title.is_empty() {
                    params.push(("title", title));
                }
                if !category.is_empty() {
                    params.push(("category", category));
                }
                if !sort.is_empty() {
                    params.push(("sort", sort));
                }

                let response = reqwest::Client::new()
                    .get(format!("{}/api/user/excursions", BACKEND_URL))
                    .query(&params)
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<ExcursionsResponse>().await?)
            }
            .await;

            match task {
                Ok(res) => excursions_signal.set(Some(res.excursions)),
                Err(e) => error_signal.set(Some(e.to_string())),
            }
        });
    });

    let search = search_signal();
    let category = category_signal();
    let sort = sort_signal();
    let categories = categories_signal();
    let error = error_signal();

    let body = match excursions_signal() {
        Some(excursions) => {
            if excursions.is_empty() {
                rsx! {
                    p { class: "text-gray-500", "Ничего не найдено" }
                }
            } else {
                rsx! {
                    div {
                        class: "grid grid-cols-1 md:grid-cols-3 gap-4",
                        for excursion in excursions {
                            EventCard { excursion }
                        }
                    }
                }
            }
        }
        None => rsx! {
            p { class: "text-gray-500", "Загрузка..." }
        },
    };

    rsx! {
        h1 {
            class: "text-3xl font-bold text-gray-900 mb-6",
            "Афиша"
        }
        form {
            class: "flex flex-col sm:flex-row gap-3 mb-6",
            onsubmit: move |_| {
                applied_signal.set((search_signal(), category_signal(), sort_signal()));
            },
            input {
                r#type: "text",
                placeholder: "Поиск по названию",
                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 sm:max-w-xs",
                value: "{search}",
                oninput: move |event| search_signal.set(event.value())
            }
            select {
                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 sm:max-w-xs",
                value: "{category}",
                oninput: move |event| category_signal.set(event.value()),
                option { value: "", "Все категории" }
                for reference in categories {
                    option {
                        value: "{reference.category_name}",
                        "{reference.category_name}"
                    }
                }
            }
            select {
                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 sm:max-w-xs",
                value: "{sort}",
                oninput: move |event| sort_signal.set(event.value()),
                option { value: "", "По умолчанию" }
                option { value: "time", "Сначала ближайшие" }
                option { value: "price", "Сначала дешевле" }
                option { value: "-price", "Сначала дороже" }
                option { value: "title", "По названию" }
            }
            button {
                r#type: "submit",
                class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-6 py-2.5",
                "Показать"
            }
        }
        if let Some(error) = error {
            div {
                class: "mb-4 p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                "{error}"
            }
        }
        {body}
    }
}
