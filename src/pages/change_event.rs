use anyhow::anyhow;
use dioxus::{document::eval, prelude::*};
use reqwest::multipart;

use crate::api::{
    auth_headers, format_datetime, AgeCategoryRef, CategoryRef, Excursion, ExcursionDraft,
    ExcursionResponse, FormatTypeRef, MessageResponse, SessionDraft,
};
use crate::route::Route;
use crate::{BACKEND_URL, SESSION};

#[component]
pub fn ChangeEvent(id: i32) -> Element {
    let mut categories_signal = use_signal(|| Vec::<CategoryRef>::new());
    let mut format_types_signal = use_signal(|| Vec::<FormatTypeRef>::new());
    let mut age_categories_signal = use_signal(|| Vec::<AgeCategoryRef>::new());

    let mut excursion_signal = use_signal(|| Option::<Excursion>::None);
    let mut load_error_signal = use_signal(|| Option::<String>::None);
    let mut reload_signal = use_signal(|| 0);

    let mut title = use_signal(|| "".to_string());
    let mut description = use_signal(|| "".to_string());
    let mut place = use_signal(|| "".to_string());
    let mut category = use_signal(|| "".to_string());
    let mut format_type = use_signal(|| "".to_string());
    let mut age_category = use_signal(|| "".to_string());
    let mut duration = use_signal(|| "".to_string());
    let mut conducted_by = use_signal(|| "".to_string());
    let mut working_hours = use_signal(|| "".to_string());
    let mut contact_email = use_signal(|| "".to_string());
    let mut telegram = use_signal(|| "".to_string());
    let mut vk = use_signal(|| "".to_string());
    let mut is_active_signal = use_signal(|| true);

    let mut session_datetime = use_signal(|| "".to_string());
    let mut session_max = use_signal(|| "".to_string());
    let mut session_cost = use_signal(|| "".to_string());

    let mut message_signal = use_signal(|| Option::<(String, bool)>::None);
    let mut is_loading_signal = use_signal(|| false);
    let mut action_message_signal = use_signal(|| Option::<String>::None);

    use_effect(move || {
        spawn(async move {
            let task: Result<
                (Vec<CategoryRef>, Vec<FormatTypeRef>, Vec<AgeCategoryRef>),
                anyhow::Error,
            > = async move {
                let client = reqwest::Client::new();

                let categories = client
                    .get(format!("{}/api/references/categories", BACKEND_URL))
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Vec<CategoryRef>>()
                    .await?;
                let format_types = client
                    .get(format!("{}/api/references/format-types", BACKEND_URL))
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Vec<FormatTypeRef>>()
                    .await?;
                let age_categories = client
                    .get(format!("{}/api/references/age-categories", BACKEND_URL))
                    .send()
                    .await?
                    .error_for_status()?
                    .json::<Vec<AgeCategoryRef>>()
                    .await?;

                Ok((categories, format_types, age_categories))
            }
            .await;

            match task {
                Ok((categories, format_types, age_categories)) => {
                    categories_signal.set(categories);
                    format_types_signal.set(format_types);
                    age_categories_signal.set(age_categories);
                }
                Err(e) => {
                    message_signal.write().replace((e.to_string(), false));
                }
            }
        });
    });

    use_effect(use_reactive!(|id| {
        // Re-reads after session and photo changes bump the counter.
        let _version = reload_signal();

        spawn(async move {
            let task: Result<ExcursionResponse, anyhow::Error> = async move {
                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                let response = reqwest::Client::new()
                    .get(format!("{}/api/resident/excursions/{}", BACKEND_URL, id))
                    .headers(auth_headers(token.as_str())?)
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<ExcursionResponse>().await?)
            }
            .await;

            match task {
                Ok(res) => excursion_signal.set(Some(res.excursion)),
                Err(e) => load_error_signal.set(Some(e.to_string())),
            }
        });
    }));

    use_effect(move || {
        if let Some(excursion) = excursion_signal() {
            title.set(excursion.title);
            description.set(excursion.description.unwrap_or_default());
            place.set(excursion.place.unwrap_or_default());
            category.set(excursion.category.unwrap_or_default());
            format_type.set(excursion.format_type.unwrap_or_default());
            age_category.set(excursion.age_category.unwrap_or_default());
            duration.set(
                excursion
                    .duration
                    .map(|x| x.to_string())
                    .unwrap_or_default(),
            );
            conducted_by.set(excursion.conducted_by.unwrap_or_default());
            working_hours.set(excursion.working_hours.unwrap_or_default());
            contact_email.set(excursion.contact_email.unwrap_or_default());
            telegram.set(excursion.telegram.unwrap_or_default());
            vk.set(excursion.vk.unwrap_or_default());
            is_active_signal.set(excursion.is_active);
        }
    });

    let excursion = match (excursion_signal(), load_error_signal()) {
        (Some(excursion), _) => excursion,
        (None, Some(error)) => {
            return rsx! {
                div {
                    class: "min-h-screen bg-gray-50 py-8",
                    div {
                        class: "max-w-2xl mx-auto px-4",
                        div {
                            class: "p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                            "{error}"
                        }
                    }
                }
            }
        }
        (None, None) => {
            return rsx! {
                div {
                    class: "min-h-screen bg-gray-50 py-8",
                    div {
                        class: "max-w-2xl mx-auto px-4",
                        p { class: "text-gray-500", "Загрузка..." }
                    }
                }
            }
        }
    };

    let categories = categories_signal();
    let format_types = format_types_signal();
    let age_categories = age_categories_signal();
    let message = message_signal();
    let is_loading = is_loading_signal();
    let is_active = is_active_signal();
    let action_message = action_message_signal();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-8",
            div {
                class: "max-w-2xl mx-auto px-4",
                div {
                    class: "flex items-center justify-between mb-6",
                    h1 {
                        class: "text-3xl font-bold text-gray-900",
                        "Изменение события"
                    }
                    Link {
                        class: "text-sm text-blue-700 hover:underline",
                        to: Route::ResidentProfile,
                        "В кабинет"
                    }
                }
                form {
                    class: "bg-white border border-gray-200 rounded-lg p-6",
                    onsubmit: move |_| {
                        is_loading_signal.set(true);
                        message_signal.set(None);

                        spawn(async move {
                            let task: Result<String, anyhow::Error> = async move {
                                let duration_value = duration.read().clone();
                                let duration_parsed = if duration_value.is_empty() {
                                    None
                                } else {
                                    Some(
                                        duration_value
                                            .parse::<i32>()
                                            .map_err(|_| anyhow!("Длительность должна быть числом"))?,
                                    )
                                };

                                let optional = |value: String| {
                                    if value.is_empty() {
                                        None
                                    } else {
                                        Some(value)
                                    }
                                };

                                let draft = ExcursionDraft {
                                    title: title.read().clone(),
                                    description: description.read().clone(),
                                    place: place.read().clone(),
                                    category: category.read().clone(),
                                    format_type: format_type.read().clone(),
                                    age_category: age_category.read().clone(),
                                    duration: duration_parsed,
                                    conducted_by: optional(conducted_by.read().clone()),
                                    working_hours: optional(working_hours.read().clone()),
                                    contact_email: optional(contact_email.read().clone()),
                                    telegram: optional(telegram.read().clone()),
                                    vk: optional(vk.read().clone()),
                                    is_active: Some(is_active_signal()),
                                    tags: Vec::new(),
                                    sessions: Vec::new(),
                                };

                                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                                let response = reqwest::Client::new()
                                    .patch(format!("{}/api/resident/excursions/{}", BACKEND_URL, id))
                                    .headers(auth_headers(token.as_str())?)
                                    .json(&draft)
                                    .send()
                                    .await?;

                                let status = response.status();
                                let res = response.json::<MessageResponse>().await?;

                                if !status.is_success() {
                                    return Err(anyhow!(res.message));
                                }

                                reload_signal += 1;

                                Ok(res.message)
                            }
                            .await;

                            message_signal.write().replace(match task {
                                Ok(text) => (text, true),
                                Err(e) => (e.to_string(), false),
                            });
                            is_loading_signal.set(false);
                        });
                    },
                    div {
                        label {
                            r#for: "title",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Название"
                        }
                        input {
                            r#type: "text",
                            id: "title",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            required: 1,
                            value: "{title}",
                            oninput: move |event| title.set(event.value())
                        }
                    }
                    div {
                        class: "mt-4",
                        label {
                            r#for: "description",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Описание"
                        }
                        textarea {
                            id: "description",
                            rows: 4,
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            value: "{description}",
                            oninput: move |event| description.set(event.value())
                        }
                    }
                    div {
                        class: "mt-4",
                        label {
                            r#for: "place",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Место проведения"
                        }
                        input {
                            r#type: "text",
                            id: "place",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            required: 1,
                            value: "{place}",
                            oninput: move |event| place.set(event.value())
                        }
                    }
                    div {
                        class: "mt-4 grid grid-cols-1 sm:grid-cols-3 gap-4",
                        div {
                            label {
                                r#for: "category",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "Категория"
                            }
                            select {
                                id: "category",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{category}",
                                oninput: move |event| category.set(event.value()),
                                option { value: "", "—" }
                                for reference in categories {
                                    option {
                                        value: "{reference.category_name}",
                                        "{reference.category_name}"
                                    }
                                }
                            }
                        }
                        div {
                            label {
                                r#for: "format_type",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "Формат"
                            }
                            select {
                                id: "format_type",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{format_type}",
                                oninput: move |event| format_type.set(event.value()),
                                option { value: "", "—" }
                                for reference in format_types {
                                    option {
                                        value: "{reference.format_type_name}",
                                        "{reference.format_type_name}"
                                    }
                                }
                            }
                        }
                        div {
                            label {
                                r#for: "age_category",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "Возраст"
                            }
                            select {
                                id: "age_category",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{age_category}",
                                oninput: move |event| age_category.set(event.value()),
                                option { value: "", "—" }
                                for reference in age_categories {
                                    option {
                                        value: "{reference.age_category_name}",
                                        "{reference.age_category_name}"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "mt-4 grid grid-cols-1 sm:grid-cols-2 gap-4",
                        div {
                            label {
                                r#for: "duration",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "Длительность, мин."
                            }
                            input {
                                r#type: "number",
                                id: "duration",
                                min: "1",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{duration}",
                                oninput: move |event| duration.set(event.value())
                            }
                        }
                        div {
                            label {
                                r#for: "conducted_by",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "Проводит"
                            }
                            input {
                                r#type: "text",
                                id: "conducted_by",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{conducted_by}",
                                oninput: move |event| conducted_by.set(event.value())
                            }
                        }
                    }
                    div {
                        class: "mt-4 grid grid-cols-1 sm:grid-cols-2 gap-4",
                        div {
                            label {
                                r#for: "working_hours",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "График работы"
                            }
                            input {
                                r#type: "text",
                                id: "working_hours",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{working_hours}",
                                oninput: move |event| working_hours.set(event.value())
                            }
                        }
                        div {
                            label {
                                r#for: "contact_email",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "Почта для связи"
                            }
                            input {
                                r#type: "email",
                                id: "contact_email",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{contact_email}",
                                oninput: move |event| contact_email.set(event.value())
                            }
                        }
                    }
                    div {
                        class: "mt-4 grid grid-cols-1 sm:grid-cols-2 gap-4",
                        div {
                            label {
                                r#for: "telegram",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "Telegram"
                            }
                            input {
                                r#type: "url",
                                id: "telegram",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{telegram}",
                                oninput: move |event| telegram.set(event.value())
                            }
                        }
                        div {
                            label {
                                r#for: "vk",
                                class: "block mb-2 text-sm font-medium text-gray-900",
                                "ВКонтакте"
                            }
                            input {
                                r#type: "url",
                                id: "vk",
                                class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                                value: "{vk}",
                                oninput: move |event| vk.set(event.value())
                            }
                        }
                    }
                    div {
                        class: "mt-4 flex items-center gap-2",
                        input {
                            r#type: "checkbox",
                            id: "is_active",
                            checked: is_active,
                            onchange: move |event| is_active_signal.set(event.checked())
                        }
                        label {
                            r#for: "is_active",
                            class: "text-sm font-medium text-gray-900",
                            "Событие видно в афише"
                        }
                    }
                    if let Some((message, success)) = message {
                        if success {
                            div {
                                class: "mt-4 p-3 text-sm rounded-lg bg-green-50 text-green-800 border border-green-200",
                                "{message}"
                            }
                        } else {
                            div {
                                class: "mt-4 p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                                "{message}"
                            }
                        }
                    }
                    button {
                        r#type: "submit",
                        disabled: is_loading,
                        class: "mt-6 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-6 py-2.5 disabled:opacity-50",
                        if is_loading {
                            "Сохраняем..."
                        } else {
                            "Сохранить"
                        }
                    }
                }
                div {
                    class: "mt-6 bg-white border border-gray-200 rounded-lg p-6",
                    h2 {
                        class: "text-lg font-bold text-gray-900 mb-2",
                        "Сеансы"
                    }
                    if let Some(action_message) = action_message {
                        div {
                            class: "mb-3 p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                            "{action_message}"
                        }
                    }
                    if excursion.sessions.is_empty() {
                        p { class: "text-sm text-gray-500", "Сеансов пока нет" }
                    } else {
                        ul {
                            class: "space-y-2 text-sm",
                            for session in excursion.sessions {
                                li {
                                    class: "flex items-center justify-between p-2 bg-gray-50 border border-gray-200 rounded-lg",
                                    span {
                                        {format_datetime(session.start_datetime.as_str())}
                                        ", цена: {session.cost} ₽"
                                    }
                                    button {
                                        r#type: "button",
                                        class: "text-red-700 hover:underline",
                                        onclick: move |_| {
                                            let session_id = session.session_id;
                                            action_message_signal.set(None);

                                            spawn(async move {
                                                let task: Result<(), anyhow::Error> = async move {
                                                    let token = SESSION()
                                                        .auth_key
                                                        .ok_or(anyhow!("Требуется вход"))?;

                                                    let response = reqwest::Client::new()
                                                        .delete(format!(
                                                            "{}/api/resident/excursions/{}/sessions/{}",
                                                            BACKEND_URL, id, session_id
                                                        ))
                                                        .headers(auth_headers(token.as_str())?)
                                                        .send()
                                                        .await?;

                                                    if !response.status().is_success() {
                                                        let err =
                                                            response.json::<MessageResponse>().await?;
                                                        return Err(anyhow!(err.message));
                                                    }

                                                    Ok(())
                                                }
                                                .await;

                                                if let Err(e) = task {
                                                    action_message_signal.set(Some(e.to_string()));
                                                }
                                                reload_signal += 1;
                                            });
                                        },
                                        "Убрать"
                                    }
                                }
                            }
                        }
                    }
                    div {
                        class: "mt-3 grid grid-cols-1 sm:grid-cols-4 gap-2",
                        input {
                            r#type: "datetime-local",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            value: "{session_datetime}",
                            oninput: move |event| session_datetime.set(event.value())
                        }
                        input {
                            r#type: "number",
                            min: "1",
                            placeholder: "Мест",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            value: "{session_max}",
                            oninput: move |event| session_max.set(event.value())
                        }
                        input {
                            r#type: "number",
                            min: "0",
                            step: "0.01",
                            placeholder: "Цена, ₽",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            value: "{session_cost}",
                            oninput: move |event| session_cost.set(event.value())
                        }
                        button {
                            r#type: "button",
                            class: "text-blue-700 bg-white border border-blue-700 hover:bg-blue-50 font-medium rounded-lg text-sm px-4 py-2",
                            onclick: move |_| {
                                action_message_signal.set(None);

                                spawn(async move {
                                    let task: Result<(), anyhow::Error> = async move {
                                        let start_datetime = session_datetime.read().clone();

                                        if start_datetime.is_empty() {
                                            return Err(anyhow!("Укажите дату и время сеанса"));
                                        }

                                        let max_participants = session_max
                                            .read()
                                            .parse::<i32>()
                                            .map_err(|_| anyhow!("Укажите число мест"))?;
                                        let cost = if session_cost.read().is_empty() {
                                            0.0
                                        } else {
                                            session_cost
                                                .read()
                                                .parse::<f64>()
                                                .map_err(|_| anyhow!("Цена должна быть числом"))?
                                        };

                                        let token = SESSION()
                                            .auth_key
                                            .ok_or(anyhow!("Требуется вход"))?;

                                        let response = reqwest::Client::new()
                                            .post(format!(
                                                "{}/api/resident/excursions/{}/sessions",
                                                BACKEND_URL, id
                                            ))
                                            .headers(auth_headers(token.as_str())?)
                                            .json(&SessionDraft {
                                                start_datetime,
                                                max_participants,
                                                cost,
                                            })
                                            .send()
                                            .await?;

                                        if !response.status().is_success() {
                                            let err = response.json::<MessageResponse>().await?;
                                            return Err(anyhow!(err.message));
                                        }

                                        Ok(())
                                    }
                                    .await;

                                    match task {
                                        Ok(_) => {
                                            session_datetime.set("".to_string());
                                            session_max.set("".to_string());
                                            session_cost.set("".to_string());
                                            reload_signal += 1;
                                        }
                                        Err(e) => {
                                            action_message_signal.set(Some(e.to_string()));
                                        }
                                    }
                                });
                            },
                            "Добавить сеанс"
                        }
                    }
                }
                div {
                    class: "mt-6 bg-white border border-gray-200 rounded-lg p-6",
                    h2 {
                        class: "text-lg font-bold text-gray-900 mb-2",
                        "Фотографии"
                    }
                    if excursion.photos.is_empty() {
                        p { class: "text-sm text-gray-500", "Фотографий пока нет" }
                    } else {
                        div {
                            class: "grid grid-cols-4 gap-2",
                            for photo in excursion.photos {
                                div {
                                    class: "relative",
                                    img {
                                        class: "w-full h-24 object-cover rounded-lg",
                                        src: "{photo.photo_url}",
                                        alt: "Фото события"
                                    }
                                    button {
                                        r#type: "button",
                                        class: "absolute top-1 right-1 bg-white rounded-full px-2 text-sm text-red-700 hover:bg-red-50",
                                        onclick: move |_| {
                                            let photo_id = photo.photo_id;
                                            action_message_signal.set(None);

                                            spawn(async move {
                                                let task: Result<(), anyhow::Error> = async move {
                                                    let token = SESSION()
                                                        .auth_key
                                                        .ok_or(anyhow!("Требуется вход"))?;

                                                    let response = reqwest::Client::new()
                                                        .delete(format!(
                                                            "{}/api/resident/excursions/{}/photos/{}",
                                                            BACKEND_URL, id, photo_id
                                                        ))
                                                        .headers(auth_headers(token.as_str())?)
                                                        .send()
                                                        .await?;

                                                    if !response.status().is_success() {
                                                        let err =
                                                            response.json::<MessageResponse>().await?;
                                                        return Err(anyhow!(err.message));
                                                    }

                                                    Ok(())
                                                }
                                                .await;

                                                if let Err(e) = task {
                                                    action_message_signal.set(Some(e.to_string()));
                                                }
                                                reload_signal += 1;
                                            });
                                        },
                                        "✕"
                                    }
                                }
                            }
                        }
                    }
                    button {
                        r#type: "button",
                        onclick: |_| {
                            eval(r"
                                let e = document.getElementById('event-photo-input');
                                e.click();
                            ");
                        },
                        class: "mt-3 text-blue-600 hover:text-blue-800 font-medium text-sm",
                        "Загрузить фото"
                    }
                    input {
                        r#type: "file",
                        accept: "image/*",
                        multiple: true,
                        id: "event-photo-input",
                        class: "hidden",
                        onchange: move |evt| {
                            async move {
                                if let Some(file_engine) = &evt.files() {
                                    let files = file_engine.files();

                                    for file_name in files {
                                        let data_o =
                                            file_engine.read_file(file_name.as_str()).await;

                                        let Some(data) = data_o else {
                                            continue;
                                        };

                                        let task: Result<(), anyhow::Error> = async {
                                            let file_part = multipart::Part::bytes(data)
                                                .file_name(file_name.clone());

                                            let form =
                                                multipart::Form::new().part("photo", file_part);

                                            let token = SESSION()
                                                .auth_key
                                                .ok_or(anyhow!("Требуется вход"))?;

                                            let response = reqwest::Client::new()
                                                .post(format!(
                                                    "{}/api/resident/excursions/{}/photos",
                                                    BACKEND_URL, id
                                                ))
                                                .headers(auth_headers(token.as_str())?)
                                                .multipart(form)
                                                .send()
                                                .await?;

                                            if !response.status().is_success() {
                                                let err =
                                                    response.json::<MessageResponse>().await?;
                                                return Err(anyhow!(err.message));
                                            }

                                            Ok(())
                                        }
                                        .await;

                                        if let Err(e) = task {
                                            action_message_signal.set(Some(e.to_string()));
                                        }
                                    }

                                    reload_signal += 1;
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
