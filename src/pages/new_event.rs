use anyhow::anyhow;
use base64::{engine::general_purpose, Engine as _};
use dioxus::{document::eval, prelude::*};
use reqwest::multipart;

use crate::api::{
    auth_headers, format_datetime, AgeCategoryRef, CategoryRef, ExcursionCreated, ExcursionDraft,
    FormatTypeRef, MessageResponse, SessionDraft,
};
use crate::route::Route;
use crate::{BACKEND_URL, SESSION};

pub fn NewEvent() -> Element {
    let navigator = use_navigator();

    let mut categories_signal = use_signal(|| Vec::<CategoryRef>::new());
    let mut format_types_signal = use_signal(|| Vec::<FormatTypeRef>::new());
    let mut age_categories_signal = use_signal(|| Vec::<AgeCategoryRef>::new());

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
    let mut tags = use_signal(|| "".to_string());

    let mut sessions_signal = use_signal(|| Vec::<SessionDraft>::new());
    let mut session_datetime = use_signal(|| "".to_string());
    let mut session_max = use_signal(|| "".to_string());
    let mut session_cost = use_signal(|| "".to_string());

    let mut photos_signal = use_signal(|| Vec::<(String, String)>::new());

    let mut message_signal = use_signal(|| Option::<(String, bool)>::None);
    let mut is_loading_signal = use_signal(|| false);

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

    let categories = categories_signal();
    let format_types = format_types_signal();
    let age_categories = age_categories_signal();
    let sessions = sessions_signal();
    let photos = photos_signal();
    let message = message_signal();
    let is_loading = is_loading_signal();

    rsx! {
        div {
            class: "min-h-screen bg-gray-50 py-8",
            div {
                class: "max-w-2xl mx-auto px-4",
                div {
                    class: "flex items-center justify-between mb-6",
                    h1 {
                        class: "text-3xl font-bold text-gray-900",
                        "Новое событие"
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
                            let task: Result<(), anyhow::Error> = async move {
                                if category.read().is_empty() {
                                    return Err(anyhow!("Выберите категорию"));
                                }
                                if format_type.read().is_empty() {
                                    return Err(anyhow!("Выберите формат"));
                                }
                                if age_category.read().is_empty() {
                                    return Err(anyhow!("Выберите возрастную категорию"));
                                }

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
                                    is_active: None,
                                    tags: tags
                                        .read()
                                        .split(',')
                                        .map(|x| x.trim().to_string())
                                        .filter(|x| !x.is_empty())
                                        .collect(),
                                    sessions: sessions_signal(),
                                };

                                let mut form = multipart::Form::new()
                                    .text("data", serde_json::to_string(&draft)?);

                                for (data_url, file_name) in photos_signal() {
                                    let data_o = data_url.strip_prefix("data:image;base64,");

                                    let data = data_o
                                        .map(|x| general_purpose::STANDARD.decode(x))
                                        .ok_or(anyhow!("failed to get data"))??;

                                    let file_part =
                                        multipart::Part::bytes(data).file_name(file_name);

                                    form = form.part("photos", file_part);
                                }

                                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                                let client = reqwest::Client::new();
                                let response = client
                                    .post(format!("{}/api/resident/excursions", BACKEND_URL))
                                    .headers(auth_headers(token.as_str())?)
                                    .multipart(form)
                                    .send()
                                    .await?;

                                if !response.status().is_success() {
                                    let err = response.json::<MessageResponse>().await?;
                                    return Err(anyhow!(err.message));
                                }

                                response.json::<ExcursionCreated>().await?;

                                navigator.replace(Route::ResidentProfile);

                                Ok(())
                            }
                            .await;

                            if let Err(e) = task {
                                message_signal.write().replace((e.to_string(), false));
                            }
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
                            required: 1,
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
                        class: "mt-4",
                        label {
                            r#for: "tags",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Теги, через запятую"
                        }
                        input {
                            r#type: "text",
                            id: "tags",
                            placeholder: "живопись, мастер-класс",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            value: "{tags}",
                            oninput: move |event| tags.set(event.value())
                        }
                    }
                    div {
                        class: "mt-6",
                        h2 {
                            class: "text-lg font-bold text-gray-900 mb-2",
                            "Сеансы"
                        }
                        if sessions.is_empty() {
                            p { class: "text-sm text-gray-500", "Сеансы пока не добавлены" }
                        } else {
                            ul {
                                class: "space-y-2 text-sm",
                                for (index, session) in sessions.iter().enumerate() {
                                    li {
                                        class: "flex items-center justify-between p-2 bg-gray-50 border border-gray-200 rounded-lg",
                                        span {
                                            {format_datetime(session.start_datetime.as_str())}
                                            ", мест: {session.max_participants}, цена: {session.cost} ₽"
                                        }
                                        button {
                                            r#type: "button",
                                            class: "text-red-700 hover:underline",
                                            onclick: move |_| {
                                                sessions_signal.write().remove(index);
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
                                    let task = move || -> Result<SessionDraft, anyhow::Error> {
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

                                        Ok(SessionDraft {
                                            start_datetime,
                                            max_participants,
                                            cost,
                                        })
                                    };

                                    match task() {
                                        Ok(session) => {
                                            sessions_signal.write().push(session);
                                            session_datetime.set("".to_string());
                                            session_max.set("".to_string());
                                            session_cost.set("".to_string());
                                        }
                                        Err(e) => {
                                            message_signal.write().replace((e.to_string(), false));
                                        }
                                    }
                                },
                                "Добавить сеанс"
                            }
                        }
                    }
                    div {
                        class: "mt-6",
                        h2 {
                            class: "text-lg font-bold text-gray-900 mb-2",
                            "Фотографии"
                        }
                        if !photos.is_empty() {
                            div {
                                class: "grid grid-cols-4 gap-2 mb-3",
                                for (index, (data_url, file_name)) in photos.iter().enumerate() {
                                    div {
                                        class: "relative",
                                        img {
                                            class: "w-full h-24 object-cover rounded-lg",
                                            src: "{data_url}",
                                            alt: "{file_name}"
                                        }
                                        button {
                                            r#type: "button",
                                            class: "absolute top-1 right-1 bg-white rounded-full px-2 text-sm text-red-700 hover:bg-red-50",
                                            onclick: move |_| {
                                                photos_signal.write().remove(index);
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
                                    let e = document.getElementById('event-photos-input');
                                    e.click();
                                ");
                            },
                            class: "text-blue-600 hover:text-blue-800 font-medium text-sm",
                            "Выбрать фото"
                        }
                        input {
                            r#type: "file",
                            accept: "image/*",
                            multiple: true,
                            id: "event-photos-input",
                            class: "hidden",
                            onchange: move |evt| {
                                async move {
                                    if let Some(file_engine) = &evt.files() {
                                        let files = file_engine.files();

                                        for file_name in files {
                                            let data_o =
                                                file_engine.read_file(file_name.as_str()).await;

                                            if let Some(data) = data_o {
                                                let encoded =
                                                    general_purpose::STANDARD.encode(data);

                                                photos_signal.write().push((
                                                    format!("data:image;base64,{}", encoded),
                                                    file_name.clone(),
                                                ));
                                            }
                                        }
                                    }
                                }
                            }
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
                            "Создаём..."
                        } else {
                            "Создать событие"
                        }
                    }
                }
            }
        }
    }
}
