use anyhow::anyhow;
use dioxus::prelude::*;

use crate::api::{
    auth_headers, format_datetime, Excursion, MessageResponse, ReservationCreated,
    ReservationRequest,
};
use crate::route::Route;
use crate::{BACKEND_URL, SESSION};

#[component]
pub fn EventPage(id: i32) -> Element {
    let navigator = use_navigator();

    let mut excursion_signal = use_signal(|| Option::<Excursion>::None);
    let mut error_signal = use_signal(|| Option::<String>::None);

    let mut session_id_signal = use_signal(|| Option::<i32>::None);
    let mut full_name = use_signal(|| "".to_string());
    let mut phone_number = use_signal(|| "".to_string());
    let mut email = use_signal(|| "".to_string());
    let mut participants_signal = use_signal(|| "1".to_string());
    let mut message_signal = use_signal(|| Option::<(String, bool)>::None);
    let mut is_loading_signal = use_signal(|| false);

    use_effect(use_reactive!(|id| {
        spawn(async move {
            let task: Result<Excursion, anyhow::Error> = async move {
                let response = reqwest::Client::new()
                    .get(format!("{}/api/user/excursions_detail/{}", BACKEND_URL, id))
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<Excursion>().await?)
            }
            .await;

            match task {
                Ok(res) => excursion_signal.set(Some(res)),
                Err(e) => error_signal.set(Some(e.to_string())),
            }
        });
    }));

    let excursion = match (excursion_signal(), error_signal()) {
        (Some(excursion), _) => excursion,
        (None, Some(error)) => {
            return rsx! {
                div {
                    class: "p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                    "{error}"
                }
            }
        }
        (None, None) => {
            return rsx! {
                p { class: "text-gray-500", "Загрузка..." }
            }
        }
    };

    let Excursion {
        title,
        description,
        duration,
        category,
        format_type,
        age_category,
        place,
        conducted_by,
        working_hours,
        contact_email,
        telegram,
        vk,
        photos,
        sessions,
        ..
    } = excursion;

    let cost_label = |cost: f64| {
        if cost > 0.0 {
            format!("{cost:.0} ₽")
        } else {
            "Бесплатно".to_string()
        }
    };

    let gallery = match photos.split_first() {
        Some((hero, rest)) => rsx! {
            img {
                class: "w-full h-72 object-cover rounded-lg",
                src: "{hero.photo_url}",
                alt: "{title}"
            }
            if !rest.is_empty() {
                div {
                    class: "mt-2 grid grid-cols-4 gap-2",
                    for photo in rest.iter() {
                        img {
                            class: "w-full h-24 object-cover rounded-lg",
                            src: "{photo.photo_url}",
                            alt: "{title}"
                        }
                    }
                }
            }
        },
        None => rsx! {},
    };

    let session_options = sessions
        .iter()
        .map(|x| {
            (
                x.session_id,
                format!(
                    "{} — {}",
                    format_datetime(x.start_datetime.as_str()),
                    cost_label(x.cost)
                ),
            )
        })
        .collect::<Vec<_>>();

    let selected_session = session_id_signal()
        .map(|id| id.to_string())
        .unwrap_or_default();
    let message = message_signal();
    let is_loading = is_loading_signal();

    let booking = if SESSION().is_authenticated() {
        rsx! {
            form {
                class: "mt-4",
                onsubmit: move |_| {
                    is_loading_signal.set(true);
                    message_signal.set(None);

                    spawn(async move {
                        let task: Result<(), anyhow::Error> = async move {
                            let session_id = session_id_signal().ok_or(anyhow!("Выберите сеанс"))?;
                            let participants_count = participants_signal()
                                .parse::<i32>()
                                .map_err(|_| anyhow!("Укажите число участников"))?;
                            let token = SESSION()
                                .auth_key
                                .ok_or(anyhow!("Требуется вход"))?;

                            let client = reqwest::Client::new();
                            let response = client
                                .post(format!("{}/api/user/v2/reservations", BACKEND_URL))
                                .headers(auth_headers(token.as_str())?)
                                .json(&ReservationRequest {
                                    session_id,
                                    full_name: full_name.read().clone(),
                                    phone_number: phone_number.read().clone(),
                                    email: email.read().clone(),
                                    participants_count,
                                })
                                .send()
                                .await?;

                            if !response.status().is_success() {
                                let err = response.json::<MessageResponse>().await?;
                                return Err(anyhow!(err.message));
                            }

                            let res = response.json::<ReservationCreated>().await?;

                            // Paid sessions continue at the payment provider,
                            // free ones are confirmed right away.
                            match res.payment_id.zip(res.payment_url) {
                                Some((payment_id, payment_url)) => {
                                    navigator.push(Route::Payment {
                                        id: payment_id,
                                        url: payment_url,
                                    });
                                }
                                None => {
                                    message_signal.write().replace((res.message, true));
                                }
                            }

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
                        r#for: "session",
                        class: "block mb-2 text-sm font-medium text-gray-900",
                        "Сеанс"
                    }
                    select {
                        id: "session",
                        class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                        value: "{selected_session}",
                        oninput: move |event| session_id_signal.set(event.value().parse::<i32>().ok()),
                        option { value: "", "Выберите сеанс" }
                        for (session_id, label) in session_options {
                            option { value: "{session_id}", "{label}" }
                        }
                    }
                }
                div {
                    class: "mt-4",
                    label {
                        r#for: "full_name",
                        class: "block mb-2 text-sm font-medium text-gray-900",
                        "ФИО"
                    }
                    input {
                        r#type: "text",
                        id: "full_name",
                        class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                        required: 1,
                        value: "{full_name}",
                        oninput: move |event| full_name.set(event.value())
                    }
                }
                div {
                    class: "mt-4 grid grid-cols-1 sm:grid-cols-2 gap-4",
                    div {
                        label {
                            r#for: "phone_number",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Телефон"
                        }
                        input {
                            r#type: "tel",
                            id: "phone_number",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            required: 1,
                            value: "{phone_number}",
                            oninput: move |event| phone_number.set(event.value())
                        }
                    }
                    div {
                        label {
                            r#for: "email",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Электронная почта"
                        }
                        input {
                            r#type: "email",
                            id: "email",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            required: 1,
                            value: "{email}",
                            oninput: move |event| email.set(event.value())
                        }
                    }
                }
                div {
                    class: "mt-4",
                    label {
                        r#for: "participants",
                        class: "block mb-2 text-sm font-medium text-gray-900",
                        "Число участников"
                    }
                    input {
                        r#type: "number",
                        id: "participants",
                        min: "1",
                        class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5 sm:max-w-[10rem]",
                        required: 1,
                        value: "{participants_signal}",
                        oninput: move |event| participants_signal.set(event.value())
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
                    class: "mt-4 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-6 py-2.5 disabled:opacity-50",
                    if is_loading {
                        "Записываем..."
                    } else {
                        "Записаться"
                    }
                }
            }
        }
    } else {
        rsx! {
            div {
                class: "mt-4 p-4 bg-gray-50 border border-gray-200 rounded-lg text-sm text-gray-600",
                Link {
                    class: "text-blue-700 hover:underline",
                    to: Route::Login,
                    "Войдите"
                }
                ", чтобы записаться на сеанс"
            }
        }
    };

    rsx! {
        {gallery}
        h1 {
            class: "mt-6 text-3xl font-bold text-gray-900",
            "{title}"
        }
        div {
            class: "mt-3 flex flex-wrap gap-2",
            if let Some(category) = category.as_deref() {
                span {
                    class: "px-2 py-1 text-xs font-medium rounded bg-blue-100 text-blue-800",
                    "{category}"
                }
            }
            if let Some(format_type) = format_type.as_deref() {
                span {
                    class: "px-2 py-1 text-xs font-medium rounded bg-purple-100 text-purple-800",
                    "{format_type}"
                }
            }
            if let Some(age_category) = age_category.as_deref() {
                span {
                    class: "px-2 py-1 text-xs font-medium rounded bg-gray-100 text-gray-800",
                    "{age_category}"
                }
            }
        }
        if let Some(description) = description.as_deref() {
            p {
                class: "mt-4 text-gray-700 whitespace-pre-line",
                "{description}"
            }
        }
        div {
            class: "mt-6 grid grid-cols-1 sm:grid-cols-2 gap-3 text-sm text-gray-700",
            if let Some(place) = place.as_deref() {
                p { "Место: {place}" }
            }
            if let Some(duration) = duration {
                p { "Длительность: {duration} мин." }
            }
            if let Some(conducted_by) = conducted_by.as_deref() {
                p { "Проводит: {conducted_by}" }
            }
            if let Some(working_hours) = working_hours.as_deref() {
                p { "График: {working_hours}" }
            }
        }
        div {
            class: "mt-4 flex flex-wrap gap-4 text-sm",
            if let Some(contact_email) = contact_email.as_deref() {
                a {
                    class: "text-blue-700 hover:underline",
                    href: "mailto:{contact_email}",
                    "{contact_email}"
                }
            }
            if let Some(telegram) = telegram.as_deref() {
                a {
                    class: "text-blue-700 hover:underline",
                    href: "{telegram}",
                    target: "_blank",
                    "Telegram"
                }
            }
            if let Some(vk) = vk.as_deref() {
                a {
                    class: "text-blue-700 hover:underline",
                    href: "{vk}",
                    target: "_blank",
                    "ВКонтакте"
                }
            }
        }
        section {
            class: "mt-8",
            h2 {
                class: "text-xl font-bold text-gray-900",
                "Запись"
            }
            if sessions.is_empty() {
                p { class: "mt-2 text-gray-500", "Сеансов пока нет" }
            } else {
                ul {
                    class: "mt-2 space-y-1 text-sm text-gray-700",
                    for session in sessions.iter() {
                        li {
                            {format_datetime(session.start_datetime.as_str())}
                            " — "
                            {cost_label(session.cost)}
                            if let Some(max_participants) = session.max_participants {
                                ", мест: {max_participants}"
                            }
                        }
                    }
                }
                {booking}
            }
        }
    }
}
