use anyhow::anyhow;
use dioxus::prelude::*;

use crate::api::{
    auth_headers, format_datetime, CalendarLink, CancelRequest, MessageResponse, Profile,
    ProfileUpdate, Reservation, ReservationsResponse,
};
use crate::route::Route;
use crate::session::{self, Session};
use crate::{BACKEND_URL, SESSION};

pub fn UserProfile() -> Element {
    let navigator = use_navigator();

    let mut profile_signal = use_signal(|| Option::<Profile>::None);
    let mut profile_error_signal = use_signal(|| Option::<String>::None);

    let mut email = use_signal(|| "".to_string());
    let mut full_name = use_signal(|| "".to_string());
    let mut phone = use_signal(|| "".to_string());
    let mut message_signal = use_signal(|| Option::<(String, bool)>::None);
    let mut is_loading_signal = use_signal(|| false);

    let mut reservations_signal = use_signal(|| Option::<Vec<Reservation>>::None);
    let mut reservations_error_signal = use_signal(|| Option::<String>::None);
    let mut action_message_signal = use_signal(|| Option::<String>::None);
    let mut reload_signal = use_signal(|| 0);
    let mut cancelling_signal = use_signal(|| Option::<i32>::None);

    use_effect(move || {
        spawn(async move {
            let task: Result<Profile, anyhow::Error> = async move {
                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                let response = reqwest::Client::new()
                    .get(format!("{}/api/user/profile", BACKEND_URL))
                    .headers(auth_headers(token.as_str())?)
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<Profile>().await?)
            }
            .await;

            match task {
                Ok(res) => profile_signal.set(Some(res)),
                Err(e) => profile_error_signal.set(Some(e.to_string())),
            }
        });
    });

    use_effect(move || {
        if let Some(profile) = profile_signal() {
            email.set(profile.email);
            full_name.set(profile.full_name.unwrap_or_default());
            phone.set(profile.phone.unwrap_or_default());
        }
    });

    use_effect(move || {
        // Re-reads after a cancellation bumps the counter.
        let _version = reload_signal();

        spawn(async move {
            let task: Result<ReservationsResponse, anyhow::Error> = async move {
                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                let response = reqwest::Client::new()
                    .get(format!("{}/api/user/reservations", BACKEND_URL))
                    .headers(auth_headers(token.as_str())?)
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<ReservationsResponse>().await?)
            }
            .await;

            match task {
                Ok(res) => reservations_signal.set(Some(res.reservations)),
                Err(e) => reservations_error_signal.set(Some(e.to_string())),
            }
        });
    });

    let message = message_signal();
    let is_loading = is_loading_signal();
    let cancelling = cancelling_signal();
    let action_message = action_message_signal();
    let account_line = profile_signal().map(|x| format!("Аккаунт №{}", x.user_id));

    let profile_form = match profile_error_signal() {
        Some(error) => rsx! {
            div {
                class: "p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                "{error}"
            }
        },
        None => rsx! {
            form {
                onsubmit: move |_| {
                    is_loading_signal.set(true);
                    message_signal.set(None);

                    spawn(async move {
                        let task: Result<String, anyhow::Error> = async move {
                            let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                            let response = reqwest::Client::new()
                                .put(format!("{}/api/user/profile", BACKEND_URL))
                                .headers(auth_headers(token.as_str())?)
                                .json(&ProfileUpdate {
                                    email: email.read().clone(),
                                    full_name: full_name.read().clone(),
                                    phone: phone.read().clone(),
                                })
                                .send()
                                .await?;

                            let status = response.status();
                            let res = response.json::<MessageResponse>().await?;

                            if !status.is_success() {
                                return Err(anyhow!(res.message));
                            }

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
                    div {
                        label {
                            r#for: "phone",
                            class: "block mb-2 text-sm font-medium text-gray-900",
                            "Телефон"
                        }
                        input {
                            r#type: "tel",
                            id: "phone",
                            class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                            required: 1,
                            value: "{phone}",
                            oninput: move |event| phone.set(event.value())
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
                div {
                    class: "mt-6 flex items-center justify-between",
                    button {
                        r#type: "button",
                        class: "px-6 py-2 border border-red-300 text-red-700 rounded-lg hover:bg-red-50",
                        onclick: move |_| {
                            let task = move || -> Result<(), anyhow::Error> {
                                session::clear()?;
                                *SESSION.write() = Session::default();

                                Ok(())
                            };

                            match task() {
                                Ok(_) => {
                                    navigator.replace(Route::Login);
                                }
                                Err(e) => {
                                    message_signal.write().replace((e.to_string(), false));
                                }
                            }
                        },
                        "Выйти"
                    }
                    button {
                        r#type: "submit",
                        disabled: is_loading,
                        class: "px-6 py-2 text-white bg-blue-700 rounded-lg hover:bg-blue-800 disabled:opacity-50",
                        if is_loading {
                            "Сохраняем..."
                        } else {
                            "Сохранить"
                        }
                    }
                }
            }
        },
    };

    let reservations_section = match (reservations_signal(), reservations_error_signal()) {
        (Some(reservations), _) => {
            if reservations.is_empty() {
                rsx! {
                    p { class: "text-gray-500", "Бронирований пока нет" }
                }
            } else {
                rsx! {
                    ul {
                        class: "space-y-4",
                        for reservation in reservations {
                            li {
                                class: "p-4 border border-gray-200 rounded-lg",
                                div {
                                    class: "flex items-start justify-between gap-4",
                                    div {
                                        p {
                                            class: "font-medium text-gray-900",
                                            {reservation.event_title.as_deref().unwrap_or("Событие")}
                                        }
                                        if let Some(start) = reservation.start_datetime.as_deref() {
                                            p {
                                                class: "mt-1 text-sm text-gray-500",
                                                {format_datetime(start)}
                                            }
                                        }
                                        p {
                                            class: "mt-1 text-sm text-gray-500",
                                            "Участников: {reservation.participants_count}"
                                        }
                                    }
                                    if reservation.is_cancelled {
                                        span {
                                            class: "px-2 py-1 text-xs font-medium rounded bg-gray-100 text-gray-600",
                                            "Отменено"
                                        }
                                    } else {
                                        if reservation.is_paid {
                                            span {
                                                class: "px-2 py-1 text-xs font-medium rounded bg-green-100 text-green-800",
                                                "Оплачено"
                                            }
                                        } else {
                                            span {
                                                class: "px-2 py-1 text-xs font-medium rounded bg-yellow-100 text-yellow-800",
                                                "Подтверждено"
                                            }
                                        }
                                    }
                                }
                                if !reservation.is_cancelled {
                                    div {
                                        class: "mt-3 flex flex-wrap gap-4 text-sm",
                                        button {
                                            r#type: "button",
                                            class: "text-blue-700 hover:underline",
                                            onclick: move |_| {
                                                let reservation_id = reservation.reservation_id;

                                                spawn(async move {
                                                    let task: Result<String, anyhow::Error> = async move {
                                                        let response = reqwest::Client::new()
                                                            .get(format!(
                                                                "{}/api/user/reservations/{}/google_calendar_link",
                                                                BACKEND_URL, reservation_id
                                                            ))
                                                            .send()
                                                            .await?
                                                            .error_for_status()?;

                                                        Ok(response.json::<CalendarLink>().await?.google_calendar_link)
                                                    }
                                                    .await;

                                                    match task {
                                                        Ok(link) => {
                                                            document::eval(
                                                                format!("window.open('{}', '_blank');", link).as_str(),
                                                            );
                                                        }
                                                        Err(e) => {
                                                            action_message_signal.set(Some(e.to_string()));
                                                        }
                                                    }
                                                });
                                            },
                                            "В Google Календарь"
                                        }
                                        a {
                                            class: "text-blue-700 hover:underline",
                                            href: "{BACKEND_URL}/api/user/reservations/{reservation.reservation_id}/export_ical",
                                            "Скачать .ics"
                                        }
                                        button {
                                            r#type: "button",
                                            disabled: cancelling == Some(reservation.reservation_id),
                                            class: "text-red-700 hover:underline disabled:opacity-50",
                                            onclick: move |_| {
                                                let reservation_id = reservation.reservation_id;
                                                cancelling_signal.set(Some(reservation_id));
                                                action_message_signal.set(None);

                                                spawn(async move {
                                                    let task: Result<(), anyhow::Error> = async move {
                                                        let token = SESSION()
                                                            .auth_key
                                                            .ok_or(anyhow!("Требуется вход"))?;

                                                        let response = reqwest::Client::new()
                                                            .delete(format!("{}/api/user/v2/reservations", BACKEND_URL))
                                                            .headers(auth_headers(token.as_str())?)
                                                            .json(&CancelRequest { reservation_id })
                                                            .send()
                                                            .await?;

                                                        if !response.status().is_success() {
                                                            let err = response.json::<MessageResponse>().await?;
                                                            return Err(anyhow!(err.message));
                                                        }

                                                        Ok(())
                                                    }
                                                    .await;

                                                    if let Err(e) = task {
                                                        action_message_signal.set(Some(e.to_string()));
                                                    }
                                                    cancelling_signal.set(None);
                                                    reload_signal += 1;
                                                });
                                            },
                                            "Отменить"
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
        div {
            class: "min-h-screen bg-gray-50 py-8",
            div {
                class: "max-w-2xl mx-auto px-4",
                div {
                    class: "flex items-center justify-between mb-6",
                    h1 {
                        class: "text-3xl font-bold text-gray-900",
                        "Личный кабинет"
                    }
                    Link {
                        class: "text-sm text-blue-700 hover:underline",
                        to: Route::MainPage,
                        "На главную"
                    }
                }
                div {
                    class: "bg-white border border-gray-200 rounded-lg p-6",
                    h2 {
                        class: "text-xl font-bold text-gray-900",
                        "Данные профиля"
                    }
                    if let Some(account_line) = account_line {
                        p {
                            class: "mt-1 text-sm text-gray-500",
                            "{account_line}"
                        }
                    }
                    div {
                        class: "mt-4",
                        {profile_form}
                    }
                }
                div {
                    class: "mt-6 bg-white border border-gray-200 rounded-lg p-6",
                    h2 {
                        class: "text-xl font-bold text-gray-900 mb-4",
                        "Бронирования"
                    }
                    if let Some(action_message) = action_message {
                        div {
                            class: "mb-4 p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                            "{action_message}"
                        }
                    }
                    {reservations_section}
                }
            }
        }
    }
}
