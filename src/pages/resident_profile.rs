use anyhow::anyhow;
use dioxus::prelude::*;

use crate::api::{
    auth_headers, Analytics, Excursion, ExcursionsResponse, MessageResponse, Profile,
};
use crate::route::Route;
use crate::session::{self, Session};
use crate::{BACKEND_URL, SESSION};

pub fn ResidentProfile() -> Element {
    let navigator = use_navigator();

    let mut profile_signal = use_signal(|| Option::<Profile>::None);
    let mut profile_error_signal = use_signal(|| Option::<String>::None);
    let mut analytics_signal = use_signal(|| Option::<Analytics>::None);
    let mut analytics_error_signal = use_signal(|| Option::<String>::None);
    let mut excursions_signal = use_signal(|| Option::<Vec<Excursion>>::None);
    let mut excursions_error_signal = use_signal(|| Option::<String>::None);
    let mut action_message_signal = use_signal(|| Option::<String>::None);
    let mut deleting_signal = use_signal(|| Option::<i32>::None);
    let mut reload_signal = use_signal(|| 0);

    use_effect(move || {
        spawn(async move {
            let task: Result<Profile, anyhow::Error> = async move {
                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                let response = reqwest::Client::new()
                    .get(format!("{}/api/resident/profile", BACKEND_URL))
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
        spawn(async move {
            let task: Result<Analytics, anyhow::Error> = async move {
                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                let response = reqwest::Client::new()
                    .get(format!("{}/api/resident/analytics", BACKEND_URL))
                    .headers(auth_headers(token.as_str())?)
                    .send()
                    .await?
                    .error_for_status()?;

                Ok(response.json::<Analytics>().await?)
            }
            .await;

            match task {
                Ok(res) => analytics_signal.set(Some(res)),
                Err(e) => analytics_error_signal.set(Some(e.to_string())),
            }
        });
    });

    use_effect(move || {
        // Re-reads after a deletion bumps the counter.
        let _version = reload_signal();

        spawn(async move {
            let task: Result<ExcursionsResponse, anyhow::Error> = async move {
                let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                let response = reqwest::Client::new()
                    .get(format!("{}/api/resident/excursions", BACKEND_URL))
                    .headers(auth_headers(token.as_str())?)
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

    let action_message = action_message_signal();
    let deleting = deleting_signal();

    let profile_card = match (profile_signal(), profile_error_signal()) {
        (Some(profile), _) => rsx! {
            dl {
                class: "space-y-2 text-sm",
                div {
                    dt { class: "font-medium text-gray-900", "ФИО" }
                    dd {
                        class: "text-gray-700",
                        {profile.full_name.as_deref().unwrap_or("—")}
                    }
                }
                div {
                    dt { class: "font-medium text-gray-900", "Электронная почта" }
                    dd { class: "text-gray-700", "{profile.email}" }
                }
                div {
                    dt { class: "font-medium text-gray-900", "Телефон" }
                    dd {
                        class: "text-gray-700",
                        {profile.phone.as_deref().unwrap_or("—")}
                    }
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

    let analytics_card = match (analytics_signal(), analytics_error_signal()) {
        (Some(analytics), _) => rsx! {
            div {
                class: "grid grid-cols-2 gap-4",
                div {
                    p { class: "text-3xl font-bold text-gray-900", "{analytics.total_excursions}" }
                    p { class: "text-sm text-gray-500", "событий" }
                }
                div {
                    p { class: "text-3xl font-bold text-gray-900", "{analytics.total_visitors}" }
                    p { class: "text-sm text-gray-500", "посетителей" }
                }
            }
            if let Some(popular) = analytics.most_popular_excursion {
                p {
                    class: "mt-4 text-sm text-gray-700",
                    "Самое популярное: {popular.title} ({popular.total_participants} чел.)"
                }
            }
            if !analytics.details.is_empty() {
                table {
                    class: "mt-4 w-full text-sm text-left",
                    thead {
                        tr {
                            class: "text-gray-500 border-b border-gray-200",
                            th { class: "py-2 font-medium", "Событие" }
                            th { class: "py-2 font-medium", "Сеансов" }
                            th { class: "py-2 font-medium", "Участников" }
                        }
                    }
                    tbody {
                        for detail in analytics.details {
                            tr {
                                class: "border-b border-gray-100",
                                td { class: "py-2 text-gray-900", "{detail.title}" }
                                td { class: "py-2 text-gray-700", "{detail.session_count}" }
                                td { class: "py-2 text-gray-700", "{detail.total_participants}" }
                            }
                        }
                    }
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

    let excursions_section = match (excursions_signal(), excursions_error_signal()) {
        (Some(excursions), _) => {
            if excursions.is_empty() {
                rsx! {
                    p { class: "text-gray-500", "Событий пока нет" }
                }
            } else {
                rsx! {
                    ul {
                        class: "space-y-4",
                        for excursion in excursions {
                            li {
                                class: "p-4 border border-gray-200 rounded-lg",
                                div {
                                    class: "flex items-start justify-between gap-4",
                                    div {
                                        p {
                                            class: "font-medium text-gray-900",
                                            "{excursion.title}"
                                        }
                                        if let Some(place) = excursion.place.as_deref() {
                                            p { class: "mt-1 text-sm text-gray-500", "{place}" }
                                        }
                                        p {
                                            class: "mt-1 text-sm text-gray-500",
                                            "Сеансов: {excursion.sessions.len()}"
                                        }
                                    }
                                    if excursion.is_active {
                                        span {
                                            class: "px-2 py-1 text-xs font-medium rounded bg-green-100 text-green-800",
                                            "Активно"
                                        }
                                    } else {
                                        span {
                                            class: "px-2 py-1 text-xs font-medium rounded bg-gray-100 text-gray-600",
                                            "Скрыто"
                                        }
                                    }
                                }
                                div {
                                    class: "mt-3 flex flex-wrap gap-4 text-sm",
                                    Link {
                                        class: "text-blue-700 hover:underline",
                                        to: Route::ChangeEvent { id: excursion.event_id },
                                        "Изменить"
                                    }
                                    button {
                                        r#type: "button",
                                        disabled: deleting == Some(excursion.event_id),
                                        class: "text-red-700 hover:underline disabled:opacity-50",
                                        onclick: move |_| {
                                            let event_id = excursion.event_id;
                                            deleting_signal.set(Some(event_id));
                                            action_message_signal.set(None);

                                            spawn(async move {
                                                let task: Result<(), anyhow::Error> = async move {
                                                    let token = SESSION()
                                                        .auth_key
                                                        .ok_or(anyhow!("Требуется вход"))?;

                                                    let response = reqwest::Client::new()
                                                        .delete(format!(
                                                            "{}/api/resident/excursions/{}",
                                                            BACKEND_URL, event_id
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
                                                deleting_signal.set(None);
                                                reload_signal += 1;
                                            });
                                        },
                                        "Удалить"
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
                class: "max-w-3xl mx-auto px-4",
                div {
                    class: "flex items-center justify-between mb-6",
                    h1 {
                        class: "text-3xl font-bold text-gray-900",
                        "Кабинет резидента"
                    }
                    div {
                        class: "flex items-center gap-4",
                        Link {
                            class: "text-sm text-blue-700 hover:underline",
                            to: Route::MainPage,
                            "На главную"
                        }
                        button {
                            r#type: "button",
                            class: "px-4 py-2 text-sm border border-red-300 text-red-700 rounded-lg hover:bg-red-50",
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
                                        action_message_signal.set(Some(e.to_string()));
                                    }
                                }
                            },
                            "Выйти"
                        }
                    }
                }
                div {
                    class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                    div {
                        class: "bg-white border border-gray-200 rounded-lg p-6",
                        h2 {
                            class: "text-xl font-bold text-gray-900 mb-4",
                            "Профиль"
                        }
                        {profile_card}
                    }
                    div {
                        class: "bg-white border border-gray-200 rounded-lg p-6",
                        h2 {
                            class: "text-xl font-bold text-gray-900 mb-4",
                            "Статистика"
                        }
                        {analytics_card}
                    }
                }
                div {
                    class: "mt-6 bg-white border border-gray-200 rounded-lg p-6",
                    div {
                        class: "flex items-center justify-between mb-4",
                        h2 {
                            class: "text-xl font-bold text-gray-900",
                            "Мои события"
                        }
                        Link {
                            class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2",
                            to: Route::NewEvent,
                            "Создать событие"
                        }
                    }
                    if let Some(action_message) = action_message {
                        div {
                            class: "mb-4 p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                            "{action_message}"
                        }
                    }
                    {excursions_section}
                }
            }
        }
    }
}
