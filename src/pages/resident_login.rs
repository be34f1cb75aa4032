use anyhow::anyhow;
use dioxus::prelude::*;

use crate::api::{LoginRequest, LoginResponse, MessageResponse};
use crate::route::Route;
use crate::session::{self, Role, Session};
use crate::{BACKEND_URL, SESSION};

pub fn ResidentLogin() -> Element {
    let navigator = use_navigator();

    let mut email = use_signal(|| "".to_string());
    let mut password = use_signal(|| "".to_string());
    let mut message_signal = use_signal(|| Option::<String>::None);
    let mut is_loading_signal = use_signal(|| false);

    let message = message_signal();
    let is_loading = is_loading_signal();

    rsx! {
        div {
            class: "max-w-sm w-full p-6 bg-white border border-gray-200 rounded-lg shadow-sm",
            h5 {
                class: "mb-4 text-2xl font-bold tracking-tight text-gray-900",
                "Вход для резидентов"
            }
            form {
                onsubmit: move |_| {
                    is_loading_signal.set(true);
                    message_signal.set(None);

                    spawn(async move {
                        let task: Result<(), anyhow::Error> = async move {
                            let client = reqwest::Client::new();
                            let response = client
                                .post(format!("{}/api/resident/login", BACKEND_URL))
                                .json(&LoginRequest {
                                    email: email.read().clone(),
                                    password: password.read().clone(),
                                })
                                .send()
                                .await?;

                            if !response.status().is_success() {
                                let err = response.json::<MessageResponse>().await?;
                                return Err(anyhow!(err.message));
                            }

                            let res = response.json::<LoginResponse>().await?;
                            let role = Role::parse(res.role.as_str())
                                .ok_or(anyhow!("Неизвестная роль: {}", res.role))?;

                            session::persist(res.access_token.as_str(), role)?;
                            *SESSION.write() = Session::authenticated(res.access_token, role);

                            navigator.replace(Route::ResidentProfile);

                            Ok(())
                        }
                        .await;

                        if let Err(e) = task {
                            message_signal.set(Some(e.to_string()));
                        }
                        is_loading_signal.set(false);
                    });
                },
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
                    class: "mt-4",
                    label {
                        r#for: "password",
                        class: "block mb-2 text-sm font-medium text-gray-900",
                        "Пароль"
                    }
                    input {
                        r#type: "password",
                        id: "password",
                        class: "bg-gray-50 border border-gray-300 text-gray-900 text-sm rounded-lg focus:ring-blue-500 focus:border-blue-500 block w-full p-2.5",
                        required: 1,
                        value: "{password}",
                        oninput: move |event| password.set(event.value())
                    }
                }
                if let Some(message) = message {
                    div {
                        class: "mt-4 p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                        "{message}"
                    }
                }
                button {
                    r#type: "submit",
                    disabled: is_loading,
                    class: "mt-4 w-full text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center disabled:opacity-50",
                    if is_loading {
                        "Входим..."
                    } else {
                        "Войти"
                    }
                }
            }
            div {
                class: "mt-4 text-sm",
                Link {
                    class: "text-gray-500 hover:underline",
                    to: Route::Login,
                    "Обычный вход"
                }
            }
        }
    }
}
