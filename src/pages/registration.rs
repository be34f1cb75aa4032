use anyhow::anyhow;
use dioxus::prelude::*;

use crate::api::{MessageResponse, RegisterRequest};
use crate::route::Route;
use crate::{BACKEND_URL, SESSION};

pub fn Registration() -> Element {
    let navigator = use_navigator();

    let mut full_name = use_signal(|| "".to_string());
    let mut phone = use_signal(|| "".to_string());
    let mut email = use_signal(|| "".to_string());
    let mut password = use_signal(|| "".to_string());
    let mut message_signal = use_signal(|| Option::<(String, bool)>::None);
    let mut is_loading_signal = use_signal(|| false);

    let is_logged_in = SESSION.read().is_authenticated();

    use_effect(move || {
        if is_logged_in {
            navigator.replace(Route::MainPage);
        }
    });

    let message = message_signal();
    let is_loading = is_loading_signal();

    rsx! {
        div {
            class: "max-w-sm w-full p-6 bg-white border border-gray-200 rounded-lg shadow-sm",
            h5 {
                class: "mb-4 text-2xl font-bold tracking-tight text-gray-900",
                "Регистрация"
            }
            form {
                onsubmit: move |_| {
                    is_loading_signal.set(true);
                    message_signal.set(None);

                    spawn(async move {
                        let task: Result<String, anyhow::Error> = async move {
                            let client = reqwest::Client::new();
                            let response = client
                                .post(format!("{}/api/user/register", BACKEND_URL))
                                .json(&RegisterRequest {
                                    email: email.read().clone(),
                                    password: password.read().clone(),
                                    full_name: full_name.read().clone(),
                                    phone: phone.read().clone(),
                                })
                                .send()
                                .await?;

                            // Registration does not log the account in, the
                            // backend only replies with a confirmation text.
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
                    class: "mt-4",
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
                div {
                    class: "mt-4",
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
                    class: "mt-4 w-full text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center disabled:opacity-50",
                    if is_loading {
                        "Регистрируем..."
                    } else {
                        "Зарегистрироваться"
                    }
                }
            }
            div {
                class: "mt-4 text-sm text-gray-600",
                "Уже есть аккаунт? "
                Link {
                    class: "text-blue-700 hover:underline",
                    to: Route::Login,
                    "Войдите"
                }
            }
        }
    }
}
