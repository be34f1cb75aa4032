use anyhow::anyhow;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::{auth_headers, ReservationsResponse};
use crate::route::Route;
use crate::{BACKEND_URL, SESSION};

#[component]
pub fn Payment(id: String, url: String) -> Element {
    let mut paid_signal = use_signal(|| false);
    let mut error_signal = use_signal(|| Option::<String>::None);

    // The payment provider confirms through a backend webhook, the page
    // only has to wait until the reservation flips to paid.
    use_effect(use_reactive!(|id| {
        spawn(async move {
            loop {
                let task: Result<bool, anyhow::Error> = async {
                    let token = SESSION().auth_key.ok_or(anyhow!("Требуется вход"))?;

                    let response = reqwest::Client::new()
                        .get(format!("{}/api/user/reservations", BACKEND_URL))
                        .headers(auth_headers(token.as_str())?)
                        .send()
                        .await?
                        .error_for_status()?;

                    let res = response.json::<ReservationsResponse>().await?;

                    Ok(res
                        .reservations
                        .iter()
                        .any(|x| x.payment_id.as_deref() == Some(id.as_str()) && x.is_paid))
                }
                .await;

                match task {
                    Ok(true) => {
                        paid_signal.set(true);
                        break;
                    }
                    Ok(false) => {}
                    Err(e) => {
                        error_signal.set(Some(e.to_string()));
                        break;
                    }
                }

                TimeoutFuture::new(5_000).await;
            }
        });
    }));

    let paid = paid_signal();
    let error = error_signal();

    rsx! {
        div {
            class: "max-w-lg mx-auto py-12 px-4",
            h1 {
                class: "text-3xl font-bold text-gray-900 mb-6",
                "Оплата"
            }
            if paid {
                div {
                    class: "p-4 rounded-lg bg-green-50 text-green-800 border border-green-200",
                    "Оплата прошла, бронирование подтверждено."
                }
                Link {
                    class: "inline-block mt-6 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-6 py-2.5",
                    to: Route::UserProfile,
                    "Мои бронирования"
                }
            } else {
                p {
                    class: "text-gray-700",
                    "Завершите оплату на странице платёжной системы. "
                    "Статус обновится автоматически."
                }
                if !url.is_empty() {
                    a {
                        class: "inline-block mt-6 text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-6 py-2.5",
                        href: "{url}",
                        target: "_blank",
                        "Перейти к оплате"
                    }
                }
                if let Some(error) = error {
                    div {
                        class: "mt-6 p-3 text-sm rounded-lg bg-red-50 text-red-800 border border-red-200",
                        "{error}"
                    }
                } else {
                    div {
                        class: "mt-6 flex items-center text-sm text-gray-500",
                        svg {
                            class: "animate-spin -ml-1 mr-2 h-4 w-4 text-blue-700",
                            fill: "none",
                            view_box: "0 0 24 24",
                            circle {
                                class: "opacity-25",
                                cx: 12,
                                cy: 12,
                                r: 10,
                                stroke: "currentColor",
                                stroke_width: 4
                            }
                            path {
                                class: "opacity-75",
                                fill: "currentColor",
                                d: "M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
                            }
                        }
                        "Ожидаем подтверждение оплаты..."
                    }
                }
            }
        }
    }
}
