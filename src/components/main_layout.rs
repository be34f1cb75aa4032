use dioxus::prelude::*;

use crate::route::Route;
use crate::session::Role;
use crate::{BACKEND_URL, SESSION};

#[component]
pub fn MainLayout() -> Element {
    let session = SESSION();

    let account = match session.role {
        Some(Role::User) => rsx! {
            Link {
                to: Route::UserProfile,
                class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center",
                "Личный кабинет"
            }
        },
        Some(Role::Resident) => rsx! {
            Link {
                to: Route::ResidentProfile,
                class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center",
                "Кабинет резидента"
            }
        },
        Some(Role::Admin) => rsx! {
            a {
                href: "{BACKEND_URL}/admin-panel/",
                class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center",
                "Админ-панель"
            }
        },
        None => rsx! {
            Link {
                to: Route::Login,
                class: "text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-4 py-2 text-center",
                "Войти"
            }
        },
    };

    rsx! {
        header {
            class: "bg-white border-b border-gray-200",
            nav {
                class: "max-w-6xl mx-auto flex flex-wrap items-center justify-between gap-4 p-4",
                Link {
                    to: Route::MainPage,
                    class: "text-2xl font-bold tracking-tight text-gray-900",
                    "УКНО"
                }
                ul {
                    class: "flex flex-wrap items-center gap-6 text-sm font-medium text-gray-700",
                    li {
                        Link {
                            to: Route::EventsFeed,
                            class: "hover:text-blue-700",
                            "Афиша"
                        }
                    }
                    li {
                        Link {
                            to: Route::News,
                            class: "hover:text-blue-700",
                            "Новости"
                        }
                    }
                    li {
                        Link {
                            to: Route::Ukno,
                            class: "hover:text-blue-700",
                            "Об УКНО"
                        }
                    }
                    li {
                        Link {
                            to: Route::Requesits,
                            class: "hover:text-blue-700",
                            "Реквизиты"
                        }
                    }
                }
                {account}
            }
        }
        main {
            class: "max-w-6xl w-full mx-auto p-4 min-h-screen",
            Outlet::<Route> {}
        }
        footer {
            class: "bg-white border-t border-gray-200 mt-12",
            div {
                class: "max-w-6xl mx-auto flex flex-wrap items-center justify-between gap-2 p-4 text-sm text-gray-500",
                p {
                    "Креативное пространство УКНО"
                }
                Link {
                    to: Route::Requesits,
                    class: "hover:text-blue-700",
                    "Реквизиты"
                }
            }
        }
    }
}
