use dioxus::prelude::*;

use crate::route::Route;

#[component]
pub fn LoginLayout() -> Element {
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex flex-col",
            header {
                class: "p-4",
                Link {
                    to: Route::MainPage,
                    class: "text-2xl font-bold tracking-tight text-gray-900",
                    "УКНО"
                }
            }
            div {
                class: "flex-1 flex items-start justify-center pt-12 px-4",
                Outlet::<Route> {}
            }
        }
    }
}
