#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};
use route::Route;
use session::Session;

mod api;
mod components;
mod guard;
mod pages;
mod route;
mod session;

pub static BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(x) => x,
    None => "http://localhost:5000",
};

fn main() {
    // Init logger
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("starting app");
    launch(App);
}

pub static SESSION: GlobalSignal<Session> = Signal::global(session::load);

fn App() -> Element {
    rsx! {
        document::Stylesheet {
            href: asset!("/assets/tailwind.css")
        }
        Router::<Route> {}
    }
}
