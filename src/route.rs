use dioxus::prelude::*;

use crate::{
    components::{login_layout::LoginLayout, main_layout::MainLayout},
    guard::{AccessPolicy, Guard},
    pages::{
        admin_login::AdminLogin, change_event::ChangeEvent, event_page::EventPage,
        events_feed::EventsFeed, login::Login, main::MainPage, new_event::NewEvent, news::News,
        payment::Payment, registration::Registration, requesits::Requesits,
        resident_login::ResidentLogin, resident_profile::ResidentProfile, ukno::Ukno,
        user_profile::UserProfile,
    },
    session::Role,
};

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Guard)]
        #[layout(MainLayout)]
            #[route("/")]
            MainPage,
            #[route("/events")]
            EventsFeed,
            #[route("/events/:id")]
            EventPage { id: i32 },
            #[route("/news")]
            News,
            #[route("/requesits")]
            Requesits,
            #[route("/ukno")]
            Ukno,
        #[end_layout]
        #[layout(LoginLayout)]
            #[route("/login")]
            Login,
            #[route("/resident-login")]
            ResidentLogin,
            #[route("/admin-login")]
            AdminLogin,
            #[route("/register")]
            Registration,
        #[end_layout]
        #[route("/payment/:id?:url")]
        Payment { id: String, url: String },
        #[route("/profile")]
        UserProfile,
        #[route("/resident-profile")]
        ResidentProfile,
        #[route("/newEvent")]
        NewEvent,
        #[route("/change-event/:id")]
        ChangeEvent { id: i32 },
}

impl Route {
    pub fn access(&self) -> AccessPolicy {
        match self {
            Route::MainPage
            | Route::EventsFeed
            | Route::EventPage { .. }
            | Route::News
            | Route::Requesits
            | Route::Ukno
            | Route::Login
            | Route::ResidentLogin
            | Route::AdminLogin
            | Route::Registration => AccessPolicy::public(),
            Route::Payment { .. } => AccessPolicy::authenticated(),
            Route::UserProfile => AccessPolicy::role(Role::User),
            Route::ResidentProfile | Route::NewEvent | Route::ChangeEvent { .. } => {
                AccessPolicy::role(Role::Resident)
            }
        }
    }

    // Route names carried over from the previous frontend, the analytics
    // dashboards filter on these exact strings.
    pub fn name(&self) -> &'static str {
        match self {
            Route::MainPage => "MainPage",
            Route::EventsFeed => "EventsPage",
            Route::EventPage { .. } => "EventDetailPage",
            Route::News => "NewsPage",
            Route::Requesits => "requesits",
            Route::Ukno => "ukno",
            Route::Login => "LoginPage",
            Route::ResidentLogin => "ResidentLogin",
            Route::AdminLogin => "AdminLogin",
            Route::Registration => "RegisterPage",
            Route::Payment { .. } => "Payment",
            Route::UserProfile => "Profile",
            Route::ResidentProfile => "ResidentProfile",
            Route::NewEvent => "NewEvent",
            Route::ChangeEvent { .. } => "changeEvent",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("/", Route::MainPage)]
    #[case("/events", Route::EventsFeed)]
    #[case("/events/7", Route::EventPage { id: 7 })]
    #[case("/news", Route::News)]
    #[case("/requesits", Route::Requesits)]
    #[case("/ukno", Route::Ukno)]
    #[case("/login", Route::Login)]
    #[case("/resident-login", Route::ResidentLogin)]
    #[case("/admin-login", Route::AdminLogin)]
    #[case("/register", Route::Registration)]
    #[case("/profile", Route::UserProfile)]
    #[case("/resident-profile", Route::ResidentProfile)]
    #[case("/newEvent", Route::NewEvent)]
    #[case("/change-event/3", Route::ChangeEvent { id: 3 })]
    fn paths_resolve_to_their_pages(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(path.parse::<Route>().unwrap(), expected);
    }

    #[test]
    fn payment_path_carries_the_provider_reference() {
        let route: Route = "/payment/2f2c5e7b?url=checkout".parse().unwrap();

        assert_eq!(
            route,
            Route::Payment {
                id: "2f2c5e7b".to_string(),
                url: "checkout".to_string(),
            }
        );
    }

    #[rstest]
    #[case(Route::EventPage { id: 7 }, "/events/7")]
    #[case(Route::ChangeEvent { id: 3 }, "/change-event/3")]
    #[case(Route::NewEvent, "/newEvent")]
    #[case(Route::Registration, "/register")]
    fn pages_render_back_to_their_paths(#[case] route: Route, #[case] path: &str) {
        assert_eq!(route.to_string(), path);
    }

    #[test]
    fn unknown_paths_do_not_resolve() {
        assert!("/missing".parse::<Route>().is_err());
        assert!("/events/abc".parse::<Route>().is_err());
    }

    #[rstest]
    #[case(Route::MainPage, "MainPage")]
    #[case(Route::Requesits, "requesits")]
    #[case(Route::UserProfile, "Profile")]
    #[case(Route::ChangeEvent { id: 1 }, "changeEvent")]
    fn display_names_match_the_previous_frontend(#[case] route: Route, #[case] name: &str) {
        assert_eq!(route.name(), name);
    }
}
