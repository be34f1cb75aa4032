use dioxus::prelude::*;
use dioxus_logger::tracing::info;

use crate::route::Route;
use crate::session::{Role, Session};
use crate::SESSION;

/// Access metadata attached to a route entry. A required role only ever
/// appears together with the auth requirement, so the constructors keep the
/// two coupled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    pub requires_auth: bool,
    pub required_role: Option<Role>,
}

impl AccessPolicy {
    pub const fn public() -> AccessPolicy {
        AccessPolicy {
            requires_auth: false,
            required_role: None,
        }
    }

    pub const fn authenticated() -> AccessPolicy {
        AccessPolicy {
            requires_auth: true,
            required_role: None,
        }
    }

    pub const fn role(role: Role) -> AccessPolicy {
        AccessPolicy {
            requires_auth: true,
            required_role: Some(role),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    ToLogin,
    ToHome,
}

/// Decides a pending navigation. Pure over the target's access metadata and
/// the session passed in, so the role check never looks at hidden state.
pub fn decide(access: &AccessPolicy, session: &Session) -> NavDecision {
    if access.requires_auth {
        if !session.is_authenticated() {
            return NavDecision::ToLogin;
        }

        if let Some(required) = access.required_role {
            if session.role != Some(required) {
                return NavDecision::ToHome;
            }
        }
    }

    NavDecision::Allow
}

/// Outermost layout of the route tree: every navigation passes through here
/// before the target page mounts. Denied targets never render; the location
/// is replaced with the login page or the main page instead. Also resets the
/// viewport to the top on every committed navigation.
#[component]
pub fn Guard() -> Element {
    let route = use_route::<Route>();
    let navigator = use_navigator();

    let decision = decide(&route.access(), &SESSION());

    use_effect(use_reactive!(|route| {
        document::eval("window.scrollTo(0, 0);");

        let decision = decide(&route.access(), &SESSION());
        info!("navigate {} {:?}", route.name(), decision);

        match decision {
            NavDecision::ToLogin => {
                navigator.replace(Route::Login);
            }
            NavDecision::ToHome => {
                navigator.replace(Route::MainPage);
            }
            NavDecision::Allow => {}
        }
    }));

    match decision {
        NavDecision::Allow => rsx! {
            Outlet::<Route> {}
        },
        _ => rsx! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn anonymous() -> Session {
        Session::default()
    }

    fn logged_in(role: Role) -> Session {
        Session::authenticated("header.claims.signature".to_string(), role)
    }

    #[rstest]
    #[case(Route::Payment { id: "2f2c5e7b".to_string(), url: String::new() })]
    #[case(Route::UserProfile)]
    #[case(Route::ResidentProfile)]
    #[case(Route::NewEvent)]
    #[case(Route::ChangeEvent { id: 3 })]
    fn anonymous_visitor_is_sent_to_login(#[case] route: Route) {
        assert_eq!(
            decide(&route.access(), &anonymous()),
            NavDecision::ToLogin
        );
    }

    #[rstest]
    #[case(Route::UserProfile, Role::Resident)]
    #[case(Route::UserProfile, Role::Admin)]
    #[case(Route::ResidentProfile, Role::User)]
    #[case(Route::NewEvent, Role::User)]
    #[case(Route::NewEvent, Role::Admin)]
    #[case(Route::ChangeEvent { id: 1 }, Role::User)]
    fn wrong_role_is_sent_home(#[case] route: Route, #[case] role: Role) {
        assert_eq!(
            decide(&route.access(), &logged_in(role)),
            NavDecision::ToHome
        );
    }

    #[rstest]
    #[case(Route::UserProfile, Role::User)]
    #[case(Route::ResidentProfile, Role::Resident)]
    #[case(Route::NewEvent, Role::Resident)]
    #[case(Route::ChangeEvent { id: 9 }, Role::Resident)]
    fn matching_role_is_allowed(#[case] route: Route, #[case] role: Role) {
        assert_eq!(decide(&route.access(), &logged_in(role)), NavDecision::Allow);
    }

    #[rstest]
    #[case(Role::User)]
    #[case(Role::Resident)]
    #[case(Role::Admin)]
    fn payment_needs_auth_but_no_specific_role(#[case] role: Role) {
        let route = Route::Payment {
            id: "2f2c5e7b".to_string(),
            url: String::new(),
        };

        assert_eq!(decide(&route.access(), &logged_in(role)), NavDecision::Allow);
    }

    #[rstest]
    #[case(Route::MainPage)]
    #[case(Route::News)]
    #[case(Route::EventsFeed)]
    #[case(Route::Login)]
    fn public_routes_never_redirect(#[case] route: Route) {
        assert_eq!(decide(&route.access(), &anonymous()), NavDecision::Allow);
        assert_eq!(
            decide(&route.access(), &logged_in(Role::User)),
            NavDecision::Allow
        );
        assert_eq!(
            decide(&route.access(), &logged_in(Role::Resident)),
            NavDecision::Allow
        );
    }

    #[test]
    fn token_without_role_fails_role_gates() {
        let session = Session {
            auth_key: Some("header.claims.signature".to_string()),
            role: None,
        };

        assert_eq!(
            decide(&Route::UserProfile.access(), &session),
            NavDecision::ToHome
        );
        assert_eq!(
            decide(
                &Route::Payment { id: "x".to_string(), url: String::new() }.access(),
                &session
            ),
            NavDecision::Allow
        );
    }
}
