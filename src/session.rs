use anyhow::{anyhow, Context};
use chrono::Utc;
use jsonwebtoken::DecodingKey;
use serde::Deserialize;
use std::fmt;

const AUTH_KEY: &str = "auth_key";
const ROLE_KEY: &str = "role";

/// Permission class carried by the session. The backend issues one of these
/// with every login response and the route table compares against it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Resident,
    Admin,
}

impl Role {
    pub fn parse(value: &str) -> Option<Role> {
        if value.eq_ignore_ascii_case("user") {
            Some(Role::User)
        } else if value.eq_ignore_ascii_case("resident") {
            Some(Role::Resident)
        } else if value.eq_ignore_ascii_case("admin") {
            Some(Role::Admin)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Resident => "resident",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the navigation guard reads: the access token (presence means
/// authenticated) and the role the backend reported at login. The router
/// never writes this, only the auth pages do.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub auth_key: Option<String>,
    pub role: Option<Role>,
}

impl Session {
    pub fn authenticated(token: String, role: Role) -> Session {
        Session {
            auth_key: Some(token),
            role: Some(role),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth_key.is_some()
    }
}

#[derive(Debug, Deserialize)]
struct Claims {
    exp: usize,
}

fn token_live(token: &str) -> bool {
    let mut validation = jsonwebtoken::Validation::new(jsonwebtoken::Algorithm::HS256);
    validation.insecure_disable_signature_validation();

    let key = DecodingKey::from_secret(&[]);
    let payload = match jsonwebtoken::decode::<Claims>(token, &key, &validation) {
        Ok(p) => p,
        Err(_) => return false,
    };

    payload.claims.exp > Utc::now().timestamp() as usize
}

/// Restores the session persisted by a previous login. A missing or expired
/// token degrades to the anonymous session and drops the stale keys.
pub fn load() -> Session {
    let stored = || -> Option<(String, Option<String>)> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(AUTH_KEY).ok()??;

        if !token_live(token.as_str()) {
            let _ = storage.remove_item(AUTH_KEY);
            let _ = storage.remove_item(ROLE_KEY);
            return None;
        }

        let role = storage.get_item(ROLE_KEY).ok()?;
        Some((token, role))
    };

    match stored() {
        Some((token, role)) => Session {
            auth_key: Some(token),
            role: role.as_deref().and_then(Role::parse),
        },
        None => Session::default(),
    }
}

pub fn persist(token: &str, role: Role) -> Result<(), anyhow::Error> {
    let storage = web_sys::window()
        .context("failed to get window")?
        .local_storage()
        .map_err(|_| anyhow!("failed to get local storage"))?
        .context("failed to get storage")?;

    storage
        .set_item(AUTH_KEY, token)
        .map_err(|_| anyhow!("failed to store auth key"))?;
    storage
        .set_item(ROLE_KEY, role.as_str())
        .map_err(|_| anyhow!("failed to store role"))?;

    Ok(())
}

pub fn clear() -> Result<(), anyhow::Error> {
    let storage = web_sys::window()
        .context("failed to get window")?
        .local_storage()
        .map_err(|_| anyhow!("failed to get local storage"))?
        .context("failed to get storage")?;

    storage
        .remove_item(AUTH_KEY)
        .map_err(|_| anyhow!("failed to clear auth key"))?;
    storage
        .remove_item(ROLE_KEY)
        .map_err(|_| anyhow!("failed to clear role"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct TestClaims {
        sub: String,
        exp: usize,
    }

    fn token_with_exp(exp: i64) -> String {
        let claims = TestClaims {
            sub: "user@example.com".to_string(),
            exp: exp as usize,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap()
    }

    #[test]
    fn role_parsing_accepts_backend_spelling() {
        assert_eq!(Role::parse("user"), Some(Role::User));
        assert_eq!(Role::parse("resident"), Some(Role::Resident));
        assert_eq!(Role::parse("Admin"), Some(Role::Admin));
        assert_eq!(Role::parse("moderator"), None);
        assert_eq!(Role::parse(""), None);
    }

    #[test]
    fn role_round_trips_through_as_str() {
        for role in [Role::User, Role::Resident, Role::Admin] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
    }

    #[test]
    fn fresh_token_is_live() {
        let token = token_with_exp(Utc::now().timestamp() + 3600);
        assert!(token_live(token.as_str()));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = token_with_exp(Utc::now().timestamp() - 3600);
        assert!(!token_live(token.as_str()));
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(!token_live("not-a-jwt"));
        assert!(!token_live(""));
    }

    #[test]
    fn anonymous_session_has_no_role() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.role, None);
    }

    #[test]
    fn authenticated_session_keeps_token_and_role() {
        let session = Session::authenticated("token".to_string(), Role::Resident);
        assert!(session.is_authenticated());
        assert_eq!(session.role, Some(Role::Resident));
    }
}
