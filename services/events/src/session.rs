//! Session management via a signed cookie carrying the user id

use axum_extra::extract::cookie::{Cookie, Key, SameSite, SignedCookieJar};
use tracing::warn;

/// Name of the session cookie
pub const SESSION_COOKIE: &str = "session";

/// Load the cookie signing key from `SESSION_SECRET`. Falls back to a fresh
/// random key, in which case sessions do not survive a restart.
pub fn signing_key_from_env() -> Key {
    match std::env::var("SESSION_SECRET") {
        Ok(secret) if secret.len() >= 32 => Key::derive_from(secret.as_bytes()),
        Ok(_) => {
            warn!("SESSION_SECRET must be at least 32 bytes, using a random key");
            Key::generate()
        }
        Err(_) => {
            warn!("SESSION_SECRET not set, sessions reset on restart");
            Key::generate()
        }
    }
}

/// Bind a session to the given user id
pub fn establish(jar: SignedCookieJar, user_id: i64) -> SignedCookieJar {
    let cookie = Cookie::build((SESSION_COOKIE, user_id.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

/// Destroy the session binding; a no-op when no session exists
pub fn clear(jar: SignedCookieJar) -> SignedCookieJar {
    jar.remove(Cookie::build(SESSION_COOKIE).path("/"))
}

/// User id carried by a validly signed session cookie, if any
pub fn authenticated_user_id(jar: &SignedCookieJar) -> Option<i64> {
    jar.get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_jar() -> SignedCookieJar {
        SignedCookieJar::new(Key::generate())
    }

    #[test]
    fn establish_then_resolve_user_id() {
        let jar = establish(empty_jar(), 42);
        assert_eq!(authenticated_user_id(&jar), Some(42));
    }

    #[test]
    fn missing_cookie_resolves_to_none() {
        assert_eq!(authenticated_user_id(&empty_jar()), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let jar = clear(clear(establish(empty_jar(), 7)));
        assert_eq!(authenticated_user_id(&jar), None);
    }

    #[test]
    fn non_numeric_cookie_value_resolves_to_none() {
        let jar = empty_jar().add(Cookie::new(SESSION_COOKIE, "not-an-id"));
        assert_eq!(authenticated_user_id(&jar), None);
    }
}
