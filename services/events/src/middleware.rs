//! Request-scoped current-user resolution

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::cookie::SignedCookieJar;

use crate::{
    AppState,
    error::{AppError, AuthError},
    session,
};

/// The user resolved from the session cookie
#[derive(Debug, Clone)]
pub struct SessionUser {
    pub user_id: i64,
    pub username: String,
}

/// Request-scoped session state, inserted before every handler runs
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    pub user: Option<SessionUser>,
}

impl AuthSession {
    /// The logged-in user, or a redirect-to-login error
    pub fn require_user(&self) -> Result<&SessionUser, AppError> {
        self.user
            .as_ref()
            .ok_or(AppError::Auth(AuthError::LoginRequired))
    }
}

/// Resolve the current user once per request and store the result in the
/// request extensions. A missing, unverifiable, or stale cookie resolves to
/// no user; only a storage failure during the lookup is an error.
pub async fn resolve_current_user(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = match session::authenticated_user_id(&jar) {
        Some(user_id) => state.users.find_by_id(user_id).await?.map(|user| SessionUser {
            user_id: user.user_id,
            username: user.username,
        }),
        None => None,
    };

    req.extensions_mut().insert(AuthSession { user });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_user_rejects_anonymous_sessions() {
        let auth = AuthSession::default();
        assert!(matches!(
            auth.require_user(),
            Err(AppError::Auth(AuthError::LoginRequired))
        ));
    }

    #[test]
    fn require_user_returns_the_resolved_user() {
        let auth = AuthSession {
            user: Some(SessionUser {
                user_id: 3,
                username: "alice".to_string(),
            }),
        };
        assert_eq!(auth.require_user().unwrap().user_id, 3);
    }
}
