//! 会话 - simplified identity gate
//!
//! Login accepts any credentials with a non-blank username. The cart only
//! asks whether someone is signed in before adding items.

use parking_lot::RwLock;
use shared::error::{AppError, AppResult};

/// Signed-in user context
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentUser {
    /// 用户 ID
    pub id: String,
    /// 用户名
    pub username: String,
    /// Login time (Unix millis)
    pub logged_in_at: i64,
}

/// Session state shared between the cart and the login flow
#[derive(Debug, Default)]
pub struct Session {
    user: RwLock<Option<CurrentUser>>,
}

impl Session {
    /// Create a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session that is already signed in (tests, demo)
    pub fn signed_in(username: &str) -> Self {
        let session = Self::new();
        *session.user.write() = Some(Self::make_user(username));
        session
    }

    /// Sign in; the password is not checked
    pub fn login(&self, username: &str, _password: &str) -> AppResult<CurrentUser> {
        let username = username.trim();
        if username.is_empty() {
            return Err(
                AppError::validation("username must not be blank").with_detail("field", "username")
            );
        }

        let user = Self::make_user(username);
        *self.user.write() = Some(user.clone());
        tracing::info!(user_id = %user.id, username = %user.username, "User signed in");
        Ok(user)
    }

    pub fn logout(&self) {
        if let Some(user) = self.user.write().take() {
            tracing::info!(user_id = %user.id, "User signed out");
        }
    }

    pub fn current_user(&self) -> Option<CurrentUser> {
        self.user.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    fn make_user(username: &str) -> CurrentUser {
        CurrentUser {
            id: uuid::Uuid::new_v4().to_string(),
            username: username.to_string(),
            logged_in_at: shared::util::now_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_new_session_is_signed_out() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_login_accepts_any_password() {
        let session = Session::new();
        let user = session.login("  alice ", "").unwrap();
        assert_eq!(user.username, "alice");
        assert!(session.is_authenticated());
        assert_eq!(session.current_user(), Some(user));
    }

    #[test]
    fn test_login_rejects_blank_username() {
        let session = Session::new();
        let err = session.login("   ", "secret").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout() {
        let session = Session::signed_in("bob");
        assert!(session.is_authenticated());
        session.logout();
        assert!(!session.is_authenticated());
    }
}
