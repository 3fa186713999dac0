use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    PrivateCookieJar,
};

use crate::{
    domain::{Session, SessionStore, SessionStoreError},
    utils::constants::SESSION_COOKIE_NAME,
};

/// Keeps the whole session in one encrypted, authenticated cookie.
///
/// A cookie that fails decryption is dropped by the jar and reads as an
/// empty session.
pub struct CookieSessionStore {
    cookie_name: String,
}

impl CookieSessionStore {
    pub fn new(cookie_name: impl Into<String>) -> Self {
        Self {
            cookie_name: cookie_name.into(),
        }
    }
}

impl Default for CookieSessionStore {
    fn default() -> Self {
        Self::new(SESSION_COOKIE_NAME)
    }
}

#[async_trait::async_trait]
impl SessionStore for CookieSessionStore {
    async fn load(
        &self,
        jar: &PrivateCookieJar,
    ) -> Result<Session, SessionStoreError> {
        match jar.get(&self.cookie_name) {
            Some(cookie) => serde_json::from_str(cookie.value())
                .map_err(SessionStoreError::Decode),
            None => Ok(Session::default()),
        }
    }

    #[tracing::instrument(name = "Saving session cookie", skip_all)]
    async fn save(
        &self,
        jar: PrivateCookieJar,
        session: &Session,
    ) -> Result<PrivateCookieJar, SessionStoreError> {
        let value =
            serde_json::to_string(session).map_err(SessionStoreError::Encode)?;
        Ok(jar.add(create_session_cookie(self.cookie_name.clone(), value)))
    }
}

fn create_session_cookie(name: String, value: String) -> Cookie<'static> {
    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
