use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use std::sync::Arc;

use crate::domain::{SessionStore, UserStore};

pub type UserStoreType = Arc<dyn UserStore + Send + Sync>;
pub type SessionStoreType = Arc<dyn SessionStore + Send + Sync>;

#[derive(Clone)]
pub struct AppState {
    pub user_store: UserStoreType,
    pub session_store: SessionStoreType,
    pub session_key: Key,
}

impl AppState {
    pub fn new(
        user_store: UserStoreType,
        session_store: SessionStoreType,
        session_key: Key,
    ) -> Self {
        Self {
            user_store,
            session_store,
            session_key,
        }
    }
}

// Lets handlers extract a `PrivateCookieJar` signed with the session key.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.session_key.clone()
    }
}
