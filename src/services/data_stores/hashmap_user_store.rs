use color_eyre::eyre::WrapErr;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::{User, UserId, UserStore, UserStoreError};

#[derive(Default)]
pub struct HashmapUserStore {
    table: RwLock<UserTable>,
}

#[derive(Default)]
struct UserTable {
    users: HashMap<UserId, User>,
    last_id: i32,
}

#[async_trait::async_trait]
impl UserStore for HashmapUserStore {
    #[tracing::instrument(name = "Adding user to hashmap store", skip_all)]
    async fn create(&self, user: &mut User) -> Result<(), UserStoreError> {
        user.validate()?;
        user.hash_password()
            .await
            .wrap_err("failed to hash password")
            .map_err(UserStoreError::UnexpectedError)?;

        let mut table = self.table.write().await;

        if table.users.values().any(|u| u.email == user.email) {
            return Err(UserStoreError::UserAlreadyExists);
        }

        table.last_id += 1;
        user.id = UserId::new(table.last_id);
        user.sanitize();
        table.users.insert(user.id, user.clone());

        Ok(())
    }

    async fn find(&self, id: UserId) -> Result<User, UserStoreError> {
        match self.table.read().await.users.get(&id) {
            Some(user) => Ok(user.clone()),
            None => Err(UserStoreError::RecordNotFound),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<User, UserStoreError> {
        self.table
            .read()
            .await
            .users
            .values()
            .find(|u| u.email == email)
            .cloned()
            .ok_or(UserStoreError::RecordNotFound)
    }
}
