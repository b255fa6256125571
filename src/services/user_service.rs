use std::sync::Arc;

use crate::error::Result;
use crate::models::user::User;
use crate::repository::UserRepository;

#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// `None` means the email is already taken.
    pub async fn save(&self, user: User) -> Result<Option<User>> {
        self.users.save(user).await
    }

    pub async fn find_by_email_and_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>> {
        self.users.find_by_email_and_password(email, password).await
    }
}
