use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::models::user::User;
use crate::utils::token::generate_session_token;

const SESSION_TOKEN_LENGTH: usize = 32;

/// In-memory cookie-session store. Sessions live for the lifetime of the
/// process, matching the request-per-thread server the original ran on.
#[derive(Clone, Default)]
pub struct SessionService {
    sessions: Arc<Mutex<HashMap<String, User>>>,
}

impl SessionService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&self, user: User) -> String {
        let token = generate_session_token(SESSION_TOKEN_LENGTH);
        self.sessions
            .lock()
            .expect("session store mutex poisoned")
            .insert(token.clone(), user);
        token
    }

    pub fn get(&self, token: &str) -> Option<User> {
        self.sessions
            .lock()
            .expect("session store mutex poisoned")
            .get(token)
            .cloned()
    }

    pub fn remove(&self, token: &str) {
        self.sessions
            .lock()
            .expect("session store mutex poisoned")
            .remove(token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            id: 1,
            email: "ann@mail.ru".to_string(),
            name: "Ann".to_string(),
            password: "qwerty".to_string(),
        }
    }

    #[test]
    fn create_then_get_then_remove() {
        let sessions = SessionService::new();
        let token = sessions.create(user());

        assert_eq!(sessions.get(&token).unwrap().email, "ann@mail.ru");

        sessions.remove(&token);
        assert!(sessions.get(&token).is_none());
    }

    #[test]
    fn tokens_are_unique_per_login() {
        let sessions = SessionService::new();
        let first = sessions.create(user());
        let second = sessions.create(user());
        assert_ne!(first, second);
    }
}
