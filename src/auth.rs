//! Demo Authentication
//!
//! Users and the current session live in local storage as JSON. Passwords are
//! kept and compared in plaintext: this flow only demonstrates the UI.

use crate::config::ShopConfig;
use crate::error::{ShopError, ShopResult};
use crate::models::{Session, User};
use crate::storage::KeyValueStore;

pub const DUPLICATE_EMAIL_TEXT: &str = "An account with this email already exists.";
pub const BAD_CREDENTIALS_TEXT: &str = "Wrong email or password.";
pub const MISSING_FIELDS_TEXT: &str = "Please fill in all fields.";

pub struct DemoAuth<S: KeyValueStore> {
    storage: S,
    users_key: String,
    session_key: String,
}

fn same_email(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

impl<S: KeyValueStore> DemoAuth<S> {
    pub fn new(storage: S, config: &ShopConfig) -> Self {
        Self {
            storage,
            users_key: config.storage_key("users"),
            session_key: config.storage_key("session"),
        }
    }

    /// Registered users; unreadable data counts as none
    pub fn users(&self) -> Vec<User> {
        match self.storage.get_json::<Vec<User>>(&self.users_key) {
            Ok(users) => users.unwrap_or_default(),
            Err(e) => {
                log::warn!("user list unreadable, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    pub fn current_session(&self) -> Option<Session> {
        self.storage
            .get_json::<Session>(&self.session_key)
            .unwrap_or_else(|e| {
                log::warn!("session unreadable: {}", e);
                None
            })
    }

    pub fn signup(&self, name: &str, email: &str, password: &str) -> ShopResult<Session> {
        let (name, email) = (name.trim(), email.trim());
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(ShopError::Auth(MISSING_FIELDS_TEXT.to_string()));
        }

        let mut users = self.users();
        if users.iter().any(|u| same_email(&u.email, email)) {
            return Err(ShopError::Auth(DUPLICATE_EMAIL_TEXT.to_string()));
        }

        let user = User {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };
        let session = Session::from(&user);
        users.push(user);
        self.storage.set_json(&self.users_key, &users)?;
        self.storage.set_json(&self.session_key, &session)?;
        log::info!("signed up {}", session.email);
        Ok(session)
    }

    pub fn login(&self, email: &str, password: &str) -> ShopResult<Session> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ShopError::Auth(MISSING_FIELDS_TEXT.to_string()));
        }

        let session = self
            .users()
            .iter()
            .find(|u| same_email(&u.email, email) && u.password == password)
            .map(Session::from)
            .ok_or_else(|| ShopError::Auth(BAD_CREDENTIALS_TEXT.to_string()))?;

        self.storage.set_json(&self.session_key, &session)?;
        log::info!("logged in {}", session.email);
        Ok(session)
    }

    pub fn logout(&self) -> ShopResult<()> {
        self.storage.remove(&self.session_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn auth() -> DemoAuth<MemoryStorage> {
        DemoAuth::new(MemoryStorage::default(), &ShopConfig::default())
    }

    #[test]
    fn test_signup_starts_session() {
        let auth = auth();
        let session = auth.signup(" Eleni ", "eleni@example.com", "pw").unwrap();
        assert_eq!(session.name, "Eleni");
        assert_eq!(auth.current_session(), Some(session));
        assert_eq!(auth.users().len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let auth = auth();
        auth.signup("Eleni", "eleni@example.com", "pw").unwrap();
        let err = auth.signup("Other", " ELENI@example.com", "pw2").unwrap_err();
        assert_eq!(err, ShopError::Auth(DUPLICATE_EMAIL_TEXT.to_string()));
        assert_eq!(auth.users().len(), 1);
    }

    #[test]
    fn test_missing_fields_rejected() {
        let auth = auth();
        assert!(matches!(auth.signup("", "a@b.c", "pw"), Err(ShopError::Auth(_))));
        assert!(matches!(auth.login("a@b.c", ""), Err(ShopError::Auth(_))));
    }

    #[test]
    fn test_login_requires_matching_password() {
        let auth = auth();
        auth.signup("Eleni", "eleni@example.com", "secret").unwrap();
        auth.logout().unwrap();
        assert_eq!(auth.current_session(), None);

        let err = auth.login("eleni@example.com", "wrong").unwrap_err();
        assert_eq!(err, ShopError::Auth(BAD_CREDENTIALS_TEXT.to_string()));
        assert_eq!(auth.current_session(), None);

        let session = auth.login("eleni@example.com", "secret").unwrap();
        assert_eq!(session.email, "eleni@example.com");
        assert_eq!(auth.current_session(), Some(session));
    }

    #[test]
    fn test_corrupt_user_list_reads_as_empty() {
        let storage = MemoryStorage::default();
        storage.set("boutique.users", "{broken").unwrap();
        let auth = DemoAuth::new(storage, &ShopConfig::default());
        assert!(auth.users().is_empty());
        assert!(auth.signup("A", "a@example.com", "pw").is_ok());
    }
}
