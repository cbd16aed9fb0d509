use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A registered user as persisted in `user_registrations`.
///
/// `password` always holds an Argon2 PHC string, never plaintext.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserRegistration {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub gender: String,
    pub date_registration: DateTime<Utc>,
}

impl UserRegistration {
    /// Name used for display and stored in the session after login.
    pub fn display_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for UserRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.first_name, self.last_name)
    }
}

/// Fields needed to insert a new registration. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUserRegistration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub gender: String,
}
