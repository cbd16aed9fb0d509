use crate::auth::password::hash_password;
use crate::models::{NewUserRegistration, UserRegistration};
use crate::repositories::{RepositoryError, UserRegistrationRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum UserServiceError {
    #[error("All fields are required")]
    MissingField,
    #[error("Invalid email address")]
    InvalidEmail,
    #[error("Password hashing failed: {0}")]
    HashingError(String),
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct RegisterUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub gender: String,
}

pub struct UserService {
    repository: Arc<dyn UserRegistrationRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRegistrationRepository>) -> Self {
        Self { repository }
    }

    /// Register a user, storing an Argon2 hash of the submitted password.
    ///
    /// Duplicate emails are accepted.
    pub async fn register(
        &self,
        request: RegisterUserRequest,
    ) -> Result<UserRegistration, UserServiceError> {
        let required = [
            &request.first_name,
            &request.last_name,
            &request.email,
            &request.password,
            &request.gender,
        ];
        if required.iter().any(|value| value.trim().is_empty()) {
            return Err(UserServiceError::MissingField);
        }

        self.validate_email(&request.email)?;

        let password_hash = hash_password(&request.password)
            .map_err(|e| UserServiceError::HashingError(e.to_string()))?;

        let user = self
            .repository
            .create(NewUserRegistration {
                first_name: request.first_name,
                last_name: request.last_name,
                email: request.email,
                password_hash,
                gender: request.gender,
            })
            .await?;

        Ok(user)
    }

    pub async fn list_users(&self) -> Result<Vec<UserRegistration>, UserServiceError> {
        Ok(self.repository.list_all().await?)
    }

    fn validate_email(&self, email: &str) -> Result<(), UserServiceError> {
        if !email.contains('@') {
            return Err(UserServiceError::InvalidEmail);
        }
        Ok(())
    }
}
