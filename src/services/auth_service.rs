use crate::auth::password::verify_password;
use crate::models::UserRegistration;
use crate::repositories::{RepositoryError, UserRegistrationRepository};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not found")]
    UserNotFound,
    #[error("Repository error: {0}")]
    RepositoryError(#[from] RepositoryError),
}

pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

pub struct AuthService {
    repository: Arc<dyn UserRegistrationRepository>,
}

impl AuthService {
    pub fn new(repository: Arc<dyn UserRegistrationRepository>) -> Self {
        Self { repository }
    }

    /// Resolve `request` to a stored user.
    ///
    /// Emails are not unique, so every registration with the email is
    /// checked in id order and the first whose hash verifies wins.
    pub async fn authenticate(
        &self,
        request: LoginRequest,
    ) -> Result<UserRegistration, AuthServiceError> {
        let candidates = self.repository.find_by_email(&request.email).await?;

        candidates
            .into_iter()
            .find(|user| verify_password(&request.password, &user.password))
            .ok_or(AuthServiceError::InvalidCredentials)
    }

    pub async fn get_user_by_id(&self, user_id: i64) -> Result<UserRegistration, AuthServiceError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or(AuthServiceError::UserNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::hash_password;
    use crate::repositories::user_registration_repository::MockUserRegistrationRepository;
    use chrono::Utc;
    use mockall::predicate::*;

    fn stored_user(id: i64, password: &str) -> UserRegistration {
        UserRegistration {
            id,
            first_name: "Test".to_string(),
            last_name: "User".to_string(),
            email: "testuser@example.com".to_string(),
            password: hash_password(password).unwrap(),
            gender: "Male".to_string(),
            date_registration: Utc::now(),
        }
    }

    fn login(password: &str) -> LoginRequest {
        LoginRequest {
            email: "testuser@example.com".to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let mut mock_repo = MockUserRegistrationRepository::new();

        mock_repo
            .expect_find_by_email()
            .with(eq("nonexistent@example.com"))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(Vec::new()) }));

        let service = AuthService::new(Arc::new(mock_repo));

        let request = LoginRequest {
            email: "nonexistent@example.com".to_string(),
            password: "testpass123".to_string(),
        };

        let result = service.authenticate(request).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let mut mock_repo = MockUserRegistrationRepository::new();
        let user = stored_user(1, "testpass123");

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| {
                let user = user.clone();
                Box::pin(async move { Ok(vec![user]) })
            });

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.authenticate(login("wrongpassword")).await;
        assert!(matches!(result, Err(AuthServiceError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_duplicate_email_picks_verifying_record() {
        let mut mock_repo = MockUserRegistrationRepository::new();
        let users = vec![stored_user(1, "first-password"), stored_user(2, "testpass123")];

        mock_repo
            .expect_find_by_email()
            .times(1)
            .returning(move |_| {
                let users = users.clone();
                Box::pin(async move { Ok(users) })
            });

        let service = AuthService::new(Arc::new(mock_repo));

        let user = service.authenticate(login("testpass123")).await.unwrap();
        assert_eq!(user.id, 2);
    }

    #[tokio::test]
    async fn test_get_user_by_id_not_found() {
        let mut mock_repo = MockUserRegistrationRepository::new();

        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .times(1)
            .returning(|_| Box::pin(async move { Ok(None) }));

        let service = AuthService::new(Arc::new(mock_repo));

        let result = service.get_user_by_id(1).await;
        assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
    }
}
