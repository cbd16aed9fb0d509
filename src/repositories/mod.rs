pub mod user_registration_repository;

pub use user_registration_repository::{
    RepositoryError, SqliteUserRegistrationRepository, UserRegistrationRepository,
};
