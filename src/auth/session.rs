use crate::models::UserRegistration;
use tower_sessions::{session, Session};

pub const USER_ID_KEY: &str = "user_id";
pub const USER_NAME_KEY: &str = "user_name";

/// Mark `session` as authenticated for `user`.
///
/// The session id is rotated first so a pre-login id cannot be reused.
pub async fn establish(session: &Session, user: &UserRegistration) -> Result<(), session::Error> {
    session.cycle_id().await?;
    session.insert(USER_ID_KEY, user.id).await?;
    session.insert(USER_NAME_KEY, user.display_name()).await?;
    Ok(())
}

pub async fn current_user_id(session: &Session) -> Result<Option<i64>, session::Error> {
    session.get::<i64>(USER_ID_KEY).await
}

pub async fn current_user_name(session: &Session) -> Result<Option<String>, session::Error> {
    session.get::<String>(USER_NAME_KEY).await
}

pub async fn clear(session: &Session) -> Result<(), session::Error> {
    session.flush().await
}
