pub mod users_handlers;

pub use users_handlers::users_list_handler;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

pub const LOGIN_PATH: &str = "/login";
pub const USERS_PATH: &str = "/users";
pub const REGISTER_PATH: &str = "/register";
pub const LOGOUT_PATH: &str = "/logout";

/// `302 Found` to `location`. axum's `Redirect` only offers 303/307/308.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}

pub async fn index_handler() -> Response {
    found(LOGIN_PATH)
}
