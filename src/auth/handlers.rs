use crate::auth::session as auth_session;
use crate::error::Result;
use crate::handlers::{found, LOGIN_PATH, USERS_PATH};
use crate::services::{
    auth_service::{AuthServiceError, LoginRequest},
    user_service::{RegisterUserRequest, UserServiceError},
};
use crate::AppState;
use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{rejection::FormRejection, Form, Query, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

pub const MISSING_CREDENTIALS: &str = "Enter both email and password";
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const REGISTERED_NOTICE: &str = "Registration successful. Please log in.";

pub const GENDER_CHOICES: [&str; 3] = ["Male", "Female", "Other"];

#[derive(Template, WebTemplate)]
#[template(path = "registration/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub notice: Option<String>,
    pub email: String,
}

impl LoginTemplate {
    fn with_error(msg: &str, email: &str) -> Self {
        Self {
            error: Some(msg.to_string()),
            notice: None,
            email: email.to_string(),
        }
    }
}

#[derive(Template, WebTemplate)]
#[template(path = "registration/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub genders: Vec<GenderOption>,
}

pub struct GenderOption {
    pub value: &'static str,
    pub selected: bool,
}

pub fn gender_options(selected: &str) -> Vec<GenderOption> {
    GENDER_CHOICES
        .iter()
        .map(|&value| GenderOption {
            value,
            selected: value == selected,
        })
        .collect()
}

#[derive(Deserialize, Default)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

#[derive(Deserialize)]
pub struct LoginQuery {
    registered: Option<String>,
}

#[derive(Deserialize, Default)]
pub struct RegisterForm {
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
    #[serde(default)]
    gender: String,
}

/// A body that does not parse as a urlencoded form counts as an empty one,
/// so the page re-renders with its usual message instead of a 4xx.
fn form_or_default<T: Default>(form: std::result::Result<Form<T>, FormRejection>) -> T {
    match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            tracing::debug!("Unreadable form body, treating fields as empty: {}", rejection);
            T::default()
        }
    }
}

pub async fn login_page(Query(query): Query<LoginQuery>) -> LoginTemplate {
    LoginTemplate {
        error: None,
        notice: query
            .registered
            .is_some()
            .then(|| REGISTERED_NOTICE.to_string()),
        email: String::new(),
    }
}

pub async fn login_handler(
    State(app_state): State<AppState>,
    session: Session,
    form: std::result::Result<Form<LoginForm>, FormRejection>,
) -> Result<Response> {
    let form = form_or_default(form);

    if form.email.is_empty() || form.password.is_empty() {
        return Ok(LoginTemplate::with_error(MISSING_CREDENTIALS, &form.email).into_response());
    }

    let request = LoginRequest {
        email: form.email.clone(),
        password: form.password,
    };

    match app_state.auth_service.authenticate(request).await {
        Ok(user) => {
            auth_session::establish(&session, &user).await?;
            tracing::info!(user_id = user.id, "User logged in");
            Ok(found(USERS_PATH))
        }
        Err(AuthServiceError::InvalidCredentials) => {
            tracing::warn!(email = %form.email, "Rejected login attempt");
            Ok(LoginTemplate::with_error(INVALID_CREDENTIALS, &form.email).into_response())
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn logout_handler(session: Session) -> Result<Response> {
    auth_session::clear(&session).await?;
    Ok(found(LOGIN_PATH))
}

pub async fn register_page() -> RegisterTemplate {
    RegisterTemplate {
        error: None,
        first_name: String::new(),
        last_name: String::new(),
        email: String::new(),
        genders: gender_options(""),
    }
}

pub async fn register_handler(
    State(app_state): State<AppState>,
    form: std::result::Result<Form<RegisterForm>, FormRejection>,
) -> Result<Response> {
    let form = form_or_default(form);

    let request = RegisterUserRequest {
        first_name: form.first_name.clone(),
        last_name: form.last_name.clone(),
        email: form.email.clone(),
        password: form.password,
        gender: form.gender.clone(),
    };

    let error_msg = match app_state.user_service.register(request).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, "User registered");
            return Ok(found(&format!("{LOGIN_PATH}?registered=1")));
        }
        Err(UserServiceError::MissingField) => "All fields are required",
        Err(UserServiceError::InvalidEmail) => "Please enter a valid email address",
        Err(err) => return Err(err.into()),
    };

    Ok(RegisterTemplate {
        error: Some(error_msg.to_string()),
        first_name: form.first_name,
        last_name: form.last_name,
        email: form.email,
        genders: gender_options(&form.gender),
    }
    .into_response())
}
