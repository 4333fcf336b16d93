use std::fmt;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::{names, views};

/// A field-level input problem, shown inline next to the form it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: &'static str,
}

impl ValidationError {
    pub const fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    Auth(&'static str),
    NotFound(&'static str),
    Config(&'static str),
    Internal(&'static str),
    Input(&'static str),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "validation error: {err}"),
            AppError::Auth(message) => write!(f, "authentication error: {message}"),
            AppError::NotFound(message) => write!(f, "not found: {message}"),
            AppError::Config(message) => write!(f, "configuration error: {message}"),
            AppError::Internal(message) => write!(f, "internal error: {message}"),
            AppError::Input(message) => write!(f, "input error: {message}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Input(_) => StatusCode::BAD_REQUEST,
            AppError::Config(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            AppError::Validation(err) => views::components::field_error(err),
            AppError::NotFound(_) => views::page("Not Found", views::not_found(), None),
            AppError::Auth(message) => error_page(status, message),
            AppError::Input(message) => error_page(status, message),
            AppError::Config(_) | AppError::Internal(_) => {
                tracing::error!("{self}");
                error_page(status, "Something went wrong")
            }
        };

        (status, body).into_response()
    }
}

fn error_page(status: StatusCode, message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            h1 { (status.as_u16()) }
            p { (message) }
            a href=(names::HOME_URL) { "Back to Home" }
        },
        None,
    )
}

pub trait ResultExt<T> {
    /// Logs the underlying error and maps it to an internal error with `message`.
    fn reject(self, message: &'static str) -> Result<T, AppError>;
}

impl<T, E: fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, message: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{message}: {e}");
            AppError::Internal(message)
        })
    }
}
