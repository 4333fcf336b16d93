pub mod auth;
pub mod certificate;
pub mod homepage;
pub mod quiz;
pub mod quizzes;
pub mod results;

use axum::{
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
};

use crate::{
    models::User,
    rejections::{AppError, ResultExt},
    session::ScopeHandle,
};

/// Page loads other than the quiz itself unmount any running attempt. A
/// submitted attempt's result is kept for the results views.
pub(crate) async fn leave_attempt(handle: &ScopeHandle) -> Option<User> {
    let mut scope = handle.lock().await;
    scope.collect_result().await;
    scope.unmount_attempt();
    scope.user().cloned()
}

pub(crate) fn hx_redirect(url: &str) -> Result<Response, AppError> {
    let mut headers = HeaderMap::new();
    let location = HeaderValue::from_str(url).reject("could not build redirect")?;
    headers.insert("HX-Redirect", location);
    Ok((headers, "").into_response())
}

pub(crate) fn hx_refresh() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert("HX-Refresh", HeaderValue::from_static("true"));
    (headers, "").into_response()
}

pub async fn not_found() -> AppError {
    AppError::NotFound("no such page")
}
