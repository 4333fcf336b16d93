use axum::{routing::get, Router};
use maud::Markup;

use crate::{
    extractors::{AuthGuard, IsHtmx, Session},
    handlers::leave_attempt,
    rejections::AppError,
    views::{self, certificate as certificate_views},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new().route("/certificate", get(certificate))
}

async fn certificate(
    AuthGuard(user): AuthGuard,
    Session(scope): Session,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    leave_attempt(&scope).await;
    let scope = scope.lock().await;
    let result = scope
        .result()
        .ok_or(AppError::NotFound("no submitted quiz"))?;

    Ok(views::render(
        is_htmx,
        "Certificate",
        certificate_views::certificate_page(&user, result),
        Some(&user),
    ))
}
