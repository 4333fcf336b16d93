use axum::{extract::State, routing::get, Router};
use maud::Markup;

use crate::{
    extractors::{AuthGuard, IsHtmx, Session},
    handlers::leave_attempt,
    rejections::AppError,
    services::catalog::CatalogFilter,
    views::{self, homepage as homepage_views},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(homepage))
        .route("/profile", get(profile))
}

async fn homepage(
    State(state): State<AppState>,
    Session(scope): Session,
    IsHtmx(is_htmx): IsHtmx,
) -> Result<Markup, AppError> {
    let user = leave_attempt(&scope).await;
    let featured = state.catalog.list(&CatalogFilter::default()).await?;

    Ok(views::render(
        is_htmx,
        "Home",
        homepage_views::landing_page(user.as_ref(), &featured),
        user.as_ref(),
    ))
}

async fn profile(
    AuthGuard(user): AuthGuard,
    Session(scope): Session,
    IsHtmx(is_htmx): IsHtmx,
) -> Markup {
    leave_attempt(&scope).await;
    views::render(is_htmx, "Profile", homepage_views::profile(&user), Some(&user))
}
