pub mod extractors;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod services;
pub mod session;
pub mod statics;
pub mod utils;
pub mod views;

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::{services::catalog::CatalogService, session::SessionStore};

#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    pub catalog: CatalogService,
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(secure_cookies: bool) -> Self {
        Self {
            sessions: SessionStore::default(),
            catalog: CatalogService::new(fixtures::FixtureRepository),
            secure_cookies,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::auth::routes())
        .merge(handlers::quizzes::routes())
        .merge(handlers::quiz::routes())
        .merge(handlers::results::routes())
        .merge(handlers::certificate::routes())
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(csrf_check))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            session::session_scope,
        ))
        .nest("/static", statics::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            tracing::warn!("rejected {} {} without HX-Request", req.method(), req.uri());
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
