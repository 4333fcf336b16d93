use axum::{
    extract::{Form, Path, Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{
    extractors::{AuthGuard, IsHtmx, Session},
    handlers::{hx_redirect, leave_attempt},
    names,
    rejections::AppError,
    services::{catalog::CatalogFilter, registration::ParticipantDetails},
    views::{self, components, quizzes as quiz_views},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quizzes", get(catalog))
        .route("/quizzes/{id}/instructions", get(instructions))
        .route("/quizzes/{id}/details", get(details_page).post(details_post))
}

async fn catalog(
    State(state): State<AppState>,
    Session(scope): Session,
    IsHtmx(is_htmx): IsHtmx,
    Query(filter): Query<CatalogFilter>,
) -> Result<Markup, AppError> {
    let user = leave_attempt(&scope).await;
    let quizzes = state.catalog.list(&filter).await?;

    Ok(views::render(
        is_htmx,
        "Quizzes",
        quiz_views::catalog_page(&filter, &quizzes),
        user.as_ref(),
    ))
}

async fn instructions(
    State(state): State<AppState>,
    Path(quiz_id): Path<String>,
) -> Result<Markup, AppError> {
    let quiz = state.catalog.quiz(&quiz_id).await?;
    Ok(quiz_views::instructions_dialog(&quiz))
}

#[derive(Deserialize)]
struct LanguageQuery {
    language: Option<String>,
}

async fn details_page(
    State(state): State<AppState>,
    AuthGuard(user): AuthGuard,
    Session(scope): Session,
    IsHtmx(is_htmx): IsHtmx,
    Path(quiz_id): Path<String>,
    Query(query): Query<LanguageQuery>,
) -> Result<Markup, AppError> {
    let quiz = state.catalog.quiz(&quiz_id).await?;
    leave_attempt(&scope).await;

    let details = ParticipantDetails {
        language: query
            .language
            .unwrap_or_else(|| quiz_views::LANGUAGES[0].to_string()),
        ..ParticipantDetails::from(&user)
    };
    let body = html! {
        @if is_htmx {
            (components::clear_modal())
        }
        (quiz_views::details_page(&quiz, &details, None))
    };

    Ok(views::render(is_htmx, &quiz.title, body, Some(&user)))
}

/// Valid details send the browser to the quiz page, whose full load starts
/// the attempt.
async fn details_post(
    State(state): State<AppState>,
    AuthGuard(_user): AuthGuard,
    Path(quiz_id): Path<String>,
    Form(details): Form<ParticipantDetails>,
) -> Result<Response, AppError> {
    let quiz = state.catalog.quiz(&quiz_id).await?;

    match details.validate() {
        Ok(()) => {
            tracing::info!(
                "participant details confirmed for quiz {} in {}",
                quiz.id,
                details.language
            );
            hx_redirect(&names::quiz_url(&quiz.id))
        }
        Err(err) => Ok(quiz_views::details_page(&quiz, &details, Some(&err)).into_response()),
    }
}
