use axum::{
    extract::{Form, Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    extractors::{AuthGuard, IsHtmx, Session},
    handlers::hx_redirect,
    names,
    rejections::{AppError, ValidationError},
    services::attempt::{Phase, QuizAttempt},
    session::ScopeHandle,
    views::{self, attempt as attempt_views},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/{id}", get(quiz_page))
        .route("/quiz/{id}/clock", get(clock))
        .route("/quiz/{id}/answer", post(answer))
        .route("/quiz/{id}/clear", post(clear))
        .route("/quiz/{id}/next", post(next))
        .route("/quiz/{id}/previous", post(previous))
        .route("/quiz/{id}/skip", post(skip))
        .route("/quiz/{id}/jump/{index}", post(jump))
        .route("/quiz/{id}/submit", post(submit))
        .route("/quiz/{id}/submit/confirm", post(confirm_submit))
        .route("/quiz/{id}/submit/cancel", post(cancel_submit))
}

const NO_ATTEMPT: AppError = AppError::NotFound("no quiz in progress");

/// A full page load always starts a fresh attempt. htmx navigation reuses
/// the one already running for this quiz.
async fn quiz_page(
    State(state): State<AppState>,
    AuthGuard(user): AuthGuard,
    Session(scope): Session,
    IsHtmx(is_htmx): IsHtmx,
    Path(quiz_id): Path<String>,
) -> Result<Response, AppError> {
    let mut scope = scope.lock().await;

    let running = is_htmx && scope.attempt_for(&quiz_id).await.is_some();
    if !running {
        let attempt = state.catalog.start_attempt(&quiz_id).await?;
        scope.mount_attempt(attempt);
    }

    let attempt = scope.attempt_for(&quiz_id).await.ok_or(NO_ATTEMPT)?;
    let attempt = attempt.lock().await;
    let title = attempt.quiz().title.clone();
    Ok(views::render(
        is_htmx,
        &title,
        attempt_views::attempt_page(&attempt),
        Some(&user),
    )
    .into_response())
}

/// Runs `action` against the mounted attempt and re-renders its panel. Once
/// the attempt is submitted the result is collected and the browser is sent
/// to the thank-you page.
async fn act<F>(scope: &ScopeHandle, quiz_id: &str, action: F) -> Result<Response, AppError>
where
    F: FnOnce(&mut QuizAttempt) -> Result<(), ValidationError>,
{
    let mut scope = scope.lock().await;
    {
        let attempt = scope.attempt_for(quiz_id).await.ok_or(NO_ATTEMPT)?;
        let mut attempt = attempt.lock().await;
        if attempt.phase() != Phase::Submitted {
            action(&mut *attempt)?;
            if attempt.phase() != Phase::Submitted {
                return Ok(attempt_views::attempt_panel(&attempt).into_response());
            }
        }
    }

    scope.collect_result().await;
    hx_redirect(names::THANK_YOU_URL)
}

/// Polled every second by the attempt's clock.
async fn clock(Session(scope): Session, Path(quiz_id): Path<String>) -> Result<Response, AppError> {
    let mut scope = scope.lock().await;
    {
        let attempt = scope.attempt_for(&quiz_id).await.ok_or(NO_ATTEMPT)?;
        let attempt = attempt.lock().await;
        if attempt.phase() != Phase::Submitted {
            return Ok(attempt_views::clock(&attempt).into_response());
        }
    }

    scope.collect_result().await;
    hx_redirect(names::THANK_YOU_URL)
}

#[derive(Deserialize)]
struct AnswerPost {
    #[serde(default)]
    option: String,
}

async fn answer(
    Session(scope): Session,
    Path(quiz_id): Path<String>,
    Form(body): Form<AnswerPost>,
) -> Result<Response, AppError> {
    act(&scope, &quiz_id, |attempt| attempt.select_answer(&body.option)).await
}

async fn clear(Session(scope): Session, Path(quiz_id): Path<String>) -> Result<Response, AppError> {
    act(&scope, &quiz_id, QuizAttempt::clear_answer).await
}

async fn next(Session(scope): Session, Path(quiz_id): Path<String>) -> Result<Response, AppError> {
    act(&scope, &quiz_id, QuizAttempt::next).await
}

async fn previous(
    Session(scope): Session,
    Path(quiz_id): Path<String>,
) -> Result<Response, AppError> {
    act(&scope, &quiz_id, QuizAttempt::previous).await
}

async fn skip(Session(scope): Session, Path(quiz_id): Path<String>) -> Result<Response, AppError> {
    act(&scope, &quiz_id, QuizAttempt::skip).await
}

async fn jump(
    Session(scope): Session,
    Path((quiz_id, index)): Path<(String, usize)>,
) -> Result<Response, AppError> {
    act(&scope, &quiz_id, |attempt| attempt.jump_to(index)).await
}

async fn submit(Session(scope): Session, Path(quiz_id): Path<String>) -> Result<Response, AppError> {
    act(&scope, &quiz_id, QuizAttempt::request_submit).await
}

async fn confirm_submit(
    Session(scope): Session,
    Path(quiz_id): Path<String>,
) -> Result<Response, AppError> {
    act(&scope, &quiz_id, |attempt| {
        attempt.confirm_submit(Utc::now()).map(|_| ())
    })
    .await
}

async fn cancel_submit(
    Session(scope): Session,
    Path(quiz_id): Path<String>,
) -> Result<Response, AppError> {
    act(&scope, &quiz_id, QuizAttempt::cancel_submit).await
}
