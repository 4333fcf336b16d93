use axum::{
    extract::Form,
    routing::{get, post},
    Router,
};
use maud::Markup;

use crate::{
    extractors::{IsHtmx, Session},
    handlers::leave_attempt,
    services::registration::Feedback,
    views::{self, results as result_views},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/quiz-thank-you", get(thank_you))
        .route("/quiz-thank-you/feedback", post(feedback_post))
}

async fn thank_you(Session(scope): Session, IsHtmx(is_htmx): IsHtmx) -> Markup {
    let user = leave_attempt(&scope).await;
    let scope = scope.lock().await;
    let body = match scope.result() {
        Some(result) => result_views::thank_you_page(user.as_ref(), result),
        None => result_views::no_result_page(),
    };
    views::render(is_htmx, "Thank You", body, user.as_ref())
}

async fn feedback_post(Session(scope): Session, Form(body): Form<Feedback>) -> Markup {
    match body.validate() {
        Ok(rating) => {
            let scope = scope.lock().await;
            let quiz_id = scope.result().map(|r| r.quiz_id.as_str()).unwrap_or("-");
            tracing::info!(
                "feedback for quiz {quiz_id}: rating={rating}, comment={:?}",
                body.comment.trim()
            );
            result_views::feedback_thanks()
        }
        Err(err) => result_views::feedback_form(Some(&err)),
    }
}
