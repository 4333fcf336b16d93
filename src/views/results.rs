use maud::{html, Markup};

use crate::{
    models::{AttemptResult, User},
    names,
    rejections::ValidationError,
    views::components::error_for,
};

fn rating_fields(error: Option<&ValidationError>) -> Markup {
    html! {
        fieldset {
            legend { "How was the quiz?" }
            @for rating in names::MIN_RATING..=names::MAX_RATING {
                label {
                    input type="radio" name="rating" value=(rating);
                    (rating)
                }
            }
            (error_for(error, "rating"))
        }
    }
}

pub fn feedback_form(error: Option<&ValidationError>) -> Markup {
    html! {
        form id="feedback" hx-post=(names::FEEDBACK_URL) hx-swap="outerHTML" {
            (rating_fields(error))
            label {
                "Comments (optional)"
                textarea name="comment" rows="3" {}
            }
            input type="submit" value="Send Feedback";
        }
    }
}

pub fn feedback_thanks() -> Markup {
    html! {
        p id="feedback" { "Thank you for your feedback!" }
    }
}

pub fn thank_you_page(user: Option<&User>, result: &AttemptResult) -> Markup {
    html! {
        section.hero {
            h1 {
                "Thank you"
                @if let Some(user) = user {
                    " " (user.full_name())
                }
                " for participating!"
            }
            p { (result.quiz_title) }
            @if result.timed_out {
                p { small { "Time ran out, so your answers were submitted automatically." } }
            }
        }
        article {
            header { h3 { "Your score" } }
            p {
                strong { (result.score) " / " (result.total) }
                " (" (result.percentage()) "%)"
            }
            p { "Answered " (result.answered) " of " (result.total) " questions." }
            @if result.passed() {
                p { "You passed." }
            } @else {
                p { "You needed " (result.passing_score) " correct answers to pass." }
            }
            @if user.is_some() {
                a role="button" href=(names::CERTIFICATE_URL) { "Download Certificate" }
            }
            footer {
                small { "Submitted " (result.submitted_at.format("%d %b %Y, %H:%M UTC").to_string()) }
            }
        }
        article {
            header { h3 { "Share your feedback" } }
            (feedback_form(None))
        }
        a href=(names::QUIZZES_URL) { "Back to Quizzes" }
    }
}

/// Thank-you page reached without a submitted attempt.
pub fn no_result_page() -> Markup {
    html! {
        section.hero {
            h1 { "Thank you!" }
            p { "There is no submitted quiz to show yet." }
            a role="button" href=(names::QUIZZES_URL) { "Explore Quizzes" }
        }
    }
}
