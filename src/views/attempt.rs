use maud::{html, Markup};

use crate::{
    names,
    services::attempt::{Phase, QuizAttempt},
};

fn action_button(quiz_id: &str, action: &str, label: &str, class: &str, disabled: bool) -> Markup {
    html! {
        button class=(class)
               hx-post=(names::quiz_action_url(quiz_id, action))
               hx-target=(names::ATTEMPT_TARGET)
               hx-swap="outerHTML"
               disabled[disabled] { (label) }
    }
}

/// Remaining time. Polls the server, which redirects once the attempt is over.
pub fn clock(attempt: &QuizAttempt) -> Markup {
    html! {
        span.clock id="quiz-clock"
             hx-get=(names::quiz_clock_url(&attempt.quiz().id))
             hx-trigger="every 1s"
             hx-swap="outerHTML" {
            (attempt.remaining_display())
        }
    }
}

fn palette(attempt: &QuizAttempt) -> Markup {
    let quiz_id = &attempt.quiz().id;
    html! {
        aside {
            p {
                mark { "Answered: " (attempt.answered_count()) }
                " "
                mark { "Pending: " (attempt.pending_count()) }
            }
            div.palette {
                @for (index, question) in attempt.questions().iter().enumerate() {
                    @let state = if question.is_answered() { "answered" } else { "pending" };
                    button class=(state)
                           aria-current=[(index == attempt.current_index()).then_some("step")]
                           hx-post=(names::quiz_jump_url(quiz_id, index))
                           hx-target=(names::ATTEMPT_TARGET)
                           hx-swap="outerHTML"
                           aria-label=(format!("Question {}", index + 1)) {
                        (index + 1)
                    }
                }
            }
        }
    }
}

fn submit_dialog(attempt: &QuizAttempt) -> Markup {
    let quiz_id = &attempt.quiz().id;
    html! {
        dialog open {
            article {
                h3 { "Submit the quiz?" }
                p {
                    "You have answered " (attempt.answered_count()) " of " (attempt.total())
                    " questions. " (attempt.pending_count()) " are still pending."
                }
                p { "You cannot change your answers after submitting." }
                footer {
                    (action_button(quiz_id, "submit/cancel", "Cancel", "secondary", false))
                    " "
                    button hx-post=(names::quiz_action_url(quiz_id, "submit/confirm"))
                           hx-target=(names::ATTEMPT_TARGET) { "Yes, Submit" }
                }
            }
        }
    }
}

/// The whole attempt panel. Every action swaps it in place.
pub fn attempt_panel(attempt: &QuizAttempt) -> Markup {
    let quiz_id = &attempt.quiz().id;
    let question = attempt.current_question();
    let index = attempt.current_index();
    let locked = attempt.phase() != Phase::InProgress;

    html! {
        div.attempt id="attempt" {
            section {
                header {
                    h3 { (attempt.quiz().title) }
                    p {
                        "Total marks: " (attempt.quiz().total_score)
                        " | Time left: " (clock(attempt))
                    }
                }
                article {
                    p { small { "Question " (index + 1) " of " (attempt.total()) } }
                    h4 { (question.prompt) }
                    fieldset disabled[locked] {
                        @for option in &question.options {
                            label {
                                input type="radio"
                                      name="option"
                                      value=(option)
                                      checked[question.selected.as_ref() == Some(option)]
                                      hx-post=(names::quiz_action_url(quiz_id, "answer"))
                                      hx-trigger="change"
                                      hx-target=(names::ATTEMPT_TARGET)
                                      hx-swap="outerHTML";
                                (option)
                            }
                        }
                    }
                    footer {
                        (action_button(quiz_id, "previous", "Previous", "secondary", locked || index == 0))
                        " "
                        (action_button(quiz_id, "clear", "Clear", "outline", locked || !question.is_answered()))
                        " "
                        (action_button(quiz_id, "skip", "Skip", "outline", locked || attempt.is_last()))
                        " "
                        (action_button(quiz_id, "next", "Next", "", locked || attempt.is_last()))
                    }
                }
                (action_button(quiz_id, "submit", "Submit Quiz", "contrast", locked))
            }
            (palette(attempt))
            @if attempt.phase() == Phase::ConfirmingSubmit {
                (submit_dialog(attempt))
            }
        }
    }
}

pub fn attempt_page(attempt: &QuizAttempt) -> Markup {
    html! {
        (attempt_panel(attempt))
        p.no-print {
            small { "Leaving this page discards the attempt." }
        }
    }
}
