use maud::{html, Markup};

use crate::{
    models::Quiz,
    names,
    rejections::ValidationError,
    services::{
        catalog::{CatalogFilter, CatalogTab},
        registration::ParticipantDetails,
    },
    utils,
    views::components::{self, error_for},
};

pub const LANGUAGES: [&str; 2] = ["English", "हिन्दी"];

fn tabs(filter: &CatalogFilter) -> Markup {
    html! {
        nav.tabs {
            ul {
                @for tab in CatalogTab::ALL {
                    @let url = names::catalog_url(tab.slug(), filter.q.trim());
                    li {
                        a href=(url)
                          hx-get=(url)
                          hx-target="main"
                          hx-push-url="true"
                          aria-current=[(tab == filter.tab).then_some("page")] {
                            (tab.label())
                        }
                    }
                }
            }
        }
    }
}

fn quiz_card(quiz: &Quiz) -> Markup {
    html! {
        article id=(format!("quiz-{}", quiz.id)) {
            header {
                small { (quiz.status.label()) }
                h4 { (quiz.title) }
            }
            p { (quiz.organizer) }
            p {
                small {
                    (quiz.start_date) " to " (quiz.end_date)
                    br;
                    (quiz.total_questions) " questions | " (quiz.duration) " hrs"
                    br;
                    "Attempts: " (quiz.attempt_count)
                    " | Total score: " (quiz.total_score)
                    " | Passing score: " (quiz.passing_score)
                }
            }
            footer {
                button hx-get=(names::instructions_url(&quiz.id))
                       hx-target=(names::MODAL_TARGET) { "Start Quiz" }
            }
        }
    }
}

pub fn catalog_page(filter: &CatalogFilter, quizzes: &[Quiz]) -> Markup {
    html! {
        h1 { "Quizzes" }
        form role="search"
             hx-get=(names::QUIZZES_URL)
             hx-target="main"
             hx-push-url="true" {
            input type="hidden" name="tab" value=(filter.tab.slug());
            input type="search" name="q" value=(filter.q) placeholder="Search quizzes" aria-label="Search";
            input type="submit" value="Search";
        }
        (tabs(filter))
        @if quizzes.is_empty() {
            p { "No quizzes found." }
        } @else {
            div.quiz-grid {
                @for quiz in quizzes {
                    (quiz_card(quiz))
                }
            }
        }
    }
}

pub fn instructions_dialog(quiz: &Quiz) -> Markup {
    components::dialog(
        &quiz.title,
        html! {
            p { small { "Organised by " (quiz.organizer) } }
            ul {
                li { "The quiz has " (quiz.total_questions) " multiple choice questions." }
                li { "You have " (utils::format_clock(names::QUIZ_BUDGET_SECS)) " minutes once the quiz starts." }
                li { "Answers are saved as you select them. You can skip and come back to any question." }
                li { "When time runs out the quiz is submitted as it stands." }
                li { "You need " (quiz.passing_score) " correct answers to pass." }
                li { "The quiz can be attempted " (quiz.attempt_count) " time(s) until " (quiz.expiry_date) "." }
            }
            form hx-get=(names::details_url(&quiz.id))
                 hx-target="main"
                 hx-push-url="true" {
                label {
                    "Quiz language"
                    select name="language" {
                        @for language in LANGUAGES {
                            option value=(language) { (language) }
                        }
                    }
                }
                input type="submit" value="Continue";
            }
        },
    )
}

/// Participant details confirmed before the quiz starts. Prefilled from the
/// signed-in profile.
pub fn details_page(
    quiz: &Quiz,
    details: &ParticipantDetails,
    error: Option<&ValidationError>,
) -> Markup {
    html! {
        h1 { (quiz.title) }
        p { "Confirm your details to start the quiz. Language: " strong { (details.language) } }
        article {
            form hx-post=(names::details_url(&quiz.id)) hx-target="main" {
                input type="hidden" name="language" value=(details.language);
                label {
                    "Name"
                    input type="text" name="name" value=(details.name);
                    (error_for(error, "name"))
                }
                div.grid {
                    label {
                        "State"
                        input type="text" name="state" value=(details.state);
                        (error_for(error, "state"))
                    }
                    label {
                        "District"
                        input type="text" name="district" value=(details.district);
                        (error_for(error, "district"))
                    }
                }
                label {
                    "Mobile number"
                    input type="tel" name="mobile" inputmode="numeric" value=(details.mobile);
                    (error_for(error, "mobile"))
                }
                label { "Date of birth" }
                (components::date_of_birth_fields(&details.day, &details.month, &details.year))
                (error_for(error, "date_of_birth"))
                input type="submit" value="Start Quiz";
            }
        }
    }
}
