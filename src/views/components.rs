use chrono::{Datelike, Utc};
use maud::{html, Markup};

use crate::{names, rejections::ValidationError};

/// htmx navigation link with href fallback + hx-get for in-page swap.
pub fn nav_link(href: &str, body: Markup) -> Markup {
    html! {
        a href=(href)
          hx-get=(href)
          hx-target="main"
          hx-push-url="true"
          hx-swap="innerHTML" {
            (body)
        }
    }
}

pub fn field_error(err: &ValidationError) -> Markup {
    html! {
        small."field-error" id=(format!("{}-error", err.field)) role="alert" {
            (err.message)
        }
    }
}

/// Inline error shown under `field` when `error` is about that field.
pub fn error_for(error: Option<&ValidationError>, field: &str) -> Markup {
    html! {
        @if let Some(err) = error.filter(|e| e.field == field) {
            (field_error(err))
        }
    }
}

/// A dialog rendered into the page's modal slot. The close button clears the slot.
pub fn dialog(title: &str, body: Markup) -> Markup {
    dialog_with_close(title, None, body)
}

/// Like [`dialog`], but closing also posts to `close_url`.
pub fn dialog_with_close(title: &str, close_url: Option<&str>, body: Markup) -> Markup {
    html! {
        dialog open {
            article {
                header {
                    @match close_url {
                        Some(url) => {
                            button aria-label="Close" rel="prev"
                                   hx-post=(url)
                                   hx-target=(names::MODAL_TARGET) {}
                        }
                        None => {
                            button aria-label="Close" rel="prev"
                                   onclick=(format!("document.getElementById('{}').innerHTML=''", names::MODAL_ID)) {}
                        }
                    }
                    h3 { (title) }
                }
                (body)
            }
        }
    }
}

/// Out-of-band swap that empties the modal slot.
pub fn clear_modal() -> Markup {
    html! {
        div id=(names::MODAL_ID) hx-swap-oob="true" {}
    }
}

pub fn date_of_birth_fields(day: &str, month: &str, year: &str) -> Markup {
    const MONTHS: [&str; 12] = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    let current_year = Utc::now().year();

    html! {
        fieldset role="group" {
            select name="day" aria-label="Day" required {
                option value="" selected[day.is_empty()] { "Day" }
                @for d in 1..=31u32 {
                    @let value = format!("{d:02}");
                    option value=(value) selected[value == day] { (value) }
                }
            }
            select name="month" aria-label="Month" required {
                option value="" selected[month.is_empty()] { "Month" }
                @for (i, name) in MONTHS.iter().enumerate() {
                    @let value = format!("{:02}", i + 1);
                    option value=(value) selected[value == month] { (name) }
                }
            }
            select name="year" aria-label="Year" required {
                option value="" selected[year.is_empty()] { "Year" }
                @for y in (current_year - 49..=current_year).rev() {
                    @let value = y.to_string();
                    option value=(value) selected[value == year] { (value) }
                }
            }
        }
    }
}

pub fn terms_checkbox(checked: bool) -> Markup {
    html! {
        label {
            input type="checkbox" name="accept_terms" checked[checked];
            "I accept the "
            a href="#" { "Terms of Use" }
        }
    }
}
