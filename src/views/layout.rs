use maud::{html, Markup, DOCTYPE};

use crate::{models::User, names, utils};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
    }
}

fn header(user: Option<&User>) -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."portal-brand" {
                        a href=(names::HOME_URL) {
                            strong { "MY Bharat" }
                            " | मेरा भारत"
                        }
                    }
                }
                ul {
                    li { a href=(names::QUIZZES_URL) { "Quizzes" } }
                    @if let Some(user) = user {
                        li {
                            details."dropdown" {
                                summary { (user.full_name()) }
                                ul dir="rtl" {
                                    li { a href=(names::PROFILE_URL) { "Profile" } }
                                    li {
                                        a href="#"
                                          hx-post=(names::LOGOUT_URL) { "Logout" }
                                    }
                                }
                            }
                        }
                    } @else {
                        li {
                            button."outline"
                                hx-get=(names::LOGIN_URL)
                                hx-target=(names::MODAL_TARGET) { "Login" }
                        }
                        li {
                            button hx-get=(names::REGISTER_URL)
                                   hx-target=(names::MODAL_TARGET) { "Register" }
                        }
                    }
                    li."secondary" { small { (utils::VERSION) } }
                }
            }
        }
    }
}

pub fn page(title: &str, body: Markup, user: Option<&User>) -> Markup {
    html! {
        (DOCTYPE)
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="color-scheme" content="light";

            (css())
            (js())

            title { (format!("{title} - MY Bharat Quiz")) }
        }

        body."container" {
            (header(user))
            main { (body) }
            div id=(names::MODAL_ID) {}
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - MY Bharat Quiz" }
        (body)
    }
}

/// Full document for direct loads, fragment for htmx swaps.
pub fn render(is_htmx: bool, title: &str, body: Markup, user: Option<&User>) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, user)
    }
}

pub fn not_found() -> Markup {
    html! {
        article style="text-align: center; margin-top: 3rem;" {
            h1 { "404" }
            p { "Oops! The page you are looking for does not exist." }
            a href=(names::HOME_URL) { "Return to Home" }
        }
    }
}
