use maud::{html, Markup};

use crate::{
    models::{Quiz, User},
    names,
    views::components,
};

pub fn landing_page(user: Option<&User>, featured: &[Quiz]) -> Markup {
    html! {
        // Hero section
        section.hero {
            p { "Ministry of Youth Affairs & Sports | युवा कार्यक्रम एवं खेल मंत्रालय" }
            h1 { "Learn, compete and get certified" }
            p {
                "Take part in national quizzes, test what you know and download a certificate "
                "of participation. | राष्ट्रीय क्विज़ में भाग लें और प्रमाणपत्र प्राप्त करें।"
            }
            div.hero-stats {
                div { strong { "1.5 Cr+" } br; small { "Youth registered" } }
                div { strong { "200+" } br; small { "Quizzes hosted" } }
                div { strong { "36" } br; small { "States & UTs" } }
            }
            p style="margin-top: 2rem;" {
                @if user.is_some() {
                    a role="button" href=(names::QUIZZES_URL) { "Explore Quizzes" }
                } @else {
                    button hx-get=(names::REGISTER_URL)
                           hx-target=(names::MODAL_TARGET) { "Register Now" }
                    " "
                    button."outline"
                        hx-get=(names::LOGIN_URL)
                        hx-target=(names::MODAL_TARGET) { "Login" }
                }
            }
        }

        @if !featured.is_empty() {
            section {
                h2 { "Ongoing quizzes" }
                div.quiz-grid {
                    @for quiz in featured {
                        article {
                            h4 { (quiz.title) }
                            p { small { (quiz.organizer) } }
                            (components::nav_link(names::QUIZZES_URL, html! { "View details" }))
                        }
                    }
                }
            }
        }
    }
}

fn row(label: &str, value: &str) -> Markup {
    html! {
        tr {
            th scope="row" { (label) }
            td { (value) }
        }
    }
}

pub fn profile(user: &User) -> Markup {
    let dob = format!(
        "{}/{}/{}",
        user.date_of_birth.day, user.date_of_birth.month, user.date_of_birth.year
    );

    html! {
        h1 { (user.full_name()) }
        @if let Some(username) = &user.username {
            p { "@" (username) }
        }
        article {
            table {
                tbody {
                    (row("Email", &user.email))
                    (row("Mobile", &user.mobile))
                    (row("Date of birth", &dob))
                    (row("Gender", &user.gender))
                    @if let Some(blood_group) = &user.blood_group {
                        (row("Blood group", blood_group))
                    }
                    (row("State", &user.state))
                    (row("District", &user.district))
                    (row("Area", user.area_type.label()))
                    @if let Some(ulb) = &user.ulb {
                        (row("ULB", ulb))
                    }
                    @if let Some(block) = &user.block {
                        (row("Block", block))
                    }
                    @if let Some(panchayat) = &user.panchayat {
                        (row("Panchayat", panchayat))
                    }
                    @if let Some(village) = &user.village {
                        (row("Village", village))
                    }
                    (row("Pincode", &user.pincode))
                    (row("Youth type", &user.youth_type))
                    @if let Some(talent) = &user.sports_talent {
                        (row("Sports talent", talent))
                    }
                    (row(
                        "Khelo India participant",
                        if user.khelo_india_participant { "Yes" } else { "No" },
                    ))
                }
            }
        }
    }
}
