use maud::{html, Markup};

use crate::models::{AttemptResult, User};

pub fn certificate_page(user: &User, result: &AttemptResult) -> Markup {
    html! {
        div.certificate {
            p { "MY Bharat | मेरा भारत" }
            h1 { "Certificate of Participation" }
            p { "This is to certify that" }
            h2 { (user.full_name()) }
            p {
                "of " (user.district) ", " (user.state)
                " has successfully participated in"
            }
            h3 { (result.quiz_title) }
            p { "organised by " (result.organizer) }
            p {
                "scoring " strong { (result.score) " / " (result.total) }
                " on " (result.submitted_at.format("%d %B %Y").to_string())
            }
        }
        p.no-print style="text-align: center;" {
            button onclick="window.print()" { "Download / Print" }
        }
    }
}
