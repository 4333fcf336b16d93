mod common;

use axum::http::StatusCode;
use common::{body_text, header_value, Browser};
use portal::names;

#[tokio::test]
async fn participant_details_lead_to_the_quiz() {
    let mut browser = Browser::new(common::app());
    browser.sign_in().await;

    let body = body_text(
        browser
            .hx_get(&format!("{}?language=English", names::details_url("1")))
            .await,
    )
    .await;
    assert!(body.contains("Giriprathap Raju"));
    assert!(body.contains("hx-swap-oob"));

    let resp = browser
        .hx_post(
            &names::details_url("1"),
            "language=English&name=Giriprathap+Raju&state=Andhra+Pradesh&district=Kurnool\
             &mobile=97036&day=01&month=01&year=2000",
        )
        .await;
    assert!(header_value(&resp, "HX-Redirect").is_none());
    assert!(body_text(resp).await.contains("Enter a 10 digit mobile number"));

    let resp = browser
        .hx_post(
            &names::details_url("1"),
            "language=English&name=Giriprathap+Raju&state=Andhra+Pradesh&district=Kurnool\
             &mobile=9703662169&day=01&month=01&year=2000",
        )
        .await;
    assert_eq!(header_value(&resp, "HX-Redirect").as_deref(), Some("/quiz/1"));
}

#[tokio::test]
async fn answering_and_submitting_a_quiz() {
    let mut browser = Browser::new(common::app());
    browser.sign_in().await;

    let resp = browser.get(&names::quiz_url("1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("Question 1 of 20"));
    assert!(body.contains("09:55"));

    let body = body_text(
        browser
            .hx_post(
                &names::quiz_action_url("1", "answer"),
                "option=Slow+down+and+give+way",
            )
            .await,
    )
    .await;
    assert!(body.contains("Answered: 1"));
    assert!(body.contains("Pending: 19"));

    let resp = browser
        .hx_post(&names::quiz_action_url("1", "answer"), "option=Fly+away")
        .await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(browser.hx_post(&names::quiz_action_url("1", "next"), "").await).await;
    assert!(body.contains("Question 2 of 20"));

    let body = body_text(browser.hx_post(&names::quiz_jump_url("1", 19), "").await).await;
    assert!(body.contains("Question 20 of 20"));

    let resp = browser.hx_post(&names::quiz_jump_url("1", 20), "").await;
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = body_text(browser.hx_post(&names::quiz_action_url("1", "submit"), "").await).await;
    assert!(body.contains("Submit the quiz?"));

    let body = body_text(
        browser
            .hx_post(&names::quiz_action_url("1", "submit/cancel"), "")
            .await,
    )
    .await;
    assert!(!body.contains("Submit the quiz?"));

    browser.hx_post(&names::quiz_action_url("1", "submit"), "").await;
    let resp = browser
        .hx_post(&names::quiz_action_url("1", "submit/confirm"), "")
        .await;
    assert_eq!(
        header_value(&resp, "HX-Redirect").as_deref(),
        Some(names::THANK_YOU_URL)
    );

    // The attempt is gone once submitted.
    let resp = browser.hx_post(&names::quiz_action_url("1", "next"), "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let body = body_text(browser.get(names::THANK_YOU_URL).await).await;
    assert!(body.contains("1 / 20"));
    assert!(body.contains("You needed 7 correct answers to pass."));

    let body = body_text(browser.get(names::CERTIFICATE_URL).await).await;
    assert!(body.contains("Certificate of Participation"));
    assert!(body.contains("Giriprathap Raju"));
    assert!(body.contains("window.print()"));
}

#[tokio::test]
async fn feedback_needs_a_rating() {
    let mut browser = Browser::new(common::app());
    browser.get(names::HOME_URL).await;

    let body = body_text(browser.hx_post(names::FEEDBACK_URL, "comment=great").await).await;
    assert!(body.contains("Choose a rating from 1 to 5"));

    let body = body_text(
        browser
            .hx_post(names::FEEDBACK_URL, "rating=5&comment=great")
            .await,
    )
    .await;
    assert!(body.contains("Thank you for your feedback!"));
}

#[tokio::test]
async fn leaving_the_quiz_page_discards_the_attempt() {
    let mut browser = Browser::new(common::app());
    browser.sign_in().await;

    browser.get(&names::quiz_url("2")).await;
    let resp = browser.hx_post(&names::quiz_action_url("2", "next"), "").await;
    assert_eq!(resp.status(), StatusCode::OK);

    browser.get(names::QUIZZES_URL).await;

    let resp = browser.hx_post(&names::quiz_action_url("2", "next"), "").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let resp = browser.hx_get(&names::quiz_clock_url("2")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn a_full_reload_restarts_the_attempt() {
    let mut browser = Browser::new(common::app());
    browser.sign_in().await;

    browser.get(&names::quiz_url("1")).await;
    browser
        .hx_post(&names::quiz_action_url("1", "answer"), "option=Slow+down+and+give+way")
        .await;

    let body = body_text(browser.hx_get(&names::quiz_url("1")).await).await;
    assert!(body.contains("Answered: 1"));

    let body = body_text(browser.get(&names::quiz_url("1")).await).await;
    assert!(body.contains("Answered: 0"));
}

#[tokio::test]
async fn unknown_quiz_is_not_found() {
    let mut browser = Browser::new(common::app());
    browser.sign_in().await;

    let resp = browser.get(&names::quiz_url("99")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn thank_you_without_a_result() {
    let mut browser = Browser::new(common::app());
    let body = body_text(browser.get(names::THANK_YOU_URL).await).await;
    assert!(body.contains("There is no submitted quiz to show yet."));

    browser.sign_in().await;
    let resp = browser.get(names::CERTIFICATE_URL).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
