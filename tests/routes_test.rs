mod common;

use axum::http::{Method, StatusCode};
use common::{body_text, header_value, Browser};
use portal::names;

#[tokio::test]
async fn first_visit_issues_a_session_cookie() {
    let mut browser = Browser::new(common::app());

    let resp = browser.get(names::HOME_URL).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(common::session_cookie(&resp).is_some());
    let first = browser.cookie().map(str::to_string);

    let resp = browser.get(names::QUIZZES_URL).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(common::session_cookie(&resp).is_none());
    assert_eq!(browser.cookie().map(str::to_string), first);
}

#[tokio::test]
async fn landing_page_offers_login_and_register() {
    let mut browser = Browser::new(common::app());
    let body = body_text(browser.get(names::HOME_URL).await).await;

    assert!(body.contains("<!DOCTYPE html>"));
    assert!(body.contains("MY Bharat"));
    assert!(body.contains("Register Now"));
    assert!(body.contains(names::LOGIN_URL));
}

#[tokio::test]
async fn unknown_paths_render_not_found() {
    let mut browser = Browser::new(common::app());
    let resp = browser.get("/no/such/page").await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(body_text(resp).await.contains("Return to Home"));
}

#[tokio::test]
async fn state_changing_requests_need_htmx() {
    let mut browser = Browser::new(common::app());
    let resp = browser
        .send(
            Method::POST,
            names::LOGOUT_URL,
            Some(""),
            false,
        )
        .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn protected_pages_require_sign_in() {
    let mut browser = Browser::new(common::app());

    for uri in ["/quiz/1", "/quizzes/1/details", names::PROFILE_URL, names::CERTIFICATE_URL] {
        let resp = browser.get(uri).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "expected UNAUTHORIZED for {uri}");
    }
}

#[tokio::test]
async fn stylesheet_is_served() {
    let mut browser = Browser::new(common::app());
    let resp = browser.get("/static/index.css").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(header_value(&resp, "content-type").as_deref(), Some("text/css"));
    assert!(browser.cookie().is_none());

    let resp = browser.get("/static/missing.css").await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn catalog_tabs_and_search() {
    let mut browser = Browser::new(common::app());

    let body = body_text(browser.get(names::QUIZZES_URL).await).await;
    assert!(body.contains("National Ayurveda Quiz Competition"));
    assert!(body.contains("Young Leaders Dialogue"));

    let body = body_text(browser.hx_get("/quizzes?tab=past").await).await;
    assert!(body.contains("No quizzes found."));
    assert!(!body.contains("<!DOCTYPE html>"));

    let body = body_text(browser.hx_get("/quizzes?tab=all&q=ayurveda").await).await;
    assert!(body.contains("National Ayurveda Quiz Competition"));
    assert!(!body.contains("Young Leaders Dialogue"));
}

#[tokio::test]
async fn instructions_for_unknown_quiz_are_not_found() {
    let mut browser = Browser::new(common::app());

    let resp = browser.hx_get(&names::instructions_url("1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Quiz language"));

    let resp = browser.hx_get(&names::instructions_url("99")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_mobile_is_reported_in_the_dialog() {
    let mut browser = Browser::new(common::app());

    let body = body_text(
        browser
            .hx_post(names::REGISTER_MOBILE_URL, "mobile=12345&accept_terms=on")
            .await,
    )
    .await;
    assert!(body.contains("Enter a 10 digit mobile number"));

    let body = body_text(
        browser
            .hx_post(names::REGISTER_MOBILE_URL, "mobile=9703662169")
            .await,
    )
    .await;
    assert!(body.contains("Accept the Terms of Use to continue"));
}

#[tokio::test]
async fn otp_dialog_flow() {
    let mut browser = Browser::new(common::app());
    browser.get(names::HOME_URL).await;

    let body = body_text(
        browser
            .hx_post(names::LOGIN_OTP_URL, "contact=9703662169&accept_terms=on")
            .await,
    )
    .await;
    assert!(body.contains("Verify OTP"));
    assert!(body.contains("9703662169"));

    let body = body_text(browser.hx_get(names::OTP_COUNTDOWN_URL).await).await;
    assert!(body.contains("Resend available in"));

    // The countdown is still running, so resending is refused.
    let body = body_text(browser.hx_post(names::OTP_RESEND_URL, "").await).await;
    assert!(body.contains("Wait for the countdown to finish"));

    let body = body_text(browser.hx_post(names::OTP_CODE_URL, "code=123").await).await;
    assert!(body.contains("otp-verify"));
    assert!(body.contains("disabled"));

    let body = body_text(browser.hx_post(names::OTP_CODE_URL, "code=123456").await).await;
    assert!(!body.contains("disabled"));

    // An incomplete submit keeps what was typed.
    let body = body_text(browser.hx_post(names::OTP_VERIFY_URL, "code=12").await).await;
    assert!(body.contains("The code must be 6 digits"));
    assert!(body.contains(r#"value="123456""#));

    let resp = browser.hx_post(names::OTP_VERIFY_URL, "code=123456").await;
    assert_eq!(header_value(&resp, "HX-Refresh").as_deref(), Some("true"));

    // Dialog is gone once verified.
    let body = body_text(browser.hx_get(names::OTP_COUNTDOWN_URL).await).await;
    assert!(body.is_empty());

    let body = body_text(browser.get(names::PROFILE_URL).await).await;
    assert!(body.contains("Giriprathap Raju"));
    assert!(body.contains("Kurnool"));
}

#[tokio::test]
async fn code_entry_needs_an_open_dialog() {
    let mut browser = Browser::new(common::app());
    browser.get(names::HOME_URL).await;

    let resp = browser.hx_post(names::OTP_CODE_URL, "code=123456").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn closing_the_otp_dialog_cancels_it() {
    let mut browser = Browser::new(common::app());
    browser.get(names::HOME_URL).await;
    browser
        .hx_post(names::REGISTER_MOBILE_URL, "mobile=9703662169&accept_terms=on")
        .await;

    let resp = browser.hx_post(names::OTP_CLOSE_URL, "").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = browser.hx_post(names::OTP_VERIFY_URL, "code=123456").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn logout_signs_out() {
    let mut browser = Browser::new(common::app());
    browser.sign_in().await;

    let body = body_text(browser.get(names::HOME_URL).await).await;
    assert!(body.contains("Giriprathap Raju"));

    let resp = browser.hx_post(names::LOGOUT_URL, "").await;
    assert_eq!(header_value(&resp, "HX-Redirect").as_deref(), Some(names::HOME_URL));

    let resp = browser.get(names::PROFILE_URL).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_registration_form_reports_first_problem() {
    let mut browser = Browser::new(common::app());
    browser.get(names::HOME_URL).await;

    let resp = browser
        .hx_post(
            names::REGISTER_PROFILE_URL,
            "first_name=Asha&last_name=&email=asha%40example.com",
        )
        .await;
    assert_eq!(header_value(&resp, "HX-Retarget").as_deref(), Some("main"));
    assert!(body_text(resp).await.contains("Enter your last name"));

    let form = "first_name=Asha&last_name=Verma&email=asha%40example.com&mobile=9876543210\
                &day=09&month=11&year=2001&gender=Female&blood_group=&state=Rajasthan\
                &district=Jaipur&area_type=rural&pincode=302001&youth_type=NSS";
    let body = body_text(browser.hx_post(names::REGISTER_PROFILE_URL, form).await).await;
    assert!(body.contains("Verify OTP"));
    assert!(body.contains("9876543210"));
}

#[tokio::test]
async fn registration_rejects_impossible_birth_dates() {
    let mut browser = Browser::new(common::app());
    let this_year = chrono::Datelike::year(&chrono::Utc::now());

    let body = body_text(browser.get(names::REGISTER_PROFILE_URL).await).await;
    assert!(body.contains(&format!(r#"value="{this_year}""#)));
    assert!(!body.contains(&format!(r#"value="{}""#, this_year + 1)));

    let form = "first_name=Asha&last_name=Verma&email=asha%40example.com&mobile=9876543210\
                &day=31&month=02&year=2001&gender=Female&state=Rajasthan\
                &district=Jaipur&area_type=rural&pincode=302001&youth_type=NSS";
    let body = body_text(browser.hx_post(names::REGISTER_PROFILE_URL, form).await).await;
    assert!(body.contains("Select a valid date of birth"));
    assert!(!body.contains("Verify OTP"));
}
