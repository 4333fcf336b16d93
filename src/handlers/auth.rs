use axum::{
    extract::Form,
    http::{HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use maud::{html, Markup};
use serde::Deserialize;

use crate::{
    extractors::{IsHtmx, Session},
    handlers::{hx_redirect, hx_refresh, leave_attempt},
    names,
    rejections::AppError,
    services::{
        otp::OtpOutcome,
        registration::{LoginRequest, MobileRegistration, RegistrationForm},
    },
    session::ScopeHandle,
    views::{self, auth as auth_views},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", get(login_dialog))
        .route("/auth/login/otp", post(login_post))
        .route("/auth/register", get(register_dialog))
        .route("/auth/register/mobile", post(register_mobile_post))
        .route(
            "/auth/register/profile",
            get(registration_page).post(registration_post),
        )
        .route("/auth/otp/countdown", get(otp_countdown))
        .route("/auth/otp/code", post(otp_code))
        .route("/auth/otp/verify", post(otp_verify))
        .route("/auth/otp/resend", post(otp_resend))
        .route("/auth/otp/close", post(otp_close))
        .route("/auth/logout", post(logout_post))
}

async fn login_dialog() -> Markup {
    auth_views::login_dialog("", None)
}

async fn register_dialog() -> Markup {
    auth_views::register_dialog("", None)
}

/// Opens a fresh OTP dialog for `contact` and renders it.
async fn open_otp(scope: &ScopeHandle, contact: &str) -> Markup {
    let mut scope = scope.lock().await;
    scope.open_otp(contact);
    match scope.otp() {
        Some(dialog) => auth_views::otp_dialog(&*dialog.lock().await, None),
        None => html! {},
    }
}

async fn login_post(Session(scope): Session, Form(body): Form<LoginRequest>) -> Markup {
    match body.validate() {
        Ok(contact) => open_otp(&scope, contact).await,
        Err(err) => auth_views::login_dialog(&body.contact, Some(&err)),
    }
}

async fn register_mobile_post(
    Session(scope): Session,
    Form(body): Form<MobileRegistration>,
) -> Markup {
    match body.validate() {
        Ok(mobile) => open_otp(&scope, mobile).await,
        Err(err) => auth_views::register_dialog(&body.mobile, Some(&err)),
    }
}

async fn registration_page(Session(scope): Session, IsHtmx(is_htmx): IsHtmx) -> Markup {
    let user = leave_attempt(&scope).await;
    views::render(
        is_htmx,
        "Register",
        auth_views::registration_page(&RegistrationForm::default(), None),
        user.as_ref(),
    )
}

/// A valid form opens the OTP dialog. An invalid one re-renders the form in
/// place of the page body.
async fn registration_post(
    Session(scope): Session,
    Form(body): Form<RegistrationForm>,
) -> Response {
    match body.validate() {
        Ok(mobile) => {
            tracing::info!("registration submitted for {mobile}");
            open_otp(&scope, mobile).await.into_response()
        }
        Err(err) => {
            let mut headers = HeaderMap::new();
            headers.insert("HX-Retarget", HeaderValue::from_static("main"));
            (headers, auth_views::registration_page(&body, Some(&err))).into_response()
        }
    }
}

/// Polled by the dialog every second. Empty once no dialog is open, which
/// removes the poller.
async fn otp_countdown(Session(scope): Session) -> Markup {
    let scope = scope.lock().await;
    match scope.otp() {
        Some(dialog) => auth_views::otp_countdown(&*dialog.lock().await),
        None => html! {},
    }
}

#[derive(Deserialize)]
struct OtpPost {
    #[serde(default)]
    code: String,
}

/// Records the code as it is typed and swaps in the verify button, enabled
/// once six digits are in.
async fn otp_code(Session(scope): Session, Form(body): Form<OtpPost>) -> Result<Markup, AppError> {
    let scope = scope.lock().await;
    scope.enter_otp_code(&body.code).await?;
    match scope.otp() {
        Some(dialog) => Ok(auth_views::verify_button(&*dialog.lock().await)),
        None => Err(AppError::Input("no verification in progress")),
    }
}

async fn otp_verify(
    Session(scope): Session,
    Form(body): Form<OtpPost>,
) -> Result<Response, AppError> {
    let mut scope = scope.lock().await;
    if scope.verify_otp(&body.code).await? == OtpOutcome::Verified {
        return Ok(hx_refresh());
    }

    match scope.otp() {
        Some(dialog) => {
            let message = Some("The code must be 6 digits");
            Ok(auth_views::otp_dialog(&*dialog.lock().await, message).into_response())
        }
        None => Err(AppError::Input("no verification in progress")),
    }
}

async fn otp_resend(Session(scope): Session) -> Result<Markup, AppError> {
    let mut scope = scope.lock().await;
    let resent = scope.resend_otp().await;
    let message = (!resent).then_some("Wait for the countdown to finish");

    match scope.otp() {
        Some(dialog) => Ok(auth_views::otp_dialog(&*dialog.lock().await, message)),
        None => Err(AppError::Input("no verification in progress")),
    }
}

async fn otp_close(Session(scope): Session) -> Markup {
    scope.lock().await.close_otp();
    html! {}
}

async fn logout_post(Session(scope): Session) -> Result<Response, AppError> {
    scope.lock().await.logout();
    hx_redirect(names::HOME_URL)
}
