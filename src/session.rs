//! Per-browser session scopes.
//!
//! Every request passing through [`session_scope`] is bound to a
//! [`SessionScope`] identified by the `portal_session` cookie. The scope owns
//! the signed-in identity and whatever dialogs or attempts are mounted for
//! that browser; their countdown timers live and die with it.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, Instant},
};

use axum::{
    extract::{Request, State},
    http::header::SET_COOKIE,
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tokio::sync::{Mutex, MutexGuard};
use ulid::Ulid;

use crate::{
    models::{AttemptResult, User},
    names,
    rejections::AppError,
    services::{
        attempt::{Phase, QuizAttempt},
        identity::SessionHolder,
        otp::{OtpFlow, OtpOutcome},
        ticker::Timed,
    },
    utils, AppState,
};

pub struct SessionScope {
    identity: SessionHolder,
    otp: Option<Timed<OtpFlow>>,
    attempt: Option<Timed<QuizAttempt>>,
    result: Option<AttemptResult>,
    last_seen: Instant,
}

impl Default for SessionScope {
    fn default() -> Self {
        Self {
            identity: SessionHolder::default(),
            otp: None,
            attempt: None,
            result: None,
            last_seen: Instant::now(),
        }
    }
}

impl SessionScope {
    pub fn identity(&self) -> &SessionHolder {
        &self.identity
    }

    pub fn identity_mut(&mut self) -> &mut SessionHolder {
        &mut self.identity
    }

    pub fn user(&self) -> Option<&User> {
        self.identity.user()
    }

    /// Signs out and tears down everything mounted for this browser.
    pub fn logout(&mut self) {
        self.identity.logout();
        self.otp = None;
        self.attempt = None;
        self.result = None;
    }

    // --- OTP dialog ---

    /// Opens the dialog, replacing (and cancelling) any dialog already open.
    pub fn open_otp(&mut self, contact: &str) {
        self.otp = Some(Timed::start(OtpFlow::open(contact)));
    }

    pub fn otp(&self) -> Option<&Timed<OtpFlow>> {
        self.otp.as_ref()
    }

    pub fn close_otp(&mut self) {
        if self.otp.take().is_some() {
            tracing::info!("OTP dialog closed");
        }
    }

    /// Records the partially typed code in the open dialog.
    pub async fn enter_otp_code(&self, input: &str) -> Result<(), AppError> {
        let Some(dialog) = self.otp.as_ref() else {
            return Err(AppError::Input("no verification in progress"));
        };
        dialog.lock().await.enter_code(input);
        Ok(())
    }

    /// Submits `code` to the open dialog. The dialog closes once verified.
    pub async fn verify_otp(&mut self, code: &str) -> Result<OtpOutcome, AppError> {
        let Some(dialog) = self.otp.as_ref() else {
            return Err(AppError::Input("no verification in progress"));
        };
        let outcome = dialog.lock().await.submit_code(code, &mut self.identity);
        if outcome == OtpOutcome::Verified {
            self.otp = None;
        }
        Ok(outcome)
    }

    pub async fn resend_otp(&mut self) -> bool {
        let Some(dialog) = self.otp.as_mut() else {
            return false;
        };
        let resent = dialog.lock().await.resend();
        if resent {
            dialog.restart();
        }
        resent
    }

    // --- quiz attempt ---

    /// Mounts a fresh attempt; a previously mounted one is discarded.
    pub fn mount_attempt(&mut self, attempt: QuizAttempt) {
        self.result = None;
        self.attempt = Some(Timed::start(attempt));
    }

    pub fn unmount_attempt(&mut self) {
        if self.attempt.take().is_some() {
            tracing::info!("quiz attempt unmounted");
        }
    }

    /// The mounted attempt, provided it belongs to `quiz_id`.
    pub async fn attempt_for(&self, quiz_id: &str) -> Option<&Timed<QuizAttempt>> {
        let attempt = self.attempt.as_ref()?;
        let matches = attempt.lock().await.quiz().id == quiz_id;
        matches.then_some(attempt)
    }

    /// Moves the result of a submitted attempt into the scope and unmounts it.
    /// Returns whether the mounted attempt had been submitted.
    pub async fn collect_result(&mut self) -> bool {
        let Some(attempt) = self.attempt.as_ref() else {
            return false;
        };
        let result = {
            let attempt = attempt.lock().await;
            match attempt.phase() {
                Phase::Submitted => attempt.result().cloned(),
                _ => None,
            }
        };
        match result {
            Some(result) => {
                self.result = Some(result);
                self.attempt = None;
                true
            }
            None => false,
        }
    }

    pub fn result(&self) -> Option<&AttemptResult> {
        self.result.as_ref()
    }
}

/// Cheap handle to one browser's scope.
#[derive(Clone)]
pub struct ScopeHandle {
    id: String,
    scope: Arc<Mutex<SessionScope>>,
}

impl ScopeHandle {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub async fn lock(&self) -> MutexGuard<'_, SessionScope> {
        self.scope.lock().await
    }
}

#[derive(Clone, Default)]
pub struct SessionStore {
    scopes: Arc<Mutex<HashMap<String, Arc<Mutex<SessionScope>>>>>,
}

impl SessionStore {
    /// Finds the scope for `id`, or creates one under a fresh id.
    /// The flag is true when a new scope was created.
    pub async fn resolve(&self, id: Option<&str>) -> (ScopeHandle, bool) {
        let (handle, created) = {
            let mut scopes = self.scopes.lock().await;
            let known = id.and_then(|id| {
                scopes
                    .get(id)
                    .map(|scope| (id.to_string(), Arc::clone(scope)))
            });
            match known {
                Some((id, scope)) => (ScopeHandle { id, scope }, false),
                None => {
                    let id = Ulid::new().to_string();
                    let scope = Arc::new(Mutex::new(SessionScope::default()));
                    scopes.insert(id.clone(), Arc::clone(&scope));
                    tracing::debug!("session scope {id} created");
                    (ScopeHandle { id, scope }, true)
                }
            }
        };

        handle.lock().await.last_seen = Instant::now();
        (handle, created)
    }

    pub async fn len(&self) -> usize {
        self.scopes.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Drops scopes idle for longer than `max_idle`, cancelling their timers.
    /// Scopes currently in use are skipped.
    pub async fn reap_idle(&self, max_idle: Duration) -> usize {
        let mut scopes = self.scopes.lock().await;
        let before = scopes.len();
        scopes.retain(|_, scope| match scope.try_lock() {
            Ok(scope) => scope.last_seen.elapsed() < max_idle,
            Err(_) => true,
        });
        let reaped = before - scopes.len();
        if reaped > 0 {
            tracing::info!("reaped {reaped} idle session scopes");
        }
        reaped
    }
}

/// Binds the request to its session scope, issuing a cookie for new scopes.
pub async fn session_scope(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Response {
    let existing = jar
        .get(names::SESSION_COOKIE_NAME)
        .map(|c| c.value().to_string());
    let (handle, created) = state.sessions.resolve(existing.as_deref()).await;
    let id = handle.id().to_string();
    req.extensions_mut().insert(handle);

    let mut response = next.run(req).await;

    if created {
        match utils::cookie(names::SESSION_COOKIE_NAME, &id, state.secure_cookies) {
            Ok(cookie) => {
                response.headers_mut().append(SET_COOKIE, cookie);
            }
            Err(e) => tracing::error!("could not build session cookie: {e}"),
        }
    }

    response
}
