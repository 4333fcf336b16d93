use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{models::User, rejections::AppError, session::ScopeHandle};

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v: &axum::http::HeaderValue| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}

/// The session scope bound to this request by the session layer.
/// Fails with a configuration error on routes mounted outside that layer.
pub struct Session(pub ScopeHandle);

impl<S: Send + Sync> FromRequestParts<S> for Session {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<ScopeHandle>()
            .cloned()
            .map(Session)
            .ok_or(AppError::Config("session scope used outside the session layer"))
    }
}

/// Guard extractor that requires a signed-in identity in the session scope.
/// Carries a snapshot of the identity for use in handlers.
pub struct AuthGuard(pub User);

impl<S: Send + Sync> FromRequestParts<S> for AuthGuard {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Session(scope) = Session::from_request_parts(parts, state).await?;
        let user = scope.lock().await.user().cloned();
        user.map(AuthGuard)
            .ok_or(AppError::Auth("log in to continue"))
    }
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;
    use crate::{fixtures, session::SessionStore};

    fn parts(htmx: bool) -> Parts {
        let mut builder = Request::builder().uri("/quizzes");
        if htmx {
            builder = builder.header("HX-Request", "true");
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[tokio::test]
    async fn detects_htmx_requests() {
        let IsHtmx(yes) = IsHtmx::from_request_parts(&mut parts(true), &()).await.unwrap();
        let IsHtmx(no) = IsHtmx::from_request_parts(&mut parts(false), &()).await.unwrap();
        assert!(yes);
        assert!(!no);
    }

    #[tokio::test]
    async fn session_outside_the_layer_is_a_config_error() {
        let err = Session::from_request_parts(&mut parts(false), &())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[tokio::test]
    async fn auth_guard_requires_identity() {
        let store = SessionStore::default();
        let (handle, _) = store.resolve(None).await;
        let mut parts = parts(false);
        parts.extensions.insert(handle.clone());

        let err = AuthGuard::from_request_parts(&mut parts, &()).await.err().unwrap();
        assert!(matches!(err, AppError::Auth(_)));

        handle
            .lock()
            .await
            .identity_mut()
            .login(fixtures::placeholder_user());
        let AuthGuard(user) = AuthGuard::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(user.mobile, "9703662169");
    }
}
