use axum::{
    body::Body,
    http::{header, Method, Request, Response},
    Router,
};
use portal::{names, router, AppState};
use tower::ServiceExt;

pub fn app() -> Router {
    router(AppState::new(false))
}

/// A browser: remembers its session cookie between requests.
pub struct Browser {
    app: Router,
    cookie: Option<String>,
}

impl Browser {
    pub fn new(app: Router) -> Self {
        Self { app, cookie: None }
    }

    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub async fn get(&mut self, uri: &str) -> Response<Body> {
        self.send(Method::GET, uri, None, false).await
    }

    pub async fn hx_get(&mut self, uri: &str) -> Response<Body> {
        self.send(Method::GET, uri, None, true).await
    }

    pub async fn hx_post(&mut self, uri: &str, form: &str) -> Response<Body> {
        self.send(Method::POST, uri, Some(form), true).await
    }

    pub async fn send(
        &mut self,
        method: Method,
        uri: &str,
        form: Option<&str>,
        htmx: bool,
    ) -> Response<Body> {
        let mut req = Request::builder().method(method).uri(uri);
        if htmx {
            req = req.header("HX-Request", "true");
        }
        if let Some(cookie) = &self.cookie {
            req = req.header(header::COOKIE, format!("{}={cookie}", names::SESSION_COOKIE_NAME));
        }
        let body = match form {
            Some(form) => {
                req = req.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
                Body::from(form.to_string())
            }
            None => Body::empty(),
        };

        let resp = self
            .app
            .clone()
            .oneshot(req.body(body).expect("request build should succeed"))
            .await
            .expect("router should respond");

        if let Some(value) = session_cookie(&resp) {
            self.cookie = Some(value);
        }
        resp
    }

    /// Signs in through the mobile registration dialog.
    pub async fn sign_in(&mut self) {
        self.get(names::HOME_URL).await;
        self.hx_post(names::REGISTER_MOBILE_URL, "mobile=9703662169&accept_terms=on")
            .await;
        let resp = self.hx_post(names::OTP_VERIFY_URL, "code=123456").await;
        assert_eq!(header_value(&resp, "HX-Refresh").as_deref(), Some("true"));
    }
}

pub fn session_cookie(resp: &Response<Body>) -> Option<String> {
    let prefix = format!("{}=", names::SESSION_COOKIE_NAME);
    resp.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find_map(|v| v.strip_prefix(prefix.as_str()))
        .and_then(|rest| rest.split(';').next())
        .map(str::to_string)
}

pub fn header_value(resp: &Response<Body>, name: &str) -> Option<String> {
    resp.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

pub async fn body_text(resp: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    String::from_utf8(bytes.to_vec()).expect("body should be utf-8")
}
