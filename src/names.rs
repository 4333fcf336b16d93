pub const HOME_URL: &str = "/";
pub const QUIZZES_URL: &str = "/quizzes";
pub const THANK_YOU_URL: &str = "/quiz-thank-you";
pub const FEEDBACK_URL: &str = "/quiz-thank-you/feedback";
pub const CERTIFICATE_URL: &str = "/certificate";
pub const PROFILE_URL: &str = "/profile";

pub const LOGIN_URL: &str = "/auth/login";
pub const LOGIN_OTP_URL: &str = "/auth/login/otp";
pub const LOGOUT_URL: &str = "/auth/logout";
pub const REGISTER_URL: &str = "/auth/register";
pub const REGISTER_MOBILE_URL: &str = "/auth/register/mobile";
pub const REGISTER_PROFILE_URL: &str = "/auth/register/profile";
pub const OTP_COUNTDOWN_URL: &str = "/auth/otp/countdown";
pub const OTP_CODE_URL: &str = "/auth/otp/code";
pub const OTP_VERIFY_URL: &str = "/auth/otp/verify";
pub const OTP_RESEND_URL: &str = "/auth/otp/resend";
pub const OTP_CLOSE_URL: &str = "/auth/otp/close";

pub const SESSION_COOKIE_NAME: &str = "portal_session";

/// Element id of the dialog slot every page carries.
pub const MODAL_ID: &str = "modal";
pub const MODAL_TARGET: &str = "#modal";
pub const ATTEMPT_TARGET: &str = "#attempt";

pub fn quiz_url(quiz_id: &str) -> String {
    format!("/quiz/{quiz_id}")
}

pub fn quiz_action_url(quiz_id: &str, action: &str) -> String {
    format!("/quiz/{quiz_id}/{action}")
}

pub fn quiz_jump_url(quiz_id: &str, index: usize) -> String {
    format!("/quiz/{quiz_id}/jump/{index}")
}

pub fn quiz_clock_url(quiz_id: &str) -> String {
    format!("/quiz/{quiz_id}/clock")
}

pub fn instructions_url(quiz_id: &str) -> String {
    format!("/quizzes/{quiz_id}/instructions")
}

pub fn details_url(quiz_id: &str) -> String {
    format!("/quizzes/{quiz_id}/details")
}

pub fn catalog_url(tab: &str, query: &str) -> String {
    if query.is_empty() {
        format!("{QUIZZES_URL}?tab={tab}")
    } else {
        format!("{QUIZZES_URL}?tab={tab}&q={}", query.replace(' ', "+"))
    }
}

// Countdown budgets, in seconds
pub const OTP_BUDGET_SECS: u32 = 120;
pub const QUIZ_BUDGET_SECS: u32 = 595;

// Input shapes
pub const OTP_LENGTH: usize = 6;
pub const MOBILE_LENGTH: usize = 10;
pub const PINCODE_LENGTH: usize = 6;
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;
