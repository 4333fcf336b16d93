//! OTP verification dialog state: a 120 second countdown gating resend, and a
//! one-shot check of a six digit code.
//!
//! There is no real verification backend. Any complete code signs in the
//! placeholder identity, whether or not the countdown has run out.

use crate::{
    fixtures, names,
    services::{
        identity::SessionHolder,
        ticker::{Countdown, Tick},
    },
    utils,
};

#[derive(Debug, PartialEq, Eq)]
pub enum OtpOutcome {
    /// Code does not have the required shape; nothing happens.
    Incomplete,
    Verified,
}

#[derive(Debug)]
pub struct OtpFlow {
    contact: String,
    countdown: u32,
    can_resend: bool,
    code: String,
}

impl OtpFlow {
    pub fn open(contact: impl Into<String>) -> Self {
        let contact = contact.into();
        tracing::info!("OTP dialog opened for {contact}");
        Self {
            contact,
            countdown: names::OTP_BUDGET_SECS,
            can_resend: false,
            code: String::new(),
        }
    }

    pub fn contact(&self) -> &str {
        &self.contact
    }

    pub fn countdown(&self) -> u32 {
        self.countdown
    }

    pub fn can_resend(&self) -> bool {
        self.can_resend
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn countdown_display(&self) -> String {
        utils::format_clock(self.countdown)
    }

    /// Records what has been typed so far. Keeps only digits, up to the code
    /// length.
    pub fn enter_code(&mut self, input: &str) {
        self.code = input
            .chars()
            .filter(char::is_ascii_digit)
            .take(names::OTP_LENGTH)
            .collect();
    }

    pub fn can_verify(&self) -> bool {
        is_complete(&self.code)
    }

    /// A code of the wrong shape leaves the flow untouched.
    pub fn submit_code(&self, code: &str, holder: &mut SessionHolder) -> OtpOutcome {
        if !is_complete(code) {
            tracing::debug!("incomplete OTP ignored for {}", self.contact);
            return OtpOutcome::Incomplete;
        }

        holder.login(fixtures::placeholder_user());
        tracing::info!("OTP verified for {}", self.contact);
        OtpOutcome::Verified
    }

    /// Restarts the countdown. Returns false, leaving the state untouched,
    /// while the current countdown is still running.
    pub fn resend(&mut self) -> bool {
        if !self.can_resend {
            tracing::warn!("OTP resend rejected for {}: countdown running", self.contact);
            return false;
        }
        self.countdown = names::OTP_BUDGET_SECS;
        self.can_resend = false;
        self.code.clear();
        tracing::info!("OTP resent to {}", self.contact);
        true
    }
}

impl Countdown for OtpFlow {
    fn tick(&mut self) -> Tick {
        if self.countdown == 0 {
            return Tick::Halt;
        }
        self.countdown -= 1;
        if self.countdown == 0 {
            self.can_resend = true;
            return Tick::Halt;
        }
        Tick::Continue
    }
}

fn is_complete(code: &str) -> bool {
    code.len() == names::OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit())
}
