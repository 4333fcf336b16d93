use maud::{html, Markup};

use crate::{
    names,
    rejections::ValidationError,
    services::{otp::OtpFlow, registration::RegistrationForm},
    views::components::{self, error_for},
};

pub fn login_dialog(contact: &str, error: Option<&ValidationError>) -> Markup {
    components::dialog(
        "Login",
        html! {
            form hx-post=(names::LOGIN_OTP_URL) hx-target=(names::MODAL_TARGET) {
                label {
                    "Mobile number or email"
                    input type="text"
                          name="contact"
                          value=(contact)
                          autocomplete="username"
                          aria-invalid=[error.filter(|e| e.field == "contact").map(|_| "true")]
                          required;
                    (error_for(error, "contact"))
                }
                (components::terms_checkbox(false))
                (error_for(error, "accept_terms"))
                input type="submit" value="Get OTP";
            }
            p {
                small {
                    "New here? "
                    a href="#" hx-get=(names::REGISTER_URL) hx-target=(names::MODAL_TARGET) { "Register" }
                }
            }
        },
    )
}

pub fn register_dialog(mobile: &str, error: Option<&ValidationError>) -> Markup {
    components::dialog(
        "Register",
        html! {
            form hx-post=(names::REGISTER_MOBILE_URL) hx-target=(names::MODAL_TARGET) {
                label {
                    "Mobile number"
                    input type="tel"
                          name="mobile"
                          value=(mobile)
                          inputmode="numeric"
                          maxlength=(names::MOBILE_LENGTH)
                          placeholder="10 digit mobile number"
                          aria-invalid=[error.filter(|e| e.field == "mobile").map(|_| "true")]
                          required;
                    (error_for(error, "mobile"))
                }
                (components::terms_checkbox(false))
                (error_for(error, "accept_terms"))
                input type="submit" value="Get OTP";
            }
            p {
                small {
                    "Prefer the full form? "
                    a href=(names::REGISTER_PROFILE_URL) { "Register with your details" }
                }
            }
        },
    )
}

/// Verification dialog. The countdown fragment refreshes itself every second.
pub fn otp_dialog(flow: &OtpFlow, message: Option<&str>) -> Markup {
    components::dialog_with_close(
        "Verify OTP",
        Some(names::OTP_CLOSE_URL),
        html! {
            p { "Enter the 6 digit code sent to " strong { (flow.contact()) } }
            form hx-post=(names::OTP_VERIFY_URL) hx-target=(names::MODAL_TARGET) {
                input type="text"
                      name="code"
                      value=(flow.code())
                      hx-post=(names::OTP_CODE_URL)
                      hx-trigger="input changed delay:200ms"
                      hx-target="#otp-verify"
                      hx-swap="outerHTML"
                      inputmode="numeric"
                      autocomplete="one-time-code"
                      maxlength=(names::OTP_LENGTH)
                      pattern="[0-9]{6}"
                      aria-label="One-time code"
                      aria-invalid=[message.map(|_| "true")]
                      required;
                @if let Some(message) = message {
                    small."field-error" role="alert" { (message) }
                }
                (verify_button(flow))
            }
            (otp_countdown(flow))
        },
    )
}

/// Disabled until the typed code is complete.
pub fn verify_button(flow: &OtpFlow) -> Markup {
    html! {
        input type="submit" id="otp-verify" value="Verify" disabled[!flow.can_verify()];
    }
}

pub fn otp_countdown(flow: &OtpFlow) -> Markup {
    html! {
        @if flow.can_resend() {
            p id="otp-countdown" {
                "Didn't get the code? "
                button."outline"
                    hx-post=(names::OTP_RESEND_URL)
                    hx-target=(names::MODAL_TARGET) { "Resend OTP" }
            }
        } @else {
            p id="otp-countdown"
              hx-get=(names::OTP_COUNTDOWN_URL)
              hx-trigger="every 1s"
              hx-swap="outerHTML" {
                "Resend available in "
                span.clock { (flow.countdown_display()) }
            }
        }
    }
}

fn text_field(label: &str, name: &str, value: &str, error: Option<&ValidationError>) -> Markup {
    html! {
        label {
            (label)
            input type="text"
                  name=(name)
                  value=(value)
                  aria-invalid=[error.filter(|e| e.field == name).map(|_| "true")];
            (error_for(error, name))
        }
    }
}

fn select_field(
    label: &str,
    name: &str,
    options: &[&str],
    selected: &str,
    error: Option<&ValidationError>,
) -> Markup {
    html! {
        label {
            (label)
            select name=(name) {
                option value="" selected[selected.is_empty()] { "Select" }
                @for choice in options {
                    option value=(choice) selected[*choice == selected] { (choice) }
                }
            }
            (error_for(error, name))
        }
    }
}

/// Full registration form. Posting it opens the OTP dialog for the mobile number.
pub fn registration_page(form: &RegistrationForm, error: Option<&ValidationError>) -> Markup {
    const GENDERS: [&str; 3] = ["Male", "Female", "Other"];
    const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
    const YOUTH_TYPES: [&str; 4] = ["NYKS", "NSS", "NCC", "Other"];

    let area = form.area_type.map(|a| a.label()).unwrap_or_default();

    html! {
        h1 { "Register" }
        p { "Create your MY Bharat profile to take part in quizzes." }
        article {
            form hx-post=(names::REGISTER_PROFILE_URL)
                 hx-target=(names::MODAL_TARGET)
                 id="registration-form" {
                div.grid {
                    (text_field("First name", "first_name", &form.first_name, error))
                    (text_field("Last name", "last_name", &form.last_name, error))
                }
                div.grid {
                    (text_field("Email", "email", &form.email, error))
                    (text_field("Mobile number", "mobile", &form.mobile, error))
                }
                label { "Date of birth" }
                (components::date_of_birth_fields(&form.day, &form.month, &form.year))
                (error_for(error, "date_of_birth"))
                div.grid {
                    (select_field("Gender", "gender", &GENDERS, &form.gender, error))
                    (select_field(
                        "Blood group",
                        "blood_group",
                        &BLOOD_GROUPS,
                        form.blood_group.as_deref().unwrap_or_default(),
                        error,
                    ))
                }
                div.grid {
                    (text_field("State", "state", &form.state, error))
                    (text_field("District", "district", &form.district, error))
                }
                fieldset {
                    legend { "Area type" }
                    label {
                        input type="radio" name="area_type" value="urban" checked[area == "Urban"];
                        "Urban"
                    }
                    label {
                        input type="radio" name="area_type" value="rural" checked[area == "Rural"];
                        "Rural"
                    }
                    (error_for(error, "area_type"))
                }
                div.grid {
                    (text_field("Pincode", "pincode", &form.pincode, error))
                    (select_field("Youth type", "youth_type", &YOUTH_TYPES, &form.youth_type, error))
                }
                (text_field(
                    "Sports talent (optional)",
                    "sports_talent",
                    form.sports_talent.as_deref().unwrap_or_default(),
                    error,
                ))
                label {
                    input type="checkbox"
                          name="khelo_india_participant"
                          checked[form.khelo_india_participant.is_some()];
                    "I have participated in Khelo India"
                }
                input type="submit" value="Register";
            }
        }
    }
}
