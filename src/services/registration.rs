//! Form bodies posted by the sign-in, registration, participant details and
//! feedback views, with their field-level checks. Validation stops at the
//! first failing field.

use chrono::{NaiveDate, Utc};
use serde::Deserialize;

use crate::{
    models::{AreaType, User},
    names,
    rejections::ValidationError,
};

fn is_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.chars().all(|c| c.is_ascii_digit())
}

fn require(value: &str, field: &'static str, message: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new(field, message))
    } else {
        Ok(())
    }
}

pub fn validate_mobile(mobile: &str) -> Result<(), ValidationError> {
    if is_digits(mobile.trim(), names::MOBILE_LENGTH) {
        Ok(())
    } else {
        Err(ValidationError::new("mobile", "Enter a 10 digit mobile number"))
    }
}

fn validate_terms(accepted: &Option<String>) -> Result<(), ValidationError> {
    if accepted.is_some() {
        Ok(())
    } else {
        Err(ValidationError::new("accept_terms", "Accept the Terms of Use to continue"))
    }
}

/// A real calendar date, not in the future.
fn validate_date_of_birth(day: &str, month: &str, year: &str) -> Result<(), ValidationError> {
    const INVALID: ValidationError = ValidationError::new("date_of_birth", "Select a valid date of birth");

    if !is_digits(year.trim(), 4) {
        return Err(INVALID);
    }
    let year: i32 = year.trim().parse().map_err(|_| INVALID)?;
    let month: u32 = month.trim().parse().map_err(|_| INVALID)?;
    let day: u32 = day.trim().parse().map_err(|_| INVALID)?;

    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) if date <= Utc::now().date_naive() => Ok(()),
        _ => Err(INVALID),
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct MobileRegistration {
    #[serde(default)]
    pub mobile: String,
    pub accept_terms: Option<String>,
}

impl MobileRegistration {
    /// Returns the mobile number the OTP goes to.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        validate_mobile(&self.mobile)?;
        validate_terms(&self.accept_terms)?;
        Ok(self.mobile.trim())
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub contact: String,
    pub accept_terms: Option<String>,
}

impl LoginRequest {
    /// Accepts either a mobile number or an email address.
    pub fn validate(&self) -> Result<&str, ValidationError> {
        let contact = self.contact.trim();
        require(contact, "contact", "Enter your mobile number or email")?;
        if contact.chars().all(|c| c.is_ascii_digit()) {
            validate_mobile(contact).map_err(|e| ValidationError { field: "contact", ..e })?;
        } else if !contact.contains('@') {
            return Err(ValidationError::new("contact", "Enter a valid email address"));
        }
        validate_terms(&self.accept_terms)?;
        Ok(contact)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub gender: String,
    pub blood_group: Option<String>,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    pub area_type: Option<AreaType>,
    #[serde(default)]
    pub pincode: String,
    #[serde(default)]
    pub youth_type: String,
    pub sports_talent: Option<String>,
    pub khelo_india_participant: Option<String>,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<&str, ValidationError> {
        require(&self.first_name, "first_name", "Enter your first name")?;
        require(&self.last_name, "last_name", "Enter your last name")?;
        if !self.email.contains('@') {
            return Err(ValidationError::new("email", "Enter a valid email address"));
        }
        validate_mobile(&self.mobile)?;
        validate_date_of_birth(&self.day, &self.month, &self.year)?;
        require(&self.gender, "gender", "Select your gender")?;
        require(&self.state, "state", "Select your state")?;
        require(&self.district, "district", "Select your district")?;
        if self.area_type.is_none() {
            return Err(ValidationError::new("area_type", "Select urban or rural"));
        }
        if !is_digits(self.pincode.trim(), names::PINCODE_LENGTH) {
            return Err(ValidationError::new("pincode", "Enter a 6 digit pincode"));
        }
        require(&self.youth_type, "youth_type", "Select a youth type")?;
        Ok(self.mobile.trim())
    }
}

/// Participant details confirmed before a quiz starts.
#[derive(Debug, Default, Deserialize)]
pub struct ParticipantDetails {
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub district: String,
    #[serde(default)]
    pub mobile: String,
    #[serde(default)]
    pub day: String,
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub year: String,
}

impl From<&User> for ParticipantDetails {
    fn from(user: &User) -> Self {
        Self {
            language: String::new(),
            name: user.full_name(),
            state: user.state.clone(),
            district: user.district.clone(),
            mobile: user.mobile.clone(),
            day: user.date_of_birth.day.clone(),
            month: user.date_of_birth.month.clone(),
            year: user.date_of_birth.year.clone(),
        }
    }
}

impl ParticipantDetails {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require(&self.name, "name", "Enter your name")?;
        require(&self.state, "state", "Select your state")?;
        require(&self.district, "district", "Select your district")?;
        validate_mobile(&self.mobile)?;
        validate_date_of_birth(&self.day, &self.month, &self.year)
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct Feedback {
    pub rating: Option<String>,
    #[serde(default)]
    pub comment: String,
}

impl Feedback {
    pub fn validate(&self) -> Result<u8, ValidationError> {
        const MISSING: ValidationError = ValidationError::new("rating", "Choose a rating from 1 to 5");

        let rating: u8 = self
            .rating
            .as_deref()
            .and_then(|r| r.trim().parse().ok())
            .ok_or(MISSING)?;
        if (names::MIN_RATING..=names::MAX_RATING).contains(&rating) {
            Ok(rating)
        } else {
            Err(MISSING)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn accepted() -> Option<String> {
        Some("on".to_string())
    }

    fn registration() -> RegistrationForm {
        RegistrationForm {
            first_name: "Asha".to_string(),
            last_name: "Verma".to_string(),
            email: "asha@example.com".to_string(),
            mobile: "9876543210".to_string(),
            day: "09".to_string(),
            month: "11".to_string(),
            year: "2001".to_string(),
            gender: "female".to_string(),
            state: "Rajasthan".to_string(),
            district: "Jaipur".to_string(),
            area_type: Some(AreaType::Rural),
            pincode: "302001".to_string(),
            youth_type: "NYKS".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn mobile_needs_ten_digits() {
        assert!(validate_mobile("9703662169").is_ok());
        assert!(validate_mobile(" 9703662169 ").is_ok());
        assert!(validate_mobile("970366216").is_err());
        assert!(validate_mobile("97036621690").is_err());
        assert!(validate_mobile("97036a2169").is_err());
    }

    #[test]
    fn mobile_registration_requires_terms() {
        let form = MobileRegistration {
            mobile: "9703662169".to_string(),
            accept_terms: None,
        };
        assert_eq!(form.validate().unwrap_err().field, "accept_terms");

        let form = MobileRegistration {
            accept_terms: accepted(),
            ..form
        };
        assert_eq!(form.validate(), Ok("9703662169"));
    }

    #[test]
    fn login_accepts_mobile_or_email() {
        let login = |contact: &str| LoginRequest {
            contact: contact.to_string(),
            accept_terms: accepted(),
        };

        assert_eq!(login("9703662169").validate(), Ok("9703662169"));
        assert_eq!(login("a@b.in").validate(), Ok("a@b.in"));
        assert_eq!(login("12345").validate().unwrap_err().field, "contact");
        assert_eq!(login("someone").validate().unwrap_err().field, "contact");
        assert_eq!(login("").validate().unwrap_err().field, "contact");
    }

    #[test]
    fn registration_reports_first_missing_field() {
        assert_eq!(registration().validate(), Ok("9876543210"));

        let form = RegistrationForm {
            last_name: String::new(),
            pincode: "12".to_string(),
            ..registration()
        };
        assert_eq!(form.validate().unwrap_err().field, "last_name");

        let form = RegistrationForm {
            pincode: "12".to_string(),
            ..registration()
        };
        assert_eq!(form.validate().unwrap_err().field, "pincode");

        let form = RegistrationForm {
            area_type: None,
            ..registration()
        };
        assert_eq!(form.validate().unwrap_err().field, "area_type");
    }

    #[test]
    fn date_of_birth_must_be_in_range() {
        assert!(validate_date_of_birth("31", "12", "1999").is_ok());
        assert!(validate_date_of_birth("32", "12", "1999").is_err());
        assert!(validate_date_of_birth("01", "13", "1999").is_err());
        assert!(validate_date_of_birth("01", "01", "99").is_err());
        assert!(validate_date_of_birth("", "01", "1999").is_err());
    }

    #[test]
    fn date_of_birth_must_exist_on_the_calendar() {
        assert!(validate_date_of_birth("29", "02", "2000").is_ok());
        assert!(validate_date_of_birth("29", "02", "2001").is_err());
        assert!(validate_date_of_birth("31", "02", "2001").is_err());
        assert!(validate_date_of_birth("31", "04", "2001").is_err());
    }

    #[test]
    fn date_of_birth_cannot_be_in_the_future() {
        let next_year = (Utc::now().date_naive().year() + 1).to_string();
        assert!(validate_date_of_birth("01", "01", &next_year).is_err());

        let form = RegistrationForm {
            year: next_year,
            ..registration()
        };
        assert_eq!(form.validate().unwrap_err().field, "date_of_birth");
    }

    #[test]
    fn participant_details_are_checked() {
        let details = ParticipantDetails {
            language: "English".to_string(),
            name: "Giriprathap Raju".to_string(),
            state: "Andhra Pradesh".to_string(),
            district: "Kurnool".to_string(),
            mobile: "9703662169".to_string(),
            day: "01".to_string(),
            month: "01".to_string(),
            year: "2000".to_string(),
        };
        assert!(details.validate().is_ok());

        let details = ParticipantDetails {
            district: " ".to_string(),
            ..details
        };
        assert_eq!(details.validate().unwrap_err().field, "district");
    }

    #[test]
    fn feedback_rating_is_required_and_bounded() {
        let feedback = |rating: Option<&str>| Feedback {
            rating: rating.map(str::to_string),
            comment: String::new(),
        };

        assert_eq!(feedback(Some("4")).validate(), Ok(4));
        assert!(feedback(None).validate().is_err());
        assert!(feedback(Some("0")).validate().is_err());
        assert!(feedback(Some("6")).validate().is_err());
        assert!(feedback(Some("five")).validate().is_err());
    }
}
