use chrono::{DateTime, Utc};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateOfBirth {
    pub day: String,
    pub month: String,
    pub year: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaType {
    Urban,
    Rural,
}

impl AreaType {
    pub fn label(self) -> &'static str {
        match self {
            AreaType::Urban => "Urban",
            AreaType::Rural => "Rural",
        }
    }
}

/// The signed-in citizen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile: String,
    pub date_of_birth: DateOfBirth,
    pub gender: String,
    pub blood_group: Option<String>,
    pub state: String,
    pub district: String,
    pub area_type: AreaType,
    pub ulb: Option<String>,
    pub block: Option<String>,
    pub panchayat: Option<String>,
    pub village: Option<String>,
    pub pincode: String,
    pub youth_type: String,
    pub sports_talent: Option<String>,
    pub khelo_india_participant: bool,
    pub username: Option<String>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizStatus {
    Ongoing,
    Upcoming,
    Past,
}

impl QuizStatus {
    pub fn label(self) -> &'static str {
        match self {
            QuizStatus::Ongoing => "Ongoing",
            QuizStatus::Upcoming => "Upcoming",
            QuizStatus::Past => "Past",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub organizer: String,
    pub start_date: String,
    pub end_date: String,
    pub expiry_date: String,
    pub total_questions: u32,
    /// Declared duration as `hh:mm`; the attempt clock does not follow it.
    pub duration: String,
    pub attempt_count: u32,
    pub total_score: u32,
    pub passing_score: u32,
    pub status: QuizStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub answer: usize,
    pub selected: Option<String>,
}

impl Question {
    pub fn is_answered(&self) -> bool {
        self.selected.as_deref().is_some_and(|s| !s.is_empty())
    }

    pub fn is_correct(&self) -> bool {
        match (&self.selected, self.options.get(self.answer)) {
            (Some(selected), Some(answer)) => selected == answer,
            _ => false,
        }
    }
}

/// Outcome of a submitted attempt, kept for the results and certificate views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AttemptResult {
    pub quiz_id: String,
    pub quiz_title: String,
    pub organizer: String,
    pub score: u32,
    pub total: u32,
    pub answered: u32,
    pub passing_score: u32,
    pub timed_out: bool,
    pub submitted_at: DateTime<Utc>,
}

impl AttemptResult {
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            self.score * 100 / self.total
        }
    }

    pub fn passed(&self) -> bool {
        self.score >= self.passing_score
    }
}
