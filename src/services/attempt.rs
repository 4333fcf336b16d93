//! A single run through a quiz's questions.
//!
//! ```text
//! NotStarted -> InProgress <-> ConfirmingSubmit -> Submitted
//! ```
//!
//! Navigation and answer selection only apply while `InProgress`. The clock
//! runs in both `InProgress` and `ConfirmingSubmit`; when it reaches zero the
//! attempt is submitted as it stands.

use chrono::{DateTime, Utc};

use crate::{
    models::{AttemptResult, Question, Quiz},
    names,
    rejections::ValidationError,
    services::ticker::{Countdown, Tick},
    utils,
};

const NOT_IN_PROGRESS: ValidationError =
    ValidationError::new("attempt", "the quiz is not in progress");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    ConfirmingSubmit,
    Submitted,
}

#[derive(Debug)]
pub struct QuizAttempt {
    quiz: Quiz,
    questions: Vec<Question>,
    current: usize,
    remaining: u32,
    phase: Phase,
    result: Option<AttemptResult>,
}

impl QuizAttempt {
    pub fn new(quiz: Quiz, questions: Vec<Question>) -> Result<Self, ValidationError> {
        if questions.is_empty() {
            return Err(ValidationError::new("questions", "the quiz has no questions"));
        }
        Ok(Self {
            quiz,
            questions,
            current: 0,
            remaining: names::QUIZ_BUDGET_SECS,
            phase: Phase::NotStarted,
            result: None,
        })
    }

    pub fn start(&mut self) -> Result<(), ValidationError> {
        if self.phase != Phase::NotStarted {
            return Err(ValidationError::new("attempt", "the quiz has already started"));
        }
        self.phase = Phase::InProgress;
        tracing::info!("attempt started for quiz {}", self.quiz.id);
        Ok(())
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> &Question {
        &self.questions[self.current]
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn remaining_display(&self) -> String {
        utils::format_clock(self.remaining)
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answered_count(&self) -> usize {
        self.questions.iter().filter(|q| q.is_answered()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.total() - self.answered_count()
    }

    pub fn result(&self) -> Option<&AttemptResult> {
        self.result.as_ref()
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.questions.len()
    }

    fn ensure_in_progress(&self) -> Result<(), ValidationError> {
        if self.phase == Phase::InProgress {
            Ok(())
        } else {
            Err(NOT_IN_PROGRESS)
        }
    }

    pub fn select_answer(&mut self, option: &str) -> Result<(), ValidationError> {
        self.ensure_in_progress()?;
        let question = &mut self.questions[self.current];
        if !question.options.iter().any(|o| o == option) {
            tracing::warn!("rejected unknown option for question {}", question.id);
            return Err(ValidationError::new("option", "choose one of the listed options"));
        }
        question.selected = Some(option.to_string());
        Ok(())
    }

    pub fn clear_answer(&mut self) -> Result<(), ValidationError> {
        self.ensure_in_progress()?;
        self.questions[self.current].selected = None;
        Ok(())
    }

    pub fn next(&mut self) -> Result<(), ValidationError> {
        self.ensure_in_progress()?;
        if !self.is_last() {
            self.current += 1;
        }
        Ok(())
    }

    pub fn previous(&mut self) -> Result<(), ValidationError> {
        self.ensure_in_progress()?;
        self.current = self.current.saturating_sub(1);
        Ok(())
    }

    pub fn skip(&mut self) -> Result<(), ValidationError> {
        self.next()
    }

    pub fn jump_to(&mut self, index: usize) -> Result<(), ValidationError> {
        self.ensure_in_progress()?;
        if index >= self.questions.len() {
            return Err(ValidationError::new("question", "no such question"));
        }
        self.current = index;
        Ok(())
    }

    pub fn request_submit(&mut self) -> Result<(), ValidationError> {
        self.ensure_in_progress()?;
        self.phase = Phase::ConfirmingSubmit;
        Ok(())
    }

    pub fn cancel_submit(&mut self) -> Result<(), ValidationError> {
        if self.phase != Phase::ConfirmingSubmit {
            return Err(ValidationError::new("attempt", "no submission is pending"));
        }
        self.phase = Phase::InProgress;
        Ok(())
    }

    pub fn confirm_submit(&mut self, now: DateTime<Utc>) -> Result<&AttemptResult, ValidationError> {
        if self.phase != Phase::ConfirmingSubmit {
            return Err(ValidationError::new("attempt", "no submission is pending"));
        }
        Ok(self.finish(now, false))
    }

    fn finish(&mut self, now: DateTime<Utc>, timed_out: bool) -> &AttemptResult {
        let score = self.questions.iter().filter(|q| q.is_correct()).count() as u32;
        let result = AttemptResult {
            quiz_id: self.quiz.id.clone(),
            quiz_title: self.quiz.title.clone(),
            organizer: self.quiz.organizer.clone(),
            score,
            total: self.questions.len() as u32,
            answered: self.answered_count() as u32,
            passing_score: self.quiz.passing_score,
            timed_out,
            submitted_at: now,
        };
        tracing::info!(
            "attempt submitted for quiz {}: score={}/{}, answered={}, timed_out={}",
            result.quiz_id,
            result.score,
            result.total,
            result.answered,
            timed_out
        );
        self.phase = Phase::Submitted;
        self.result.insert(result)
    }
}

impl Countdown for QuizAttempt {
    fn tick(&mut self) -> Tick {
        match self.phase {
            Phase::Submitted => Tick::Halt,
            Phase::NotStarted => Tick::Continue,
            Phase::InProgress | Phase::ConfirmingSubmit => {
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining == 0 {
                    self.finish(Utc::now(), true);
                    Tick::Halt
                } else {
                    Tick::Continue
                }
            }
        }
    }
}
