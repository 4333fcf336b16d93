use color_eyre::Result;
use serde::Deserialize;

use crate::{
    fixtures::FixtureRepository,
    models::{Question, Quiz, QuizStatus},
    rejections::{AppError, ResultExt},
    services::attempt::QuizAttempt,
};

// ---------------------------------------------------------------------------
// QuizRepository trait (fixtures today, a network backend later)
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait QuizRepository: Send + Sync {
    fn quizzes(&self) -> impl std::future::Future<Output = Result<Vec<Quiz>>> + Send;

    /// `None` when the quiz id is unknown.
    fn questions(
        &self,
        quiz_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<Vec<Question>>>> + Send;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogTab {
    #[default]
    Ongoing,
    Upcoming,
    Past,
    MyQuiz,
    All,
}

impl CatalogTab {
    pub const ALL: [CatalogTab; 5] = [
        CatalogTab::Ongoing,
        CatalogTab::Upcoming,
        CatalogTab::Past,
        CatalogTab::MyQuiz,
        CatalogTab::All,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            CatalogTab::Ongoing => "ongoing",
            CatalogTab::Upcoming => "upcoming",
            CatalogTab::Past => "past",
            CatalogTab::MyQuiz => "my-quiz",
            CatalogTab::All => "all",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CatalogTab::Ongoing => "Ongoing",
            CatalogTab::Upcoming => "Upcoming",
            CatalogTab::Past => "Past",
            CatalogTab::MyQuiz => "My Quiz",
            CatalogTab::All => "All",
        }
    }

    fn status(self) -> Option<QuizStatus> {
        match self {
            CatalogTab::Ongoing => Some(QuizStatus::Ongoing),
            CatalogTab::Upcoming => Some(QuizStatus::Upcoming),
            CatalogTab::Past => Some(QuizStatus::Past),
            CatalogTab::MyQuiz | CatalogTab::All => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub tab: CatalogTab,
    #[serde(default)]
    pub q: String,
}

impl CatalogFilter {
    pub fn matches(&self, quiz: &Quiz) -> bool {
        if let Some(status) = self.tab.status() {
            if quiz.status != status {
                return false;
            }
        }
        let query = self.q.trim().to_lowercase();
        query.is_empty() || quiz.title.to_lowercase().contains(&query)
    }
}

// ---------------------------------------------------------------------------
// CatalogService
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct CatalogService<R: QuizRepository = FixtureRepository> {
    repo: R,
}

impl<R: QuizRepository> CatalogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub async fn list(&self, filter: &CatalogFilter) -> Result<Vec<Quiz>, AppError> {
        let quizzes = self.repo.quizzes().await.reject("could not load quizzes")?;
        Ok(quizzes.into_iter().filter(|q| filter.matches(q)).collect())
    }

    pub async fn quiz(&self, quiz_id: &str) -> Result<Quiz, AppError> {
        self.repo
            .quizzes()
            .await
            .reject("could not load quizzes")?
            .into_iter()
            .find(|q| q.id == quiz_id)
            .ok_or(AppError::NotFound("no such quiz"))
    }

    /// Builds a started attempt over the quiz's question sequence.
    pub async fn start_attempt(&self, quiz_id: &str) -> Result<QuizAttempt, AppError> {
        let quiz = self.quiz(quiz_id).await?;
        let questions = self
            .repo
            .questions(quiz_id)
            .await
            .reject("could not load questions")?
            .ok_or(AppError::NotFound("no such quiz"))?;

        let mut attempt = QuizAttempt::new(quiz, questions)?;
        attempt.start()?;
        Ok(attempt)
    }
}
