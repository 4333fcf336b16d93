//! In-memory stand-ins for the quiz backend and the identity provider.

use color_eyre::Result;

use crate::{
    models::{AreaType, DateOfBirth, Question, Quiz, QuizStatus, User},
    services::catalog::QuizRepository,
};

/// The identity every successful OTP verification signs in.
pub fn placeholder_user() -> User {
    User {
        id: "1".to_string(),
        first_name: "Giriprathap".to_string(),
        last_name: "Raju".to_string(),
        email: "giriprathap@example.com".to_string(),
        mobile: "9703662169".to_string(),
        date_of_birth: DateOfBirth {
            day: "01".to_string(),
            month: "01".to_string(),
            year: "2000".to_string(),
        },
        gender: "male".to_string(),
        blood_group: None,
        state: "Andhra Pradesh".to_string(),
        district: "Kurnool".to_string(),
        area_type: AreaType::Urban,
        ulb: Some("Kurnool Municipal Corporation".to_string()),
        block: None,
        panchayat: None,
        village: None,
        pincode: "518001".to_string(),
        youth_type: "NSS".to_string(),
        sports_talent: Some("Archery".to_string()),
        khelo_india_participant: false,
        username: Some("giriprathap_raju".to_string()),
    }
}

pub fn quizzes() -> Vec<Quiz> {
    vec![
        Quiz {
            id: "1".to_string(),
            title: "Viksit Bharat Young Leaders Dialogue (VBYLD) 2026".to_string(),
            organizer: "Department of Youth Affairs".to_string(),
            start_date: "1 Sep, 2025".to_string(),
            end_date: "15 Oct, 2025".to_string(),
            expiry_date: "15th Oct, 2025".to_string(),
            total_questions: 20,
            duration: "00:10".to_string(),
            attempt_count: 1,
            total_score: 20,
            passing_score: 7,
            status: QuizStatus::Ongoing,
        },
        Quiz {
            id: "2".to_string(),
            title: "National Ayurveda Quiz Competition".to_string(),
            organizer: "ALL INDIA INSTITUTE OF AYURVEDA".to_string(),
            start_date: "19 Sep, 2025".to_string(),
            end_date: "23 Sep, 2025".to_string(),
            expiry_date: "23rd Sep, 2025".to_string(),
            total_questions: 20,
            duration: "00:15".to_string(),
            attempt_count: 1,
            total_score: 20,
            passing_score: 13,
            status: QuizStatus::Ongoing,
        },
    ]
}

fn question(id: u32, prompt: &str, options: &[&str], answer: usize) -> Question {
    Question {
        id,
        prompt: prompt.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        answer,
        selected: None,
    }
}

/// The shared question bank; every quiz in the catalog draws on it.
pub fn questions() -> Vec<Question> {
    vec![
        question(
            1,
            "A bus at the bus stop signals the intent of moving off, you will",
            &["Slow down and give way", "Speed past it", "Flash lights and go past the bus"],
            0,
        ),
        question(
            2,
            "What is the best approach to managing healthy weight loss?",
            &[
                "Gradual, balanced diet changes and exercise",
                "Extreme calorie restriction",
                "Consuming only high-protein diets",
                "Skipping meals",
            ],
            0,
        ),
        question(
            3,
            "Bihu is the major festival of which Indian state?",
            &["Mizoram", "Assam", "Nagaland", "Meghalaya"],
            1,
        ),
        question(
            4,
            "Lightning strikes vertically and then spread radially outward The threat due to lightning could be from:-",
            &[
                "Direct strikes only",
                "Radial strikes only",
                "Both Direct and radial strikes",
                "None of the above",
            ],
            2,
        ),
        question(
            5,
            "What does regular usage of nicotine do to the brain?",
            &[
                "Initially stimulates but later leads to addiction",
                "Makes it sharper",
                "Keeps it calm & cool",
                "Has no harmful effect",
            ],
            0,
        ),
        question(
            6,
            "How long does AB PM-JAY cover pre-hospitalization and post-hospitalization expenses?",
            &[
                "1 day pre, 7 days post",
                "2 days pre, 10 days post",
                "3 days pre, 15 days post",
                "5 days pre, 20 days post",
            ],
            2,
        ),
        question(
            7,
            "National Youth Day commemorates the birth anniversary of which personality?",
            &[
                "Mahatma Gandhi",
                "Swami Vivekananda",
                "Jawaharlal Nehru",
                "Dr. APJ Abdul Kalam",
            ],
            1,
        ),
        question(
            8,
            "National Health Authority is a ?",
            &[
                "Government Body",
                "CSR organisation",
                "Private entity",
                "Semi- Government body",
            ],
            0,
        ),
        question(
            9,
            "Which city in UP is famous for the historic 'Bara Imambara' and Rumi Darwaza?",
            &["Kanpur", "Varanasi", "Lucknow", "Agra"],
            2,
        ),
        question(
            10,
            "According to India's Prime Minister's Ten Point Agenda on DRR, why is it important to involve women in disaster risk management?",
            &[
                "Women are more technologically savvy for efficient disaster response.",
                "Women's leadership can bring better community resilience to disasters.",
                "Women have better risk mapping skills for understanding nature and disaster risks.",
                "Women's involvement can strengthen international response to disasters.",
            ],
            1,
        ),
        question(
            11,
            "The present-day state of Rajasthan was formed on which date?",
            &["01-Nov-50", "26-Jan-50", "01-Nov-56", "15-Aug-47"],
            2,
        ),
        question(
            12,
            "Which point of the Prime Minister's Ten Point Agenda emphasizes the need for global risk mapping?",
            &[
                "Point 2: Risk coverage for all sectors.",
                "Point 4: Improve global understanding of nature and disaster risks.",
                "Point 6: Develop a network of universities for disaster-related issues.",
                "Point 8: Build on local capacity and initiative for disaster risk reduction.",
            ],
            1,
        ),
        question(
            13,
            "Which country has the highest EVs per capita?",
            &["China", "United States", "Norway", "India"],
            2,
        ),
        question(
            14,
            "Which of the following is a mega event promoted through MY Bharat platform?",
            &[
                "Climate Action Yuva",
                "Ek Ped Maa Ke Naam",
                "Digital Literacy Campaign",
                "Startup India Initiative",
            ],
            1,
        ),
        question(
            15,
            "No child shall be given in adoption to a couple unless they have at least years of stable marital relationship.",
            &["5 years", "2 years", "10 years", "6 years"],
            1,
        ),
        question(
            16,
            "What is the prize money for individual category in National Youth Awards?",
            &["50,000", "100,000", "200,000", "500,000"],
            1,
        ),
        question(
            17,
            "Which day is celebrated as National Youth Day in India?",
            &["12-Jan", "15-Aug", "02-Oct", "26-Jan"],
            0,
        ),
        question(
            18,
            "Goa was granted full statehood within the Indian Union in which year?",
            &["1965", "1970", "1987", "2000"],
            2,
        ),
        question(
            19,
            "A cheque that can only be encashed by depositing in a bank is known as",
            &[
                "Demand Draft",
                "Bearer Cheque",
                "Account Payee Cheque",
                "Account Deposit Cheque",
            ],
            2,
        ),
        question(
            20,
            "Which of the following is a recommended action during a wildfire?",
            &[
                "Turn on sprinklers to wet the house",
                "Start a controlled burn to clear vegetation",
                "Drive through the fire to reach safety",
                "Open windows to let fresh air in",
            ],
            0,
        ),
    ]
}

/// Fixture-backed [`QuizRepository`].
#[derive(Clone, Default)]
pub struct FixtureRepository;

impl QuizRepository for FixtureRepository {
    async fn quizzes(&self) -> Result<Vec<Quiz>> {
        Ok(quizzes())
    }

    async fn questions(&self, quiz_id: &str) -> Result<Option<Vec<Question>>> {
        let known = quizzes().iter().any(|q| q.id == quiz_id);
        Ok(known.then(questions))
    }
}
