//! Stress self-assessment
//!
//! An eight-question questionnaire answered on a five-point frequency scale.
//! The total score is classified by its share of the maximum:
//!
//! | Percentage | Level     |
//! |------------|-----------|
//! | < 25       | Low       |
//! | < 50       | Moderate  |
//! | < 75       | High      |
//! | otherwise  | Very High |

use crate::config::STRESS_ANSWER_MAX;
use crate::database::{Repository, StressResult};
use crate::error::{AppError, Result};
use serde::Serialize;

pub const QUESTIONS: [&str; 8] = [
    "I feel overwhelmed by my responsibilities",
    "I have trouble sleeping or sleeping too much",
    "I find it hard to concentrate on tasks",
    "I feel irritable or on edge frequently",
    "I've lost interest in activities I used to enjoy",
    "I feel exhausted even after resting",
    "I worry excessively about future events",
    "I have difficulty making decisions",
];

/// How often a statement applies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Never = 0,
    Rarely = 1,
    Sometimes = 2,
    Often = 3,
    VeryOften = 4,
}

impl Answer {
    pub const ALL: [Answer; 5] = [
        Answer::Never,
        Answer::Rarely,
        Answer::Sometimes,
        Answer::Often,
        Answer::VeryOften,
    ];

    pub fn value(self) -> u32 {
        self as u32
    }

    pub fn label(self) -> &'static str {
        match self {
            Answer::Never => "Never",
            Answer::Rarely => "Rarely",
            Answer::Sometimes => "Sometimes",
            Answer::Often => "Often",
            Answer::VeryOften => "Very Often",
        }
    }
}

impl TryFrom<u8> for Answer {
    type Error = AppError;

    fn try_from(value: u8) -> Result<Self> {
        Answer::ALL
            .into_iter()
            .find(|answer| answer.value() == u32::from(value))
            .ok_or_else(|| {
                AppError::Generic(format!(
                    "Answer must be between 0 and {}, got {}",
                    STRESS_ANSWER_MAX, value
                ))
            })
    }
}

/// Stress classification of a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StressLevel {
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl StressLevel {
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage < 25.0 {
            StressLevel::Low
        } else if percentage < 50.0 {
            StressLevel::Moderate
        } else if percentage < 75.0 {
            StressLevel::High
        } else {
            StressLevel::VeryHigh
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Moderate => "Moderate",
            StressLevel::High => "High",
            StressLevel::VeryHigh => "Very High",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            StressLevel::Low => "You're managing stress well! Keep up your healthy habits.",
            StressLevel::Moderate => {
                "Some stress is present. Consider practicing relaxation techniques."
            }
            StressLevel::High => {
                "You're experiencing significant stress. Reaching out for support could help."
            }
            StressLevel::VeryHigh => {
                "You're under considerable stress. Please consider speaking with a counselor."
            }
        }
    }
}

/// In-progress questionnaire
#[derive(Debug, Clone, Default)]
pub struct StressAssessment {
    answers: Vec<Answer>,
}

impl StressAssessment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a finished or partial assessment from answers in question order
    pub fn from_answers(answers: impl IntoIterator<Item = Answer>) -> Result<Self> {
        let mut assessment = Self::new();
        for answer in answers {
            assessment.answer(answer)?;
        }
        Ok(assessment)
    }

    pub fn total_questions(&self) -> usize {
        QUESTIONS.len()
    }

    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Index and text of the next question, or `None` once complete
    pub fn current_question(&self) -> Option<(usize, &'static str)> {
        QUESTIONS
            .get(self.answers.len())
            .map(|question| (self.answers.len(), *question))
    }

    /// Record the answer to the current question
    pub fn answer(&mut self, answer: Answer) -> Result<()> {
        if self.is_complete() {
            return Err(AppError::Generic(
                "All questions have already been answered".to_string(),
            ));
        }
        self.answers.push(answer);
        Ok(())
    }

    /// Step back one question, discarding its answer
    pub fn previous(&mut self) -> Option<Answer> {
        self.answers.pop()
    }

    pub fn reset(&mut self) {
        self.answers.clear();
    }

    pub fn is_complete(&self) -> bool {
        self.answers.len() == QUESTIONS.len()
    }

    /// Position through the questionnaire as a percentage, counting the
    /// question currently shown
    pub fn progress(&self) -> f64 {
        let shown = (self.answers.len() + 1).min(QUESTIONS.len());
        shown as f64 / QUESTIONS.len() as f64 * 100.0
    }

    pub fn score(&self) -> u32 {
        self.answers.iter().map(|answer| answer.value()).sum()
    }

    pub fn max_score(&self) -> u32 {
        QUESTIONS.len() as u32 * STRESS_ANSWER_MAX
    }
}

/// Interpretation of a stored result
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StressReport {
    #[serde(flatten)]
    pub result: StressResult,
    pub percentage: f64,
    pub level: StressLevel,
    pub message: &'static str,
    /// Suggest professional support above half the maximum score
    pub recommend_counselor: bool,
}

impl From<StressResult> for StressReport {
    fn from(result: StressResult) -> Self {
        let percentage = result.percentage();
        let level = StressLevel::from_percentage(percentage);

        Self {
            result,
            percentage,
            level,
            message: level.message(),
            recommend_counselor: percentage > 50.0,
        }
    }
}

/// Service for stress assessment results
#[derive(Clone)]
pub struct StressService {
    repo: Repository,
}

impl StressService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Store a finished assessment and interpret it
    pub fn submit(&self, assessment: &StressAssessment) -> Result<StressReport> {
        if !assessment.is_complete() {
            return Err(AppError::IncompleteAssessment {
                answered: assessment.answered(),
                total: assessment.total_questions(),
            });
        }

        let result = self
            .repo
            .create_stress_result(assessment.score(), assessment.max_score())?;
        let report = StressReport::from(result);

        tracing::info!(
            "Stress assessment recorded: {}/{} ({})",
            report.result.score,
            report.result.max_score,
            report.level.label()
        );

        Ok(report)
    }

    /// Past results, newest first
    pub fn history(&self) -> Result<Vec<StressResult>> {
        self.repo.list_stress_results()
    }
}
