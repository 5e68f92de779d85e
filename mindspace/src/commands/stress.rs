//! Stress assessment commands

use super::require_session;
use crate::app::AppState;
use crate::error::Result;
use crate::services::stress::QUESTIONS;
use crate::services::{Answer, StressAssessment, StressReport};
use serde::Serialize;

/// One selectable answer
#[derive(Debug, Serialize)]
pub struct AnswerOption {
    pub value: u32,
    pub label: &'static str,
}

/// Questionnaire content
#[derive(Debug, Serialize)]
pub struct Questionnaire {
    pub questions: &'static [&'static str],
    pub options: Vec<AnswerOption>,
}

/// Questions and answer scale; static content, no session needed
pub fn get_stress_questionnaire() -> Questionnaire {
    Questionnaire {
        questions: &QUESTIONS,
        options: Answer::ALL
            .into_iter()
            .map(|answer| AnswerOption {
                value: answer.value(),
                label: answer.label(),
            })
            .collect(),
    }
}

/// Score and store a completed questionnaire, one answer value per question
pub fn submit_stress_assessment(state: &AppState, answers: &[u8]) -> Result<StressReport> {
    require_session(state)?;

    let answers = answers
        .iter()
        .map(|value| Answer::try_from(*value))
        .collect::<Result<Vec<_>>>()?;
    let assessment = StressAssessment::from_answers(answers)?;

    state.stress_service.submit(&assessment)
}

/// Past results with their interpretation, newest first
pub fn list_stress_history(state: &AppState) -> Result<Vec<StressReport>> {
    require_session(state)?;

    let history = state.stress_service.history()?;
    Ok(history.into_iter().map(StressReport::from).collect())
}
