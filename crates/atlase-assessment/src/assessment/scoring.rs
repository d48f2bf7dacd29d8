use std::collections::BTreeMap;

use super::catalog::{Pillar, QuestionCatalog, MAX_OPTION_WEIGHT};
use super::domain::{AnswerRecord, MaturityLevel, MaturityResult};

/// Errors raised while reducing questionnaire answers to a maturity score.
/// Either variant fails the whole submission; no partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScoringError {
    #[error("unknown question '{question_id}' for pillar '{pillar}'")]
    UnknownQuestion { pillar: &'static str, question_id: String },
    #[error("answer index {selected} out of range for question '{question_id}' ({options} options)")]
    SelectionOutOfRange {
        question_id: String,
        selected: usize,
        options: usize,
    },
}

/// Reduce a set of answers to per-pillar percentages, the unweighted overall
/// mean, and the derived maturity level.
///
/// Each pillar divides its summed weights by the fixed
/// `question_count * MAX_OPTION_WEIGHT` denominator, so an unanswered pillar
/// scores 0 and a partially answered pillar is not rescaled to the questions
/// actually answered.
pub fn score_answers(
    catalog: &QuestionCatalog,
    answers: &[AnswerRecord],
) -> Result<MaturityResult, ScoringError> {
    let mut pillar_scores = BTreeMap::new();

    for pillar in Pillar::ordered() {
        let mut total_weight = 0.0;
        for answer in answers.iter().filter(|answer| answer.pillar == pillar) {
            let question = catalog.lookup(pillar, &answer.question_id).ok_or_else(|| {
                ScoringError::UnknownQuestion {
                    pillar: pillar.label(),
                    question_id: answer.question_id.clone(),
                }
            })?;
            let weight = question.weights.get(answer.answer).copied().ok_or_else(|| {
                ScoringError::SelectionOutOfRange {
                    question_id: answer.question_id.clone(),
                    selected: answer.answer,
                    options: question.options.len(),
                }
            })?;
            total_weight += f64::from(weight);
        }

        let max_possible = catalog.question_count(pillar) as f64 * MAX_OPTION_WEIGHT;
        let score = if max_possible > 0.0 {
            total_weight / max_possible * 100.0
        } else {
            0.0
        };
        pillar_scores.insert(pillar, score);
    }

    let overall_score =
        pillar_scores.values().sum::<f64>() / Pillar::ordered().len() as f64;

    Ok(MaturityResult {
        pillar_scores,
        overall_score,
        maturity_level: MaturityLevel::from_score(overall_score),
    })
}
