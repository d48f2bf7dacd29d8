use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::StorageConfig;

use super::catalog::QuestionCatalog;
use super::domain::{AnswerRecord, CostInputs, MaturityResult, UserInfo};
use super::recommendations::{recommend, RecommendationSet};
use super::repository::{
    AssessmentRepository, AssessmentStats, LandscapeSnapshot, NewAssessment, StoredAssessment,
};
use super::roi::{self, RoiResult};
use super::scoring::{score_answers, ScoringError};

/// One fully assembled assessment response. Pure data; building it performs
/// no I/O, so identical inputs always produce an identical outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentOutcome {
    pub user_info: UserInfo,
    pub maturity_score: MaturityResult,
    pub roi_results: RoiResult,
    pub recommendations: RecommendationSet,
}

/// Run the scoring pipeline end to end: maturity, ROI projection, and
/// recommendations composed into one response.
pub fn run_assessment(
    catalog: &QuestionCatalog,
    responses: &[AnswerRecord],
    cost_inputs: &CostInputs,
    user_info: UserInfo,
) -> Result<AssessmentOutcome, ScoringError> {
    let maturity_score = score_answers(catalog, responses)?;
    let roi_results = roi::project(maturity_score.overall_score, cost_inputs);
    let recommendations = recommend(
        maturity_score.overall_score,
        cost_inputs,
        &roi_results.stencil_agent_benefits,
    );

    Ok(AssessmentOutcome {
        user_info,
        maturity_score,
        roi_results,
        recommendations,
    })
}

/// What happened to a submission on the persistence side. The computed
/// outcome is returned regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveDisposition {
    Saved { id: u64, email: String },
    /// Address is on the configured skip list.
    Skipped { email: String },
    /// No email supplied, so there was nothing to key the record on.
    NotRequested,
    Failed(String),
}

/// Service composing the shared catalog, the scoring pipeline, and the
/// storage collaborator.
pub struct AssessmentService<R> {
    catalog: Arc<QuestionCatalog>,
    repository: Arc<R>,
    storage: StorageConfig,
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>, storage: StorageConfig) -> Self {
        Self::with_catalog(Arc::new(QuestionCatalog::standard()), repository, storage)
    }

    pub fn with_catalog(
        catalog: Arc<QuestionCatalog>,
        repository: Arc<R>,
        storage: StorageConfig,
    ) -> Self {
        Self {
            catalog,
            repository,
            storage,
        }
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    /// Score a submission and persist it when an email was supplied.
    ///
    /// Persistence failures are reported in the disposition, never as an
    /// error: the caller already holds a valid assessment at that point.
    pub fn submit(
        &self,
        responses: &[AnswerRecord],
        cost_inputs: &CostInputs,
        user_info: UserInfo,
    ) -> Result<(AssessmentOutcome, SaveDisposition), AssessmentServiceError> {
        let outcome = run_assessment(&self.catalog, responses, cost_inputs, user_info)?;

        let email = match outcome.user_info.email.as_deref() {
            Some(email) if !email.trim().is_empty() => email.trim().to_string(),
            _ => return Ok((outcome, SaveDisposition::NotRequested)),
        };

        if self.storage.skips(&email) {
            info!(%email, "storage skipped for allow-listed address");
            return Ok((outcome, SaveDisposition::Skipped { email }));
        }

        let record = NewAssessment {
            email: email.clone(),
            name: outcome.user_info.name.clone().unwrap_or_default(),
            maturity_score: outcome.maturity_score.clone(),
            roi_results: outcome.roi_results.clone(),
            recommendations: outcome.recommendations.clone(),
            cost_inputs: cost_inputs.clone(),
            technology_landscape: LandscapeSnapshot::from(cost_inputs),
        };

        let disposition = match self.repository.insert(record) {
            Ok(stored) => SaveDisposition::Saved {
                id: stored.id,
                email,
            },
            Err(err) => {
                warn!(%email, error = %err, "failed to persist assessment");
                SaveDisposition::Failed(err.to_string())
            }
        };

        Ok((outcome, disposition))
    }

    pub fn list_all(&self) -> Result<Vec<StoredAssessment>, AssessmentServiceError> {
        Ok(self.repository.list_all()?)
    }

    pub fn list_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<StoredAssessment>, AssessmentServiceError> {
        Ok(self.repository.list_by_email(email)?)
    }

    pub fn stats(&self) -> Result<AssessmentStats, AssessmentServiceError> {
        Ok(self.repository.stats()?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] super::repository::RepositoryError),
}
