use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CostInputs, MaturityLevel, MaturityResult, TechnologyComplexity};
use super::recommendations::RecommendationSet;
use super::roi::RoiResult;

/// Landscape excerpt archived alongside each stored assessment so the admin
/// view can segment without unpacking the full cost inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandscapeSnapshot {
    pub data_source_count: u32,
    pub integration_pattern_count: u32,
    pub legacy_system_percentage: f64,
    pub cloud_adoption_percentage: f64,
    pub technology_complexity: TechnologyComplexity,
}

impl From<&CostInputs> for LandscapeSnapshot {
    fn from(inputs: &CostInputs) -> Self {
        Self {
            data_source_count: inputs.data_source_count,
            integration_pattern_count: inputs.integration_pattern_count,
            legacy_system_percentage: inputs.legacy_system_percentage,
            cloud_adoption_percentage: inputs.cloud_adoption_percentage,
            technology_complexity: inputs.technology_complexity,
        }
    }
}

/// A submission as handed to the repository; the store assigns identity and
/// the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    pub email: String,
    pub name: String,
    pub maturity_score: MaturityResult,
    pub roi_results: RoiResult,
    pub recommendations: RecommendationSet,
    pub cost_inputs: CostInputs,
    pub technology_landscape: LandscapeSnapshot,
}

/// A persisted assessment row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredAssessment {
    pub id: u64,
    pub submitted_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: NewAssessment,
}

/// Storage abstraction so the service and router can be exercised in
/// isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: NewAssessment) -> Result<StoredAssessment, RepositoryError>;
    /// All rows, newest first.
    fn list_all(&self) -> Result<Vec<StoredAssessment>, RepositoryError>;
    fn list_by_email(&self, email: &str) -> Result<Vec<StoredAssessment>, RepositoryError>;
    fn stats(&self) -> Result<AssessmentStats, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Aggregates surfaced to the admin view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentStats {
    pub total_assessments: u64,
    pub unique_users: u64,
    pub average_maturity_score: f64,
    pub maturity_level_distribution: BTreeMap<MaturityLevel, u64>,
}

impl AssessmentStats {
    /// Fold stored rows into the aggregate view. An empty store averages 0
    /// rather than dividing by zero.
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a StoredAssessment>,
    {
        let mut total_assessments = 0u64;
        let mut score_sum = 0.0;
        let mut emails = BTreeSet::new();
        let mut maturity_level_distribution = BTreeMap::new();

        for stored in records {
            total_assessments += 1;
            score_sum += stored.record.maturity_score.overall_score;
            emails.insert(stored.record.email.to_ascii_lowercase());
            *maturity_level_distribution
                .entry(stored.record.maturity_score.maturity_level)
                .or_insert(0) += 1;
        }

        let average_maturity_score = if total_assessments > 0 {
            score_sum / total_assessments as f64
        } else {
            0.0
        };

        Self {
            total_assessments,
            unique_users: emails.len() as u64,
            average_maturity_score,
            maturity_level_distribution,
        }
    }
}
