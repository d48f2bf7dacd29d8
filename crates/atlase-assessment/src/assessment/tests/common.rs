use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use chrono::Utc;

use crate::assessment::catalog::{Pillar, QuestionCatalog};
use crate::assessment::domain::{AnswerRecord, CostInputs, TechnologyComplexity, UserInfo};
use crate::assessment::repository::{
    AssessmentRepository, AssessmentStats, NewAssessment, RepositoryError, StoredAssessment,
};

pub(super) fn catalog() -> QuestionCatalog {
    QuestionCatalog::standard()
}

/// Every catalog question answered at the same option index.
pub(super) fn answers_at(catalog: &QuestionCatalog, index: usize) -> Vec<AnswerRecord> {
    let mut answers = Vec::new();
    for pillar in Pillar::ordered() {
        for question in catalog.questions(pillar) {
            answers.push(AnswerRecord {
                pillar,
                question_id: question.id.to_string(),
                answer: index,
            });
        }
    }
    answers
}

pub(super) fn cost_inputs() -> CostInputs {
    CostInputs {
        data_scientist_time: 65.0,
        data_scientist_count: 10,
        data_scientist_salary: 120_000.0,
        data_duplication_cost: 250_000.0,
        manual_integration_cost: 180_000.0,
        compliance_violation_cost: 75_000.0,
        time_to_insight: Some(8.0),
        technology_complexity: TechnologyComplexity::Medium,
        data_source_count: 5,
        integration_pattern_count: 3,
        legacy_system_percentage: 30.0,
        cloud_adoption_percentage: 60.0,
    }
}

pub(super) fn user(email: &str) -> UserInfo {
    UserInfo {
        name: Some("Jordan Rivers".to_string()),
        email: Some(email.to_string()),
    }
}

#[derive(Default)]
pub(super) struct MemoryRepository {
    rows: Mutex<Vec<StoredAssessment>>,
    sequence: AtomicU64,
}

impl MemoryRepository {
    pub(super) fn rows(&self) -> Vec<StoredAssessment> {
        self.rows.lock().expect("repository mutex poisoned").clone()
    }
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: NewAssessment) -> Result<StoredAssessment, RepositoryError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = StoredAssessment {
            id,
            submitted_at: Utc::now(),
            record,
        };
        self.rows
            .lock()
            .expect("repository mutex poisoned")
            .push(stored.clone());
        Ok(stored)
    }

    fn list_all(&self) -> Result<Vec<StoredAssessment>, RepositoryError> {
        let mut rows = self.rows();
        rows.reverse();
        Ok(rows)
    }

    fn list_by_email(&self, email: &str) -> Result<Vec<StoredAssessment>, RepositoryError> {
        let mut rows = self.rows();
        rows.retain(|stored| stored.record.email == email);
        rows.reverse();
        Ok(rows)
    }

    fn stats(&self) -> Result<AssessmentStats, RepositoryError> {
        let rows = self.rows.lock().expect("repository mutex poisoned");
        Ok(AssessmentStats::from_records(rows.iter()))
    }
}

/// Repository stub whose every operation fails, for exercising the
/// persistence-failure path.
pub(super) struct FailingRepository;

impl AssessmentRepository for FailingRepository {
    fn insert(&self, _record: NewAssessment) -> Result<StoredAssessment, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn list_all(&self) -> Result<Vec<StoredAssessment>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn list_by_email(&self, _email: &str) -> Result<Vec<StoredAssessment>, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }

    fn stats(&self) -> Result<AssessmentStats, RepositoryError> {
        Err(RepositoryError::Unavailable("storage offline".to_string()))
    }
}
