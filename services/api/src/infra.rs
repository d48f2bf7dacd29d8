use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use atlase_assessment::assessment::{
    AssessmentRepository, AssessmentStats, NewAssessment, RepositoryError, StoredAssessment,
};
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local assessment store. Rows keep insertion order; reads return
/// newest first to match the admin view.
#[derive(Default)]
pub(crate) struct InMemoryAssessmentRepository {
    rows: Mutex<Vec<StoredAssessment>>,
    sequence: AtomicU64,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: NewAssessment) -> Result<StoredAssessment, RepositoryError> {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        let stored = StoredAssessment {
            id,
            submitted_at: Utc::now(),
            record,
        };
        let mut guard = self.rows.lock().expect("repository mutex poisoned");
        guard.push(stored.clone());
        Ok(stored)
    }

    fn list_all(&self) -> Result<Vec<StoredAssessment>, RepositoryError> {
        let guard = self.rows.lock().expect("repository mutex poisoned");
        Ok(guard.iter().rev().cloned().collect())
    }

    fn list_by_email(&self, email: &str) -> Result<Vec<StoredAssessment>, RepositoryError> {
        let guard = self.rows.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .filter(|stored| stored.record.email == email)
            .cloned()
            .collect())
    }

    fn stats(&self) -> Result<AssessmentStats, RepositoryError> {
        let guard = self.rows.lock().expect("repository mutex poisoned");
        Ok(AssessmentStats::from_records(guard.iter()))
    }
}
