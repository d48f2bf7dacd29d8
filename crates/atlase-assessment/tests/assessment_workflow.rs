//! Integration specifications for the assessment submission workflow.
//!
//! Scenarios cover the public service facade and the HTTP router end to end:
//! scoring, ROI projection, recommendation selection, persistence policy, and
//! the admin read paths, without reaching into private modules.

mod common {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    use chrono::Utc;

    use atlase_assessment::assessment::{
        AnswerRecord, AssessmentRepository, AssessmentService, AssessmentStats, CostInputs,
        NewAssessment, Pillar, QuestionCatalog, RepositoryError, StoredAssessment,
        TechnologyComplexity, UserInfo,
    };
    use atlase_assessment::config::StorageConfig;

    pub(super) fn catalog() -> QuestionCatalog {
        QuestionCatalog::standard()
    }

    pub(super) fn answers_at(index: usize) -> Vec<AnswerRecord> {
        let catalog = catalog();
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
            time_to_insight: Some(12.0),
            technology_complexity: TechnologyComplexity::Medium,
            data_source_count: 5,
            integration_pattern_count: 3,
            legacy_system_percentage: 30.0,
            cloud_adoption_percentage: 60.0,
        }
    }

    pub(super) fn user_info(email: &str) -> UserInfo {
        UserInfo {
            name: Some("Casey Morgan".to_string()),
            email: Some(email.to_string()),
        }
    }

    #[derive(Default)]
    pub(super) struct MemoryRepository {
        rows: Mutex<Vec<StoredAssessment>>,
        sequence: AtomicU64,
    }

    impl AssessmentRepository for MemoryRepository {
        fn insert(&self, record: NewAssessment) -> Result<StoredAssessment, RepositoryError> {
            let id = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
            let stored = StoredAssessment {
                id,
                submitted_at: Utc::now(),
                record,
            };
            self.rows.lock().expect("lock").push(stored.clone());
            Ok(stored)
        }

        fn list_all(&self) -> Result<Vec<StoredAssessment>, RepositoryError> {
            let mut rows = self.rows.lock().expect("lock").clone();
            rows.reverse();
            Ok(rows)
        }

        fn list_by_email(&self, email: &str) -> Result<Vec<StoredAssessment>, RepositoryError> {
            let mut rows = self.rows.lock().expect("lock").clone();
            rows.retain(|stored| stored.record.email == email);
            rows.reverse();
            Ok(rows)
        }

        fn stats(&self) -> Result<AssessmentStats, RepositoryError> {
            let rows = self.rows.lock().expect("lock");
            Ok(AssessmentStats::from_records(rows.iter()))
        }
    }

    pub(super) fn build_service() -> (
        Arc<AssessmentService<MemoryRepository>>,
        Arc<MemoryRepository>,
    ) {
        build_service_with_storage(StorageConfig::default())
    }

    pub(super) fn build_service_with_storage(
        storage: StorageConfig,
    ) -> (
        Arc<AssessmentService<MemoryRepository>>,
        Arc<MemoryRepository>,
    ) {
        let repository = Arc::new(MemoryRepository::default());
        let service = Arc::new(AssessmentService::new(repository.clone(), storage));
        (service, repository)
    }
}

mod workflow {
    use super::common::*;
    use atlase_assessment::assessment::{AssessmentRepository, MaturityLevel, SaveDisposition};

    #[test]
    fn full_submission_produces_score_roi_and_recommendations() {
        let (service, repository) = build_service();

        let (outcome, disposition) = service
            .submit(&answers_at(3), &cost_inputs(), user_info("casey@example.com"))
            .expect("submission succeeds");

        assert_eq!(outcome.maturity_score.overall_score, 100.0);
        assert_eq!(
            outcome.maturity_score.maturity_level,
            MaturityLevel::Optimized
        );
        assert!(outcome.roi_results.total_benefits > 0.0);
        assert!(outcome.roi_results.complexity_multiplier >= 1.0);
        assert!(!outcome.recommendations.long_term.is_empty());
        assert!(outcome.recommendations.immediate.is_empty());

        assert!(matches!(disposition, SaveDisposition::Saved { id: 1, .. }));
        let stored = repository.list_all().expect("list");
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].record.email, "casey@example.com");
    }

    #[test]
    fn repeat_submissions_are_bit_identical() {
        let (service, _) = build_service();

        let (first, _) = service
            .submit(&answers_at(2), &cost_inputs(), user_info("casey@example.com"))
            .expect("first run");
        let (second, _) = service
            .submit(&answers_at(2), &cost_inputs(), user_info("casey@example.com"))
            .expect("second run");

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).expect("serialize"),
            serde_json::to_vec(&second).expect("serialize")
        );
    }

    #[test]
    fn skip_listed_address_receives_results_without_a_row() {
        let storage = atlase_assessment::config::StorageConfig {
            skip_emails: vec!["qa@example.com".to_string()],
        };
        let (service, repository) = build_service_with_storage(storage);

        let (outcome, disposition) = service
            .submit(&answers_at(1), &cost_inputs(), user_info("qa@example.com"))
            .expect("submission succeeds");

        assert_eq!(outcome.maturity_score.overall_score, 50.0);
        assert!(matches!(disposition, SaveDisposition::Skipped { .. }));
        assert!(repository.list_all().expect("list").is_empty());
    }
}

mod routing {
    use super::common::*;
    use atlase_assessment::assessment::{assessment_router, AssessmentRepository};
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn submission_body(answer_index: usize, email: &str) -> Value {
        let responses: Vec<Value> = answers_at(answer_index)
            .into_iter()
            .map(|answer| serde_json::to_value(answer).expect("serialize answer"))
            .collect();
        json!({
            "responses": responses,
            "costInputs": serde_json::to_value(cost_inputs()).expect("serialize inputs"),
            "userInfo": { "name": "Casey Morgan", "email": email },
        })
    }

    async fn post_json(router: axum::Router, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).expect("serialize")))
            .expect("request");
        let response = router.oneshot(request).await.expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = serde_json::from_slice(&bytes).expect("json");
        (status, payload)
    }

    async fn get_json(router: axum::Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("router dispatch");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        let payload = serde_json::from_slice(&bytes).expect("json");
        (status, payload)
    }

    #[tokio::test]
    async fn post_assessment_returns_full_envelope() {
        let (service, _) = build_service();
        let router = assessment_router(service);

        let (status, payload) = post_json(
            router,
            "/api/v1/assessments",
            submission_body(3, "casey@example.com"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload.pointer("/maturityScore/overallScore"),
            Some(&json!(100.0))
        );
        assert_eq!(
            payload.pointer("/maturityScore/maturityLevel"),
            Some(&json!("Optimized"))
        );
        assert_eq!(
            payload.pointer("/maturityScore/pillarScores/ai_ready"),
            Some(&json!(100.0))
        );
        assert!(payload.pointer("/roiResults/currentCosts/total").is_some());
        assert!(payload
            .pointer("/roiResults/stencilAgentBenefits/totalBenefits")
            .is_some());
        assert!(payload.pointer("/recommendations/longTerm").is_some());
        assert_eq!(
            payload.pointer("/saveResult/id"),
            Some(&json!(1)),
            "first stored row gets id 1"
        );
        assert_eq!(payload.pointer("/userInfo/email"), Some(&json!("casey@example.com")));
    }

    #[tokio::test]
    async fn post_assessment_without_cost_inputs_is_rejected() {
        let (service, _) = build_service();
        let router = assessment_router(service);

        let mut body = submission_body(2, "casey@example.com");
        body.as_object_mut()
            .expect("object body")
            .remove("costInputs");

        let (status, payload) = post_json(router, "/api/v1/assessments", body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(payload.get("error"), Some(&json!("missing required data")));
    }

    #[tokio::test]
    async fn post_assessment_with_unknown_question_is_unprocessable() {
        let (service, repository) = build_service();
        let router = assessment_router(service);

        let mut body = submission_body(2, "casey@example.com");
        body["responses"][0]["questionId"] = json!("assured_99");

        let (status, payload) = post_json(router, "/api/v1/assessments", body).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(payload
            .get("error")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .contains("assured_99"));
        assert!(repository.list_all().expect("list").is_empty());
    }

    #[tokio::test]
    async fn questions_endpoint_serves_the_shared_catalog() {
        let (service, _) = build_service();
        let router = assessment_router(service);

        let (status, payload) = get_json(router, "/api/v1/questions").await;

        assert_eq!(status, StatusCode::OK);
        let pillars = payload.as_object().expect("catalog object");
        assert_eq!(pillars.len(), 6);
        for key in [
            "assured",
            "traceable",
            "logical",
            "ai_ready",
            "sovereign",
            "enhanced_resilience",
        ] {
            let questions = pillars
                .get(key)
                .and_then(Value::as_array)
                .unwrap_or_else(|| panic!("pillar {key} missing"));
            assert_eq!(questions.len(), 4);
            for question in questions {
                assert_eq!(
                    question["options"].as_array().map(Vec::len),
                    question["weights"].as_array().map(Vec::len)
                );
            }
        }
    }

    #[tokio::test]
    async fn technology_landscape_endpoint_serves_reference_lists() {
        let (service, _) = build_service();
        let router = assessment_router(service);

        let (status, payload) = get_json(router, "/api/v1/technology-landscape").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            payload["dataSources"].as_array().map(Vec::len),
            Some(10)
        );
        assert_eq!(
            payload["integrationPatterns"].as_array().map(Vec::len),
            Some(10)
        );
    }

    #[tokio::test]
    async fn admin_endpoints_expose_stored_records_and_stats() {
        let (service, _) = build_service();
        let router = assessment_router(service.clone());

        let (status, _) = post_json(
            router.clone(),
            "/api/v1/assessments",
            submission_body(3, "a@example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = post_json(
            router.clone(),
            "/api/v1/assessments",
            submission_body(0, "b@example.com"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (status, all) = get_json(router.clone(), "/api/v1/admin/assessments").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(all.as_array().map(Vec::len), Some(2));
        // Newest first.
        assert_eq!(all[0]["email"], json!("b@example.com"));

        let (status, by_email) =
            get_json(router.clone(), "/api/v1/admin/assessments/a@example.com").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(by_email.as_array().map(Vec::len), Some(1));

        let (status, stats) = get_json(router, "/api/v1/admin/stats").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(stats["totalAssessments"], json!(2));
        assert_eq!(stats["uniqueUsers"], json!(2));
        assert_eq!(stats["maturityLevelDistribution"]["Optimized"], json!(1));
        assert_eq!(stats["maturityLevelDistribution"]["Basic"], json!(1));
        let average = stats["averageMaturityScore"].as_f64().expect("average");
        assert!((average - 62.5).abs() < 1e-9);
    }
}
