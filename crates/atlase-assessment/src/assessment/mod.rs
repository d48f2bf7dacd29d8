//! Maturity scoring, ROI projection, and recommendation generation.
//!
//! The pipeline is pure and synchronous: answers plus cost inputs go in,
//! a fully assembled assessment comes out, and persistence happens after the
//! fact through the repository collaborator. The HTTP router and the service
//! facade live here too so every surface shares one catalog and one formula
//! set.

pub mod catalog;
pub mod domain;
pub mod recommendations;
pub mod repository;
pub mod roi;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    Pillar, Question, QuestionCatalog, ResponseKind, TechnologyLandscape, MAX_OPTION_WEIGHT,
};
pub use domain::{
    AnswerRecord, CostInputs, MaturityLevel, MaturityResult, TechnologyComplexity, UserInfo,
};
pub use recommendations::{recommend, RecommendationSet};
pub use repository::{
    AssessmentRepository, AssessmentStats, LandscapeSnapshot, NewAssessment, RepositoryError,
    StoredAssessment,
};
pub use roi::{
    project, CurrentCosts, FrameworkBenefitMetrics, ImplementationCosts, RoiResult,
    StencilAgentBenefits,
};
pub use router::assessment_router;
pub use scoring::{score_answers, ScoringError};
pub use service::{
    run_assessment, AssessmentOutcome, AssessmentService, AssessmentServiceError, SaveDisposition,
};
