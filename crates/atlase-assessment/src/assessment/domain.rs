use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::catalog::Pillar;

/// One selected option for a catalog question. `answer` indexes into the
/// question's options/weights arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub pillar: Pillar,
    pub question_id: String,
    pub answer: usize,
}

/// Coarse sizing of the surrounding technology estate.
///
/// Every consumer maps the level through [`TechnologyComplexity::factor`];
/// nothing reads the raw wire string, so the level-to-factor mapping cannot
/// drift between call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TechnologyComplexity {
    Low,
    Medium,
    High,
}

impl TechnologyComplexity {
    pub const fn factor(self) -> f64 {
        match self {
            TechnologyComplexity::High => 10.0,
            TechnologyComplexity::Medium => 5.0,
            TechnologyComplexity::Low => 1.0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TechnologyComplexity::High => "high",
            TechnologyComplexity::Medium => "medium",
            TechnologyComplexity::Low => "low",
        }
    }
}

/// Cost and technology-landscape figures supplied by the caller.
///
/// The projector takes these verbatim; range validation belongs to the form
/// layer, and negative figures flow through the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostInputs {
    /// Share of data-scientist time spent on data preparation, in percent.
    pub data_scientist_time: f64,
    pub data_scientist_count: u32,
    pub data_scientist_salary: f64,
    pub data_duplication_cost: f64,
    pub manual_integration_cost: f64,
    pub compliance_violation_cost: f64,
    /// Weeks from question to insight today; defaults to 12 when absent.
    #[serde(default)]
    pub time_to_insight: Option<f64>,
    pub technology_complexity: TechnologyComplexity,
    pub data_source_count: u32,
    pub integration_pattern_count: u32,
    pub legacy_system_percentage: f64,
    pub cloud_adoption_percentage: f64,
}

impl CostInputs {
    pub fn annual_data_scientist_cost(&self) -> f64 {
        f64::from(self.data_scientist_count) * self.data_scientist_salary
    }
}

/// Free-form identity pass-through; the scoring pipeline never interprets it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Qualitative tier derived from the overall percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityLevel {
    Basic,
    Intermediate,
    Advanced,
    Optimized,
}

impl MaturityLevel {
    /// Thresholds are inclusive lower bounds: 80 is already Optimized,
    /// 79.999 is still Advanced.
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            MaturityLevel::Optimized
        } else if score >= 60.0 {
            MaturityLevel::Advanced
        } else if score >= 40.0 {
            MaturityLevel::Intermediate
        } else {
            MaturityLevel::Basic
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            MaturityLevel::Basic => "Basic",
            MaturityLevel::Intermediate => "Intermediate",
            MaturityLevel::Advanced => "Advanced",
            MaturityLevel::Optimized => "Optimized",
        }
    }
}

/// Immutable scoring snapshot for one submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaturityResult {
    pub pillar_scores: BTreeMap<Pillar, f64>,
    pub overall_score: f64,
    pub maturity_level: MaturityLevel,
}
