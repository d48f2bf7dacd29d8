use serde::{Deserialize, Serialize};

use super::super::domain::CostInputs;

const DEVELOPMENT_TIME_REDUCTION: f64 = 0.70;
const MAINTAINABILITY_IMPROVEMENT: f64 = 0.90;
const EFFICIENCY_INCREASE: f64 = 0.60;
const MAINTENANCE_SHARE: f64 = 0.30;

const DEFAULT_TIME_TO_INSIGHT_WEEKS: f64 = 12.0;
const TIME_TO_MARKET_ACCELERATION: f64 = 0.70;
const WEEKLY_INSIGHT_VALUE: f64 = 50_000.0;

const COMPLEXITY_REDUCTION: f64 = 0.50;
const COMPLEXITY_LEVEL_UNIT_COST: f64 = 10_000.0;
const DATA_SOURCE_UNIT_COST: f64 = 5_000.0;
const INTEGRATION_PATTERN_UNIT_COST: f64 = 3_000.0;

/// Headline percentages reported alongside the benefit bucket. Informational
/// only; they do not scale with maturity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkBenefitMetrics {
    pub development_time_reduction: f64,
    pub maintainability_improvement: f64,
    pub efficiency_increase: f64,
}

/// Operational savings attributed to the stencil agent framework, each term
/// scaled by the maturity multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StencilAgentBenefits {
    pub development_cost_savings: f64,
    pub maintenance_cost_savings: f64,
    pub efficiency_gains: f64,
    pub time_to_market_savings: f64,
    pub complexity_reduction_savings: f64,
    pub total_benefits: f64,
    pub metrics: FrameworkBenefitMetrics,
}

pub(crate) fn stencil_agent_benefits(
    maturity_multiplier: f64,
    inputs: &CostInputs,
) -> StencilAgentBenefits {
    let annual_cost = inputs.annual_data_scientist_cost();

    let development_cost_savings = annual_cost * DEVELOPMENT_TIME_REDUCTION * maturity_multiplier;
    let maintenance_cost_savings =
        annual_cost * MAINTENANCE_SHARE * MAINTAINABILITY_IMPROVEMENT * maturity_multiplier;
    let efficiency_gains = annual_cost * EFFICIENCY_INCREASE * maturity_multiplier;
    let time_to_market_savings =
        time_to_market_savings(inputs.time_to_insight, maturity_multiplier);
    let complexity_reduction_savings =
        complexity_reduction_savings(inputs, maturity_multiplier);

    StencilAgentBenefits {
        development_cost_savings,
        maintenance_cost_savings,
        efficiency_gains,
        time_to_market_savings,
        complexity_reduction_savings,
        total_benefits: development_cost_savings
            + maintenance_cost_savings
            + efficiency_gains
            + time_to_market_savings
            + complexity_reduction_savings,
        metrics: FrameworkBenefitMetrics {
            development_time_reduction: DEVELOPMENT_TIME_REDUCTION * 100.0,
            maintainability_improvement: MAINTAINABILITY_IMPROVEMENT * 100.0,
            efficiency_increase: EFFICIENCY_INCREASE * 100.0,
        },
    }
}

fn time_to_market_savings(time_to_insight: Option<f64>, maturity_multiplier: f64) -> f64 {
    let weeks = time_to_insight.unwrap_or(DEFAULT_TIME_TO_INSIGHT_WEEKS);
    weeks * TIME_TO_MARKET_ACCELERATION * maturity_multiplier * WEEKLY_INSIGHT_VALUE
}

fn complexity_reduction_savings(inputs: &CostInputs, maturity_multiplier: f64) -> f64 {
    let base_complexity_cost = inputs.technology_complexity.factor() * COMPLEXITY_LEVEL_UNIT_COST
        + f64::from(inputs.data_source_count) * DATA_SOURCE_UNIT_COST
        + f64::from(inputs.integration_pattern_count) * INTEGRATION_PATTERN_UNIT_COST;
    base_complexity_cost * COMPLEXITY_REDUCTION * maturity_multiplier
}

const DATA_PREP_RECOVERY: f64 = 0.6;
const DUPLICATION_RECOVERY: f64 = 0.8;
const INTEGRATION_RECOVERY: f64 = 0.7;
const COMPLIANCE_RECOVERY: f64 = 0.9;

/// Savings recovered directly from the current-cost lines by the unified data
/// layer, collapsed to a single scalar.
pub(crate) fn atlase_benefits(maturity_multiplier: f64, inputs: &CostInputs) -> f64 {
    let annual_cost = inputs.annual_data_scientist_cost();

    let data_prep_savings =
        inputs.data_scientist_time / 100.0 * annual_cost * DATA_PREP_RECOVERY * maturity_multiplier;
    let duplication_savings =
        inputs.data_duplication_cost * DUPLICATION_RECOVERY * maturity_multiplier;
    let integration_savings =
        inputs.manual_integration_cost * INTEGRATION_RECOVERY * maturity_multiplier;
    let compliance_savings =
        inputs.compliance_violation_cost * COMPLIANCE_RECOVERY * maturity_multiplier;

    data_prep_savings + duplication_savings + integration_savings + compliance_savings
}
