//! ROI projection over a maturity score and a set of cost inputs.
//!
//! Each sub-step is a pure function of its declared inputs; `project` runs
//! them in dependency order and never divides by a non-positive denominator.

mod benefits;
mod complexity;
mod implementation;

pub use benefits::{FrameworkBenefitMetrics, StencilAgentBenefits};

use serde::{Deserialize, Serialize};

use super::domain::CostInputs;

/// What the organization spends today, before any framework adoption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentCosts {
    pub data_preparation: f64,
    pub data_duplication: f64,
    pub manual_integration: f64,
    pub compliance_violations: f64,
    pub total: f64,
}

/// One-time adoption spend, split between the agent framework and the data
/// platform rollout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImplementationCosts {
    pub stencil_agent_cost: f64,
    pub atlase_cost: f64,
    pub total_cost: f64,
    pub complexity_multiplier: f64,
}

/// Full projection returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiResult {
    pub current_costs: CurrentCosts,
    pub stencil_agent_benefits: StencilAgentBenefits,
    pub atlase_benefits: f64,
    pub total_benefits: f64,
    pub implementation_costs: ImplementationCosts,
    pub net_benefits: f64,
    pub roi: f64,
    pub payback_period: f64,
    pub complexity_multiplier: f64,
}

/// Divide, resolving to 0 when the denominator cannot support a meaningful
/// ratio. Keeps Infinity/NaN out of every serialized response.
pub(crate) fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Project the financial impact of adoption at the given maturity.
pub fn project(overall_maturity_percent: f64, inputs: &CostInputs) -> RoiResult {
    let maturity_multiplier = overall_maturity_percent / 100.0;

    let annual_cost = inputs.annual_data_scientist_cost();
    let data_preparation = inputs.data_scientist_time / 100.0 * annual_cost;
    let current_costs = CurrentCosts {
        data_preparation,
        data_duplication: inputs.data_duplication_cost,
        manual_integration: inputs.manual_integration_cost,
        compliance_violations: inputs.compliance_violation_cost,
        total: data_preparation
            + inputs.data_duplication_cost
            + inputs.manual_integration_cost
            + inputs.compliance_violation_cost,
    };

    let stencil_agent_benefits = benefits::stencil_agent_benefits(maturity_multiplier, inputs);
    let complexity_multiplier = complexity::complexity_multiplier(inputs);
    let atlase_benefits = benefits::atlase_benefits(maturity_multiplier, inputs);
    let implementation_costs =
        implementation::implementation_costs(maturity_multiplier, complexity_multiplier, inputs);

    let total_benefits = atlase_benefits + stencil_agent_benefits.total_benefits;
    let net_benefits = total_benefits - implementation_costs.total_cost;
    let roi = safe_ratio(net_benefits, implementation_costs.total_cost) * 100.0;
    let payback_period = safe_ratio(implementation_costs.total_cost, total_benefits / 12.0);

    RoiResult {
        current_costs,
        stencil_agent_benefits,
        atlase_benefits,
        total_benefits,
        implementation_costs,
        net_benefits,
        roi,
        payback_period,
        complexity_multiplier,
    }
}
