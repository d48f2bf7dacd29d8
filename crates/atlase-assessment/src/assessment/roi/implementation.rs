use super::super::domain::CostInputs;
use super::ImplementationCosts;

const BASE_FRAMEWORK_COST: f64 = 50_000.0;
const PER_USER_COST: f64 = 5_000.0;
const COMPLEXITY_LEVEL_UNIT_COST: f64 = 2_000.0;
const INTEGRATION_POINT_UNIT_COST: f64 = 1_000.0;

/// Share of the annual staff cost assumed for the platform rollout before
/// maturity and complexity adjustments.
const PLATFORM_COST_SHARE: f64 = 0.5;

/// Adoption spend: a sized framework license plus a platform rollout that
/// shrinks with maturity and grows with landscape complexity.
pub(crate) fn implementation_costs(
    maturity_multiplier: f64,
    complexity_multiplier: f64,
    inputs: &CostInputs,
) -> ImplementationCosts {
    let stencil_agent_cost = BASE_FRAMEWORK_COST
        + f64::from(inputs.data_scientist_count) * PER_USER_COST
        + inputs.technology_complexity.factor() * COMPLEXITY_LEVEL_UNIT_COST
        + f64::from(inputs.data_source_count + inputs.integration_pattern_count)
            * INTEGRATION_POINT_UNIT_COST;

    let atlase_cost = inputs.annual_data_scientist_cost()
        * PLATFORM_COST_SHARE
        * (1.0 - maturity_multiplier)
        * complexity_multiplier;

    ImplementationCosts {
        stencil_agent_cost,
        atlase_cost,
        total_cost: stencil_agent_cost + atlase_cost,
        complexity_multiplier,
    }
}
