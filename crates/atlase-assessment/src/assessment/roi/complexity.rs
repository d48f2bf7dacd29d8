use super::super::domain::CostInputs;

const TECH_COMPLEXITY_WEIGHT: f64 = 0.3;
const DATA_SOURCE_WEIGHT: f64 = 0.2;
const INTEGRATION_WEIGHT: f64 = 0.2;
const LEGACY_WEIGHT: f64 = 0.15;
const CLOUD_GAP_WEIGHT: f64 = 0.15;

/// Count at which the source/pattern factors saturate.
const SATURATION_COUNT: f64 = 10.0;

/// Share of the combined complexity the framework is assumed to absorb.
const FRAMEWORK_MITIGATION: f64 = 0.40;

/// Combine five normalized landscape factors into a cost multiplier.
/// Floored at 1.0: complexity can only ever make implementation dearer.
pub(crate) fn complexity_multiplier(inputs: &CostInputs) -> f64 {
    let tech_factor = inputs.technology_complexity.factor() / 10.0 * TECH_COMPLEXITY_WEIGHT;
    let source_factor =
        (f64::from(inputs.data_source_count) / SATURATION_COUNT).min(1.0) * DATA_SOURCE_WEIGHT;
    let integration_factor = (f64::from(inputs.integration_pattern_count) / SATURATION_COUNT)
        .min(1.0)
        * INTEGRATION_WEIGHT;
    let legacy_factor = inputs.legacy_system_percentage / 100.0 * LEGACY_WEIGHT;
    let cloud_factor = (1.0 - inputs.cloud_adoption_percentage / 100.0) * CLOUD_GAP_WEIGHT;

    let total_complexity =
        tech_factor + source_factor + integration_factor + legacy_factor + cloud_factor;
    let adjusted_complexity = total_complexity * (1.0 - FRAMEWORK_MITIGATION);

    (1.0 + adjusted_complexity).max(1.0)
}
