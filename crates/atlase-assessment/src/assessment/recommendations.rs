use serde::{Deserialize, Serialize};

use super::domain::CostInputs;
use super::roi::StencilAgentBenefits;

/// Advisory text grouped by audience. The four framework buckets are always
/// populated; exactly one of the maturity buckets is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSet {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
    pub stencil_agent_specific: Vec<String>,
    pub technology_considerations: Vec<String>,
    pub risk_mitigation: Vec<String>,
    pub best_practices: Vec<String>,
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| (*line).to_string()).collect()
}

/// Select advisory text for the scored maturity and projected benefits.
///
/// Maturity bands are half-open on the upper bound, so a score of exactly 25
/// lands in the short-term bucket and 75 in the enterprise long-term bucket.
pub fn recommend(
    overall_maturity_percent: f64,
    _inputs: &CostInputs,
    framework_benefits: &StencilAgentBenefits,
) -> RecommendationSet {
    let mut set = RecommendationSet::default();

    if framework_benefits.total_benefits > 0.0 {
        set.stencil_agent_specific = owned(&[
            "Implement Stencil Agent Framework to achieve 70% reduction in development time",
            "Leverage decoupled architecture for 90% improvement in system maintainability",
            "Utilize intelligent orchestration for 60% increase in workflow efficiency",
            "Establish stencil hierarchy (Grandad → Parent → Child → Sibling → Composite)",
            "Deploy specialized agents for domain-specific expertise",
        ]);
    }

    set.technology_considerations = owned(&[
        "Implement Stencil Agent Framework for AI-driven workflow orchestration",
        "Establish ATLASE data layer for unified data access",
        "Deploy intelligent agents for automated processing",
        "Configure dynamic routing based on workload and agent availability",
        "Implement predictive optimization using historical performance data",
    ]);

    set.risk_mitigation = owned(&[
        "Implement failover mechanisms for agent orchestration",
        "Establish audit trails for all stencil executions",
        "Configure load balancing for high availability",
        "Deploy monitoring and alerting for agent performance",
        "Implement data encryption for sensitive information",
    ]);

    set.best_practices = owned(&[
        "Start with foundation setup and core framework installation",
        "Develop stencils incrementally, beginning with high-level governance",
        "Create agents with specialized capabilities for specific domains",
        "Implement comprehensive testing for stencil-agent mappings",
        "Establish performance monitoring and optimization processes",
    ]);

    if overall_maturity_percent < 25.0 {
        set.immediate = owned(&[
            "Begin with Stencil Agent Framework foundation setup",
            "Focus on establishing basic stencil hierarchy",
            "Implement core orchestration agents",
        ]);
    } else if overall_maturity_percent < 50.0 {
        set.short_term = owned(&[
            "Expand stencil library with domain-specific frameworks",
            "Develop specialized processing agents",
            "Implement load balancing for scalability",
        ]);
    } else if overall_maturity_percent < 75.0 {
        set.long_term = owned(&[
            "Optimize stencil-agent mappings for performance",
            "Implement advanced AI capabilities",
            "Deploy predictive analytics for workflow optimization",
        ]);
    } else {
        set.long_term = owned(&[
            "Implement advanced orchestration features",
            "Deploy multi-cloud support for distributed execution",
            "Establish enterprise-grade API management",
        ]);
    }

    set
}
