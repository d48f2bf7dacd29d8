use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Highest weight any catalog option can carry. The per-pillar denominator is
/// `question_count * MAX_OPTION_WEIGHT`, fixed rather than derived from data.
pub const MAX_OPTION_WEIGHT: f64 = 4.0;

/// The six ATLASE pillars, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Assured,
    Traceable,
    Logical,
    AiReady,
    Sovereign,
    EnhancedResilience,
}

impl Pillar {
    pub const fn ordered() -> [Pillar; 6] {
        [
            Pillar::Assured,
            Pillar::Traceable,
            Pillar::Logical,
            Pillar::AiReady,
            Pillar::Sovereign,
            Pillar::EnhancedResilience,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Pillar::Assured => "Assured",
            Pillar::Traceable => "Traceable",
            Pillar::Logical => "Logical",
            Pillar::AiReady => "AI-Ready",
            Pillar::Sovereign => "Sovereign",
            Pillar::EnhancedResilience => "Enhanced Resilience",
        }
    }
}

/// How the UI collects an answer. Scoring treats both kinds identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseKind {
    Slider,
    MultipleChoice,
}

/// A single scored question: option labels and weights are parallel arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub id: &'static str,
    #[serde(rename = "question")]
    pub prompt: &'static str,
    #[serde(rename = "type")]
    pub kind: ResponseKind,
    pub options: &'static [&'static str],
    pub weights: &'static [u8],
}

/// The immutable questionnaire, keyed by pillar.
///
/// Constructed once at startup and shared by the scorer, the read-only
/// questions endpoint, and the CLI demo so every consumer sees identical
/// content.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionCatalog {
    #[serde(flatten)]
    pillars: BTreeMap<Pillar, Vec<Question>>,
}

impl QuestionCatalog {
    pub fn standard() -> Self {
        let mut pillars = BTreeMap::new();
        for (pillar, questions) in standard_questions() {
            pillars.insert(pillar, questions);
        }
        Self { pillars }
    }

    pub fn questions(&self, pillar: Pillar) -> &[Question] {
        self.pillars
            .get(&pillar)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn question_count(&self, pillar: Pillar) -> usize {
        self.questions(pillar).len()
    }

    pub fn lookup(&self, pillar: Pillar, question_id: &str) -> Option<&Question> {
        self.questions(pillar)
            .iter()
            .find(|question| question.id == question_id)
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const STANDARD_WEIGHTS: &[u8] = &[1, 2, 3, 4];

fn standard_questions() -> Vec<(Pillar, Vec<Question>)> {
    vec![
        (
            Pillar::Assured,
            vec![
                Question {
                    id: "assured_1",
                    prompt: "How would you rate your current data quality and integrity measures?",
                    kind: ResponseKind::Slider,
                    options: &["Poor", "Fair", "Good", "Excellent"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "assured_2",
                    prompt: "Do you have automated data validation and monitoring in place?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["None", "Basic", "Advanced", "Comprehensive"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "assured_3",
                    prompt: "How standardized are your data formats across systems?",
                    kind: ResponseKind::Slider,
                    options: &["Not Standardized", "Partially", "Mostly", "Fully Standardized"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "assured_4",
                    prompt: "Do you use data contracts or stencils for data governance?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No", "Planning", "Partial", "Full Implementation"],
                    weights: STANDARD_WEIGHTS,
                },
            ],
        ),
        (
            Pillar::Traceable,
            vec![
                Question {
                    id: "traceable_1",
                    prompt: "How comprehensive is your data lineage tracking?",
                    kind: ResponseKind::Slider,
                    options: &["None", "Basic", "Advanced", "Complete"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "traceable_2",
                    prompt: "Do you maintain immutable records of data transformations?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No", "Some", "Most", "All"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "traceable_3",
                    prompt: "How robust are your audit capabilities?",
                    kind: ResponseKind::Slider,
                    options: &["Minimal", "Basic", "Good", "Excellent"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "traceable_4",
                    prompt: "Are you considering or using DLT for data lineage?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No Plans", "Evaluating", "Pilot", "Implemented"],
                    weights: STANDARD_WEIGHTS,
                },
            ],
        ),
        (
            Pillar::Logical,
            vec![
                Question {
                    id: "logical_1",
                    prompt: "How well is your storage decoupled from consumption?",
                    kind: ResponseKind::Slider,
                    options: &[
                        "Tightly Coupled",
                        "Some Decoupling",
                        "Mostly Decoupled",
                        "Fully Decoupled",
                    ],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "logical_2",
                    prompt: "Do you implement intelligent virtualization?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No", "Basic", "Advanced", "Comprehensive"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "logical_3",
                    prompt: "How automated is your schema reconciliation?",
                    kind: ResponseKind::Slider,
                    options: &["Manual", "Semi-Automated", "Mostly Automated", "Fully Automated"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "logical_4",
                    prompt: "Do you use materialized views for performance optimization?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No", "Limited", "Extensive", "Strategic"],
                    weights: STANDARD_WEIGHTS,
                },
            ],
        ),
        (
            Pillar::AiReady,
            vec![
                Question {
                    id: "ai_ready_1",
                    prompt: "How optimized is your data for ML/AI workloads?",
                    kind: ResponseKind::Slider,
                    options: &["Not Optimized", "Basic", "Good", "Highly Optimized"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "ai_ready_2",
                    prompt: "Do you have automated data classification and tagging?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No", "Manual", "Semi-Automated", "Fully Automated"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "ai_ready_3",
                    prompt: "How advanced is your feature engineering automation?",
                    kind: ResponseKind::Slider,
                    options: &["None", "Basic", "Advanced", "Comprehensive"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "ai_ready_4",
                    prompt: "Do you implement intelligent caching strategies?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No", "Basic", "Advanced", "Strategic"],
                    weights: STANDARD_WEIGHTS,
                },
            ],
        ),
        (
            Pillar::Sovereign,
            vec![
                Question {
                    id: "sovereign_1",
                    prompt: "How tamper-resistant are your data controls?",
                    kind: ResponseKind::Slider,
                    options: &["Not Resistant", "Basic", "Good", "Highly Resistant"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "sovereign_2",
                    prompt: "Do you have cryptographic integrity measures?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No", "Some", "Most", "Comprehensive"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "sovereign_3",
                    prompt: "How definitive is your source of truth?",
                    kind: ResponseKind::Slider,
                    options: &["Multiple Sources", "Some Clarity", "Mostly Clear", "Single Source"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "sovereign_4",
                    prompt: "Do you extend controls to edge computing?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No Edge", "Planning", "Partial", "Full Extension"],
                    weights: STANDARD_WEIGHTS,
                },
            ],
        ),
        (
            Pillar::EnhancedResilience,
            vec![
                Question {
                    id: "resilience_1",
                    prompt: "How comprehensive is your security framework?",
                    kind: ResponseKind::Slider,
                    options: &["Basic", "Standard", "Advanced", "Comprehensive"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "resilience_2",
                    prompt: "Do you have automated disaster recovery?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["Manual", "Semi-Automated", "Mostly Automated", "Fully Automated"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "resilience_3",
                    prompt: "How robust is your defense-in-depth strategy?",
                    kind: ResponseKind::Slider,
                    options: &["Single Layer", "Multiple Layers", "Advanced", "Comprehensive"],
                    weights: STANDARD_WEIGHTS,
                },
                Question {
                    id: "resilience_4",
                    prompt: "Do you integrate with edge computing and DLT for secure lineage?",
                    kind: ResponseKind::MultipleChoice,
                    options: &["No Integration", "Planning", "Partial", "Full Integration"],
                    weights: STANDARD_WEIGHTS,
                },
            ],
        ),
    ]
}

/// Static reference lists surfaced to the UI when sizing the technology
/// landscape inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyLandscape {
    pub data_sources: &'static [&'static str],
    pub integration_patterns: &'static [&'static str],
}

impl TechnologyLandscape {
    pub const fn standard() -> Self {
        Self {
            data_sources: &[
                "Relational Databases (SQL Server, Oracle, PostgreSQL)",
                "NoSQL Databases (MongoDB, Cassandra, DynamoDB)",
                "Data Warehouses (Snowflake, Redshift, BigQuery)",
                "Data Lakes (S3, ADLS, GCS)",
                "Streaming Platforms (Kafka, Kinesis, Pub/Sub)",
                "Legacy Systems (Mainframes, COBOL)",
                "Cloud Platforms (AWS, Azure, GCP)",
                "On-Premise Systems",
                "SaaS Applications (Salesforce, Workday, SAP)",
                "IoT Devices and Edge Computing",
            ],
            integration_patterns: &[
                "ETL/ELT Pipelines",
                "API-based Integration",
                "Event-Driven Architecture",
                "Data Virtualization",
                "Change Data Capture (CDC)",
                "Batch Processing",
                "Real-time Streaming",
                "Microservices Architecture",
                "Service-Oriented Architecture (SOA)",
                "Point-to-Point Integration",
            ],
        }
    }
}
