use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use atlase_assessment::assessment::{
    AnswerRecord, AssessmentOutcome, AssessmentRepository, AssessmentService, CostInputs, Pillar,
    QuestionCatalog, SaveDisposition, StoredAssessment, TechnologyComplexity, UserInfo,
};
use atlase_assessment::config::StorageConfig;
use atlase_assessment::error::AppError;
use clap::Args;

use crate::infra::InMemoryAssessmentRepository;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Write the stored demo assessments to this CSV file after the run.
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

struct Persona {
    name: &'static str,
    email: &'static str,
    blurb: &'static str,
    answer_for: fn(usize) -> usize,
    cost_inputs: CostInputs,
}

fn personas() -> Vec<Persona> {
    vec![
        Persona {
            name: "Taylor Brooks",
            email: "taylor@skylinefreight.example",
            blurb: "legacy-heavy logistics estate, little automation",
            answer_for: |_| 0,
            cost_inputs: CostInputs {
                data_scientist_time: 75.0,
                data_scientist_count: 6,
                data_scientist_salary: 110_000.0,
                data_duplication_cost: 320_000.0,
                manual_integration_cost: 240_000.0,
                compliance_violation_cost: 150_000.0,
                time_to_insight: Some(16.0),
                technology_complexity: TechnologyComplexity::High,
                data_source_count: 12,
                integration_pattern_count: 7,
                legacy_system_percentage: 70.0,
                cloud_adoption_percentage: 20.0,
            },
        },
        Persona {
            name: "Priya Nair",
            email: "priya@meridianhealth.example",
            blurb: "mid-transformation healthcare platform",
            answer_for: |position| 1 + position % 2,
            cost_inputs: CostInputs {
                data_scientist_time: 60.0,
                data_scientist_count: 15,
                data_scientist_salary: 135_000.0,
                data_duplication_cost: 200_000.0,
                manual_integration_cost: 150_000.0,
                compliance_violation_cost: 90_000.0,
                time_to_insight: Some(10.0),
                technology_complexity: TechnologyComplexity::Medium,
                data_source_count: 8,
                integration_pattern_count: 4,
                legacy_system_percentage: 40.0,
                cloud_adoption_percentage: 55.0,
            },
        },
        Persona {
            name: "Owen Castillo",
            email: "owen@northwindretail.example",
            blurb: "cloud-native retailer with mature governance",
            answer_for: |_| 3,
            cost_inputs: CostInputs {
                data_scientist_time: 40.0,
                data_scientist_count: 25,
                data_scientist_salary: 150_000.0,
                data_duplication_cost: 120_000.0,
                manual_integration_cost: 60_000.0,
                compliance_violation_cost: 20_000.0,
                time_to_insight: Some(4.0),
                technology_complexity: TechnologyComplexity::Low,
                data_source_count: 5,
                integration_pattern_count: 3,
                legacy_system_percentage: 10.0,
                cloud_adoption_percentage: 90.0,
            },
        },
    ]
}

fn answers_for(catalog: &QuestionCatalog, answer_for: fn(usize) -> usize) -> Vec<AnswerRecord> {
    let mut answers = Vec::new();
    let mut position = 0usize;
    for pillar in Pillar::ordered() {
        for question in catalog.questions(pillar) {
            answers.push(AnswerRecord {
                pillar,
                question_id: question.id.to_string(),
                answer: answer_for(position),
            });
            position += 1;
        }
    }
    answers
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let repository = Arc::new(InMemoryAssessmentRepository::default());
    let service = Arc::new(AssessmentService::new(
        repository.clone(),
        StorageConfig::default(),
    ));

    println!("ATLASE assessment demo");
    for persona in personas() {
        let answers = answers_for(service.catalog(), persona.answer_for);
        let user = UserInfo {
            name: Some(persona.name.to_string()),
            email: Some(persona.email.to_string()),
        };

        let (outcome, disposition) =
            match service.submit(&answers, &persona.cost_inputs, user) {
                Ok(result) => result,
                Err(err) => {
                    println!("  Submission rejected for {}: {}", persona.email, err);
                    continue;
                }
            };

        println!("\n{} <{}> ({})", persona.name, persona.email, persona.blurb);
        render_outcome(&outcome);
        if let SaveDisposition::Saved { id, .. } = disposition {
            println!("  Stored as assessment #{id}");
        }
    }

    let stats = match service.stats() {
        Ok(stats) => stats,
        Err(err) => {
            println!("\nAggregate statistics unavailable: {err}");
            return Ok(());
        }
    };

    println!("\nAggregate statistics");
    println!(
        "- {} assessment(s) from {} unique user(s), average maturity {:.1}%",
        stats.total_assessments, stats.unique_users, stats.average_maturity_score
    );
    for (level, count) in &stats.maturity_level_distribution {
        println!("  - {}: {}", level.label(), count);
    }

    if let Some(path) = args.export {
        let records = repository.list_all()?;
        export_csv(&path, &records)?;
        println!("\nExported {} record(s) to {}", records.len(), path.display());
    }

    Ok(())
}

fn csv_failure(err: csv::Error) -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::Other, err))
}

/// Flat row shape for the CSV export; headers come from the field names.
#[derive(serde::Serialize)]
struct ExportRow<'a> {
    id: u64,
    email: &'a str,
    name: &'a str,
    submitted_at: String,
    maturity_level: &'static str,
    overall_score: f64,
    total_benefits: f64,
    implementation_cost: f64,
    net_benefits: f64,
    roi_percent: f64,
    payback_months: f64,
}

fn render_outcome(outcome: &AssessmentOutcome) {
    let maturity = &outcome.maturity_score;
    println!(
        "  Maturity: {:.1}% overall ({})",
        maturity.overall_score,
        maturity.maturity_level.label()
    );
    for (pillar, score) in &maturity.pillar_scores {
        println!("    - {}: {:.1}%", pillar.label(), score);
    }

    let roi = &outcome.roi_results;
    println!(
        "  Current annual cost ${:.0} | projected benefits ${:.0} | implementation ${:.0}",
        roi.current_costs.total, roi.total_benefits, roi.implementation_costs.total_cost
    );
    println!(
        "  Net benefit ${:.0} | ROI {:.0}% | payback {:.1} months | complexity x{:.2}",
        roi.net_benefits, roi.roi, roi.payback_period, roi.complexity_multiplier
    );

    let plan = [
        ("Immediate", &outcome.recommendations.immediate),
        ("Short term", &outcome.recommendations.short_term),
        ("Long term", &outcome.recommendations.long_term),
    ];
    for (label, bucket) in plan {
        if bucket.is_empty() {
            continue;
        }
        println!("  {label} focus:");
        for line in bucket {
            println!("    - {line}");
        }
    }
}

fn export_csv(path: &Path, records: &[StoredAssessment]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(csv_failure)?;

    for stored in records {
        let roi = &stored.record.roi_results;
        writer
            .serialize(ExportRow {
                id: stored.id,
                email: &stored.record.email,
                name: &stored.record.name,
                submitted_at: stored.submitted_at.to_rfc3339(),
                maturity_level: stored.record.maturity_score.maturity_level.label(),
                overall_score: stored.record.maturity_score.overall_score,
                total_benefits: roi.total_benefits,
                implementation_cost: roi.implementation_costs.total_cost,
                net_benefits: roi.net_benefits,
                roi_percent: roi.roi,
                payback_months: roi.payback_period,
            })
            .map_err(csv_failure)?;
    }

    writer.flush()?;
    Ok(())
}
