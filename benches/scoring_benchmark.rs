//! Benchmarks for the scoring engine and portfolio aggregation.
//!
//! Run with: cargo bench --bench scoring_benchmark

use chrono::{Duration, TimeZone, Utc};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dpdp_assess::model::{ComplianceReport, OrganizationRef};
use dpdp_assess::pipeline::{assess_organization, evaluate};
use dpdp_assess::{
    Answer, AnswerSet, MemoryStore, PortfolioSummary, ProfileAttributes, QuestionCatalog,
    classify_sdf, rank_recommendations, score_assessment,
};
use std::hint::black_box;

/// Rotate through Yes/Partial/No so every category has gaps.
fn mixed_answers(seed: usize) -> AnswerSet {
    QuestionCatalog::dpdp()
        .ids()
        .enumerate()
        .fold(AnswerSet::new(), |set, (i, id)| {
            let answer = match (i + seed) % 3 {
                0 => Answer::Yes,
                1 => Answer::Partial,
                _ => Answer::No,
            };
            set.with(id, answer)
        })
}

fn sdf_profile() -> ProfileAttributes {
    ProfileAttributes {
        data_volume: Some("more_than_1_million".to_string()),
        employee_count: Some("more_than_500".to_string()),
        sensitive_data: Some("Yes".to_string()),
        cross_border_transfer: Some("Yes".to_string()),
        data_types: vec!["Children Data".to_string()],
        ..ProfileAttributes::default()
    }
}

/// Generate `count` reports spread over `orgs` organizations.
fn generate_reports(orgs: usize, count: usize) -> Vec<ComplianceReport> {
    let store = MemoryStore::new();
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    (0..count)
        .map(|i| {
            let org =
                OrganizationRef::new(format!("org-{:08}", i % orgs), format!("Org {}", i % orgs));
            assess_organization(
                &store,
                &org,
                &mixed_answers(i),
                QuestionCatalog::dpdp(),
                start + Duration::hours(i as i64),
            )
            .unwrap()
            .report
        })
        .collect()
}

fn benchmark_scoring(c: &mut Criterion) {
    let answers = mixed_answers(0);
    let profile = sdf_profile();
    let catalog = QuestionCatalog::dpdp();

    c.bench_function("score_assessment", |b| {
        b.iter(|| score_assessment(black_box(&answers)))
    });
    c.bench_function("rank_recommendations", |b| {
        b.iter(|| rank_recommendations(black_box(&answers)))
    });
    c.bench_function("classify_sdf", |b| b.iter(|| classify_sdf(black_box(&profile))));
    c.bench_function("evaluate", |b| {
        b.iter(|| evaluate(None, black_box(&answers), catalog))
    });
}

fn benchmark_portfolio(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_summary");

    for count in [100, 1_000, 10_000] {
        let reports = generate_reports(count / 10, count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &reports, |b, reports| {
            b.iter(|| PortfolioSummary::from_reports(&[], black_box(reports)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_scoring, benchmark_portfolio);
criterion_main!(benches);
