// Criterion benchmarks for the ATS role-match engine

use ats_match::core::{match_percentage, Analyzer};
use ats_match::models::CandidateRecord;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn create_record(id: usize) -> CandidateRecord {
    let (applied, recommended): (&str, Vec<String>) = match id % 4 {
        0 => ("Backend Developer", vec!["Backend Developer".to_string()]),
        1 => (
            "Senior Frontend Developer",
            vec!["Frontend Developer".to_string()],
        ),
        2 => (
            "Full Stack Developer",
            vec!["Full Stack Engineer".to_string()],
        ),
        _ => ("Data Scientist", vec![]),
    };

    CandidateRecord {
        mockello_id: format!("MKLO-{}", id),
        name: format!("Candidate {}", id),
        application_id: format!("app-{}", id),
        applied_role: applied.to_string(),
        recommended_roles: recommended,
        skills: vec![
            "javascript".to_string(),
            "react".to_string(),
            "node".to_string(),
        ],
    }
}

fn bench_match_percentage(c: &mut Criterion) {
    let recommended = vec![
        "Frontend Developer".to_string(),
        "Full Stack Engineer".to_string(),
        "Backend Developer".to_string(),
    ];

    c.bench_function("match_percentage", |b| {
        b.iter(|| {
            match_percentage(
                black_box("Senior Full Stack Developer"),
                black_box(&recommended),
            )
        });
    });
}

fn bench_analyze_batch(c: &mut Criterion) {
    let analyzer = Analyzer::new();

    let mut group = c.benchmark_group("analyze_batch");

    for record_count in [10, 50, 100, 500].iter() {
        let records: Vec<CandidateRecord> = (0..*record_count).map(create_record).collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(record_count),
            &records,
            |b, records| {
                b.iter(|| analyzer.analyze_batch(black_box(records)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_match_percentage, bench_analyze_batch);
criterion_main!(benches);
