use admitscore::parser::parse;
use admitscore::record::SubjectResults;
use admitscore::scorer::ScoreReport;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_transcript() -> String {
    let mut text = String::from(
        "Candidate Name\nType of Examination\nExamination Centre\nCard Details\n1234567890\nKWAME MENSAH\nResults\n",
    );
    let subjects = [
        ("ENGLISH LANG", "C4", "CREDIT"),
        ("MATHEMATICS(CORE)", "B3", "GOOD"),
        ("INTEGRATED SCIENCE", "B2", "VERY GOOD"),
        ("SOCIAL STUDIES", "A1", "EXCELLENT"),
        ("PHYSICS", "B3", "GOOD"),
        ("CHEMISTRY", "C5", "CREDIT"),
        ("MATHEMATICS(ELECT)", "A1", "EXCELLENT"),
        ("BIOLOGY", "C6", "CREDIT"),
    ];
    for (subject, grade, descriptor) in subjects {
        text.push_str(&format!("{}\n{}\n{}\n", subject, grade, descriptor));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let text = sample_transcript();
    c.bench_function("parse_transcript", |b| b.iter(|| parse(black_box(&text))));
}

fn bench_score(c: &mut Criterion) {
    let results: SubjectResults = parse(&sample_transcript()).results;
    c.bench_function("score_report", |b| {
        b.iter(|| ScoreReport::from_results(black_box(&results)))
    });
}

criterion_group!(benches, bench_parse, bench_score);
criterion_main!(benches);
