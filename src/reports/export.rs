use admitscore::api::Review;
use admitscore::AdmitResult;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct SummaryRow<'a> {
    source: &'a str,
    candidate_name: &'a str,
    subjects: usize,
    aggregate_score: u32,
    final_score: u32,
    core_maths_score: u32,
    elective_maths_score: u32,
    physics_score: u32,
}

pub fn write_summary_csv<P: AsRef<Path>>(path: P, reviews: &[Review]) -> AdmitResult<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for review in reviews {
        let r = &review.report;
        wtr.serialize(SummaryRow {
            source: &review.source,
            candidate_name: &review.record.candidate_name,
            subjects: review.record.results.len(),
            aggregate_score: r.aggregate_score,
            final_score: r.final_score,
            core_maths_score: r.core_maths_score,
            elective_maths_score: r.elective_maths_score,
            physics_score: r.physics_score,
        })?;
    }
    wtr.flush()?;
    Ok(())
}
