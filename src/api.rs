use crate::config::Major;
use crate::error::AdmitResult;
use crate::ocr::TextSource;
use crate::parser;
use crate::record::StructuredRecord;
use crate::scorer::ScoreReport;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

/// Parsed transcript plus its scores.
#[derive(Serialize, Debug, Clone)]
pub struct Review {
    pub source: String,
    pub major: Major,
    pub record: StructuredRecord,
    pub report: ScoreReport,
}

impl Review {
    /// Nothing usable was found: no name and no graded subjects.
    pub fn is_empty(&self) -> bool {
        !self.record.has_name() && self.record.results.is_empty()
    }
}

pub fn review_text(source: &str, raw_text: &str, major: Major) -> Review {
    let record = parser::parse(raw_text);
    let report = ScoreReport::from_results(&record.results);

    Review {
        source: source.to_string(),
        major,
        record,
        report,
    }
}

pub fn review_source<S: TextSource + ?Sized>(source: &S, major: Major) -> AdmitResult<Review> {
    let label = source.label();
    let text = source.read_text()?;
    let review = review_text(&label, &text, major);

    if review.is_empty() {
        warn!("{}: no candidate name or results found", label);
    } else {
        info!(
            "{}: {} subjects, aggregate {}, exam score {}",
            label,
            review.record.results.len(),
            review.report.aggregate_score,
            review.report.final_score
        );
    }
    Ok(review)
}

/// Reviews many sources in parallel. Sources that cannot be read are
/// returned as errors next to their label instead of aborting the batch.
pub fn review_batch<S: TextSource + Sync>(
    sources: &[S],
    major: Major,
) -> Vec<(String, AdmitResult<Review>)> {
    sources
        .par_iter()
        .map(|s| (s.label(), review_source(s, major)))
        .collect()
}

/// Best applicants first: higher exam score, then lower aggregate, then label.
pub fn rank_reviews(reviews: &mut [Review]) {
    reviews.sort_by(|a, b| {
        b.report
            .final_score
            .cmp(&a.report.final_score)
            .then(a.report.aggregate_score.cmp(&b.report.aggregate_score))
            .then_with(|| a.source.cmp(&b.source))
    });
}
