mod export;
mod tables;

pub use self::export::write_summary_csv;
pub use self::tables::{
    details as print_detailed_results, grades as print_grade_counts,
    scores as print_scores, student as print_student_info, summary as print_batch_summary,
};

use admitscore::api::Review;

/// Full single-transcript report, the way an admissions reviewer reads it.
pub fn print_review(review: &Review, show_details: bool) {
    print_student_info(review);
    print_grade_counts(&review.report.grade_counts);
    print_scores(review);
    if show_details {
        print_detailed_results(&review.record.results);
    }
}
