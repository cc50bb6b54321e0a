use super::types::GradeCounts;
use crate::grades::Grade;
use crate::record::SubjectResults;

/// Counts each grade code among the results. Unknown grade strings are skipped.
pub fn count_grades(results: &SubjectResults) -> GradeCounts {
    let mut counts = GradeCounts::default();
    for grade in results.grades().filter_map(Grade::parse) {
        counts.bump(grade);
    }
    counts
}
