use crate::consts::{BEST_OTHER_COUNT, MANDATORY_SUBJECTS};
use crate::grades::weight_of;
use crate::record::SubjectResults;
use crate::subjects::{is_excluded, is_mandatory};

/// Sum of the mandatory subjects' weights plus the best three other weights.
///
/// A mandatory subject that is missing, or holds something that is not a
/// grade code, adds nothing rather than a penalty. Excluded subjects never
/// count. With fewer than three eligible others, whatever exists is summed.
pub fn calculate_aggregate(results: &SubjectResults) -> u32 {
    let mandatory: u32 = MANDATORY_SUBJECTS
        .iter()
        .filter_map(|key| results.get(key))
        .filter_map(weight_of)
        .sum();

    let mut others: Vec<u32> = results
        .iter()
        .filter(|(key, _)| !is_mandatory(key) && !is_excluded(key))
        .filter_map(|(_, grade)| weight_of(grade))
        .collect();
    others.sort_unstable();

    mandatory + others.iter().take(BEST_OTHER_COUNT).sum::<u32>()
}
