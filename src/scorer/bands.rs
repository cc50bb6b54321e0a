use std::ops::RangeInclusive;

/// Aggregate ranges and the exam score each one earns.
pub const SCORE_BANDS: [(RangeInclusive<u32>, u32); 6] = [
    (6..=9, 30),
    (10..=12, 25),
    (13..=15, 20),
    (16..=19, 15),
    (20..=24, 10),
    (25..=u32::MAX, 5),
];

/// Banded exam score for an aggregate; 0 below the first band.
pub fn assign_score(aggregate: u32) -> u32 {
    SCORE_BANDS
        .iter()
        .find(|(range, _)| range.contains(&aggregate))
        .map(|(_, score)| *score)
        .unwrap_or(0)
}
