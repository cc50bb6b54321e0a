use crate::grades::Grade;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use strum::{EnumCount, IntoEnumIterator};

/// Occurrences of each grade code, zero-filled, in alphabet order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GradeCounts {
    counts: [u32; Grade::COUNT],
}

impl GradeCounts {
    pub fn get(&self, grade: Grade) -> u32 {
        self.counts[grade as usize]
    }

    pub(crate) fn bump(&mut self, grade: Grade) {
        self.counts[grade as usize] += 1;
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Grade, u32)> + '_ {
        Grade::iter().map(move |g| (g, self.get(g)))
    }
}

impl Serialize for GradeCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Grade::COUNT))?;
        for (grade, count) in self.iter() {
            map.serialize_entry(grade.as_ref(), &count)?;
        }
        map.end()
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub grade_counts: GradeCounts,

    // Point scores (0..=10)
    pub core_maths_score: u32,
    pub elective_maths_score: u32,
    pub physics_score: u32,

    // Aggregate (lower is better) and the banded exam score derived from it
    pub aggregate_score: u32,
    pub final_score: u32,
}
