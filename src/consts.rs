/// Section marker that opens the subject/grade listing. Includes the line break.
pub const RESULTS_MARKER: &str = "Results\n";

/// Performance descriptors printed next to each grade. Never subjects.
pub const DESCRIPTOR_WORDS: [&str; 6] = ["EXCELLENT", "VERY GOOD", "GOOD", "CREDIT", "PASS", "FAIL"];

pub const ENGLISH_KEY: &str = "english_lang";
pub const CORE_MATHS_KEY: &str = "mathematics_core";
pub const INTEGRATED_SCIENCE_KEY: &str = "integrated_science";
pub const SOCIAL_STUDIES_KEY: &str = "social_studies";

/// Elective maths keeps the spacing-free form the transcript OCR produces.
pub const ELECTIVE_MATHS_KEY: &str = "mathematicselect";
pub const PHYSICS_KEY: &str = "physics";

/// Always counted toward the aggregate when present with a valid grade.
pub const MANDATORY_SUBJECTS: [&str; 3] = [ENGLISH_KEY, CORE_MATHS_KEY, INTEGRATED_SCIENCE_KEY];

/// Never counted toward the aggregate, not even as a best-of-rest subject.
pub const EXCLUDED_SUBJECTS: [&str; 1] = [SOCIAL_STUDIES_KEY];

/// Number of non-mandatory subjects that make up the rest of the aggregate.
pub const BEST_OTHER_COUNT: usize = 3;
