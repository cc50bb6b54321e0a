//! Raw transcript text -> [`StructuredRecord`].
//!
//! The parser never fails. A missing name label leaves `candidate_name`
//! empty, a missing results marker leaves `results` empty.

pub mod name;
pub mod results;

pub use self::name::extract_candidate_name;
pub use self::results::{classify_line, extract_results, LineKind};
use crate::record::StructuredRecord;

pub fn parse(raw_text: &str) -> StructuredRecord {
    let text = raw_text.replace("\r\n", "\n");

    StructuredRecord {
        candidate_name: extract_candidate_name(&text),
        results: extract_results(&text),
    }
}
