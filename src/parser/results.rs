use crate::consts::{DESCRIPTOR_WORDS, RESULTS_MARKER};
use crate::grades::Grade;
use crate::record::SubjectResults;
use crate::subjects::{canonical_key, normalize_subject};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Subject,
    Grade,
    Noise,
}

/// Classifies one trimmed line of the results section.
pub fn classify_line(line: &str) -> LineKind {
    if Grade::is_grade_code(line) {
        return LineKind::Grade;
    }
    let starts_upper = line.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    if starts_upper && !DESCRIPTOR_WORDS.contains(&line) {
        LineKind::Subject
    } else {
        LineKind::Noise
    }
}

/// Subject keys and grade codes found after the results marker, in order.
///
/// `None` when the marker is missing.
pub fn split_section(text: &str) -> Option<(Vec<String>, Vec<String>)> {
    let start = text.find(RESULTS_MARKER)? + RESULTS_MARKER.len();

    let mut subjects = Vec::new();
    let mut grades = Vec::new();
    for raw in text[start..].split('\n') {
        let line = raw.trim();
        match classify_line(line) {
            LineKind::Subject => subjects.push(normalize_subject(line)),
            LineKind::Grade => grades.push(line.to_string()),
            LineKind::Noise => {}
        }
    }
    Some((subjects, grades))
}

/// Pairs subjects with grades by position.
///
/// Subjects past the last grade have no grade and are dropped; grades past
/// the last subject are discarded. A subject line lost to OCR noise shifts
/// every later grade onto the wrong subject and is not detected here.
pub fn align(subjects: Vec<String>, grades: Vec<String>) -> SubjectResults {
    if subjects.len() > grades.len() {
        debug!(
            "{} subjects but only {} grades, dropping {}",
            subjects.len(),
            grades.len(),
            subjects.len() - grades.len()
        );
    }

    let mut results = SubjectResults::new();
    let mut grades = grades.into_iter();
    for subject in subjects {
        match grades.next() {
            Some(grade) => results.insert(subject, grade),
            // An ungraded repeat also discards the earlier graded entry.
            None => {
                debug!("Grade missing for '{}'", subject);
                results.remove(&subject);
            }
        }
    }
    results
}

/// Rewrites known alias keys to their canonical form.
pub fn apply_aliases(results: &mut SubjectResults) {
    let aliased: Vec<(String, &'static str)> = results
        .subjects()
        .filter_map(|k| canonical_key(k).map(|c| (k.to_string(), c)))
        .collect();

    for (alias, canonical) in aliased {
        if let Some(grade) = results.remove(&alias) {
            debug!("Rewriting subject key '{}' -> '{}'", alias, canonical);
            results.insert(canonical, grade);
        }
    }
}

/// Full results extraction: split, align, then fix up aliases.
pub fn extract_results(text: &str) -> SubjectResults {
    let Some((subjects, grades)) = split_section(text) else {
        debug!("No results marker found");
        return SubjectResults::new();
    };
    let mut results = align(subjects, grades);
    apply_aliases(&mut results);
    results
}
