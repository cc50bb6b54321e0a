use crate::error::AdmitResult;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Insertion-ordered subject key -> grade code mapping.
///
/// Grades are kept as the raw strings read from the transcript (or from a
/// JSON record), so the scorer decides what counts as a valid grade.
/// Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectResults(IndexMap<String, String>);

impl SubjectResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces. A replaced key keeps its original position.
    pub fn insert(&mut self, subject: impl Into<String>, grade: impl Into<String>) {
        self.0.insert(subject.into(), grade.into());
    }

    /// Removes a subject, shifting later entries up to keep their order.
    pub fn remove(&mut self, subject: &str) -> Option<String> {
        self.0.shift_remove(subject)
    }

    pub fn get(&self, subject: &str) -> Option<&str> {
        self.0.get(subject).map(String::as_str)
    }

    pub fn contains(&self, subject: &str) -> bool {
        self.0.contains_key(subject)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, g)| (k.as_str(), g.as_str()))
    }

    pub fn subjects(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn grades(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }
}

impl<K: Into<String>, G: Into<String>> FromIterator<(K, G)> for SubjectResults {
    fn from_iter<I: IntoIterator<Item = (K, G)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, g)| (k.into(), g.into())).collect())
    }
}

/// What the parser extracts from one transcript.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredRecord {
    #[serde(default)]
    pub candidate_name: String,
    #[serde(default)]
    pub results: SubjectResults,
}

impl StructuredRecord {
    /// Indented JSON, one field per line.
    pub fn to_json_pretty(&self) -> AdmitResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> AdmitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_name(&self) -> bool {
        !self.candidate_name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacing_keeps_position() {
        let mut r = SubjectResults::new();
        r.insert("english_lang", "A1");
        r.insert("physics", "B2");
        r.insert("english_lang", "C4");
        let keys: Vec<&str> = r.subjects().collect();
        assert_eq!(keys, vec!["english_lang", "physics"]);
        assert_eq!(r.get("english_lang"), Some("C4"));
    }

    #[test]
    fn remove_returns_grade() {
        let mut r: SubjectResults = [("a", "A1"), ("b", "B2")].into_iter().collect();
        assert_eq!(r.remove("a"), Some("A1".to_string()));
        assert_eq!(r.remove("a"), None);
        assert_eq!(r.len(), 1);
    }

    #[test]
    fn remove_keeps_order_of_the_rest() {
        let mut r: SubjectResults = [("a", "A1"), ("b", "B2"), ("c", "C4"), ("d", "D7")]
            .into_iter()
            .collect();
        r.remove("b");
        let keys: Vec<&str> = r.subjects().collect();
        assert_eq!(keys, vec!["a", "c", "d"]);
    }
}
