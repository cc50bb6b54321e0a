use crate::consts::{EXCLUDED_SUBJECTS, MANDATORY_SUBJECTS};
use phf::phf_map;

// Known OCR artifacts -> canonical subject key.
// "MATHEMATICS(CORE)" loses its space before the bracket and normalizes to
// "mathematicscore".
static KEY_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "mathematicscore" => "mathematics_core",
};

/// Turns a printed subject line into a subject key.
///
/// Spaces become underscores, brackets are dropped, the result is lowercased.
/// Aliases are not applied here; see [`canonical_key`].
pub fn normalize_subject(line: &str) -> String {
    line.replace(' ', "_")
        .replace(['(', ')'], "")
        .to_lowercase()
}

/// Canonical form of a key if it is a known alias.
pub fn canonical_key(key: &str) -> Option<&'static str> {
    KEY_ALIASES.get(key).copied()
}

pub fn is_mandatory(key: &str) -> bool {
    MANDATORY_SUBJECTS.contains(&key)
}

pub fn is_excluded(key: &str) -> bool {
    EXCLUDED_SUBJECTS.contains(&key)
}

/// Human label for a subject key: `english_lang` -> `English Lang`.
pub fn display_label(key: &str) -> String {
    key.split('_')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_printed_names() {
        assert_eq!(normalize_subject("ENGLISH LANG"), "english_lang");
        assert_eq!(normalize_subject("MATHEMATICS (CORE)"), "mathematics_core");
        assert_eq!(normalize_subject("MATHEMATICS(CORE)"), "mathematicscore");
        assert_eq!(normalize_subject("MATHEMATICS(ELECT)"), "mathematicselect");
    }

    #[test]
    fn alias_table_resolves_core_maths() {
        assert_eq!(canonical_key("mathematicscore"), Some("mathematics_core"));
        assert_eq!(canonical_key("mathematics_core"), None);
    }

    #[test]
    fn labels_are_title_cased() {
        assert_eq!(display_label("english_lang"), "English Lang");
        assert_eq!(display_label("mathematicselect"), "Mathematicselect");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn subject_groups() {
        assert!(is_mandatory("integrated_science"));
        assert!(!is_mandatory("physics"));
        assert!(is_excluded("social_studies"));
    }
}
