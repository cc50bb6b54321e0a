use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Ordered: the first rule that matches anywhere in the text wins.
// The label-list layout must be tried before the bare "next line" rule,
// which would otherwise capture "Type of Examination" as the name.
static NAME_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("inline_colon", r"Candidate Name\s*:\s*([^\n]+)"),
        (
            "label_block",
            r"Candidate Name\nType of Examination\nExamination Centre\nCard Details\n\d+\n([^\n]+)",
        ),
        ("before_exam_type", r"Candidate Name\n([^\n]+)\nType of Examination"),
        ("next_line", r"Candidate Name\n([^\n]+)\n"),
    ]
    .into_iter()
    .map(|(label, pattern)| (label, Regex::new(pattern).expect("valid name regex")))
    .collect()
});

/// Candidate name from the first matching rule, trimmed. Empty if none match.
pub fn extract_candidate_name(text: &str) -> String {
    for (label, re) in NAME_RULES.iter() {
        if let Some(name) = re.captures(text).and_then(|caps| caps.get(1)) {
            debug!("Candidate name matched rule '{}'", label);
            return name.as_str().trim().to_string();
        }
    }
    debug!("No candidate name rule matched");
    String::new()
}
