use regex::Regex;
use std::sync::OnceLock;

static TITLE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn title_pattern() -> &'static Regex {
    TITLE_PATTERN.get_or_init(|| Regex::new("^[A-Za-z0-9]+$").expect("title pattern compiles"))
}

// titles are concatenated straight into filenames, so anything outside this
// set (separators, dots, whitespace) must never reach the store
pub fn is_valid_title(candidate: &str) -> bool {
    title_pattern().is_match(candidate)
}
