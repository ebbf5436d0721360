use once_cell::sync::Lazy;
use regex::Regex;

static SENIORITY_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^(senior|junior|lead|principal)\s+").unwrap());

/// Canonical comparison form of a role name: lower-cased, punctuation
/// removed, whitespace collapsed and trimmed.
pub fn normalize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_was_space = true;

    for c in s.chars() {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            out.push(c);
            last_was_space = false;
        } else if c.is_whitespace() && !last_was_space {
            out.push(' ');
            last_was_space = true;
        }
        // Anything else ("-", "/", ".", unicode punctuation) is dropped.
    }

    if out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Remove a leading seniority token ("senior", "junior", "lead",
/// "principal") so that roles differing only by level compare equal.
pub fn strip_seniority_prefix(s: &str) -> String {
    SENIORITY_PREFIX.replace(s, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lowercases_and_strips_punctuation() {
        assert_eq!(normalize("Data Scientist"), "data scientist");
        assert_eq!(normalize("data-scientist"), "datascientist");
        assert_eq!(normalize("UI/UX Designer"), "uiux designer");
        assert_eq!(normalize("Node.js Developer"), "nodejs developer");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Backend   Developer  "), "backend developer");
        assert_eq!(normalize("Backend\t\nDeveloper"), "backend developer");
    }

    #[test]
    fn test_normalize_empty_and_punctuation_only() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_strip_seniority_prefix() {
        assert_eq!(strip_seniority_prefix("senior backend developer"), "backend developer");
        assert_eq!(strip_seniority_prefix("junior data scientist"), "data scientist");
        assert_eq!(strip_seniority_prefix("lead engineer"), "engineer");
        assert_eq!(strip_seniority_prefix("principal architect"), "architect");
    }

    #[test]
    fn test_strip_seniority_prefix_only_at_start() {
        assert_eq!(strip_seniority_prefix("backend senior developer"), "backend senior developer");
        assert_eq!(strip_seniority_prefix("seniority analyst"), "seniority analyst");
    }

    #[test]
    fn test_strip_seniority_prefix_case_insensitive() {
        // Callers normalize first, but the regex is case-insensitive on its own.
        assert_eq!(strip_seniority_prefix("Senior Backend Developer"), "Backend Developer");
    }
}
