use crate::core::normalize::{normalize, strip_seniority_prefix};

/// Calculate how well an applied role lines up with a candidate's
/// recommended roles, as an integer percentage in [0, 100].
///
/// Rules, first applicable wins:
/// 1. No recommended roles -> 0
/// 2. Exact normalized match (seniority prefix included) -> 100
/// 3. Match after stripping seniority on both sides -> 90
/// 4. Best token-overlap similarity across all recommended roles,
///    rounded half-away-from-zero
pub fn match_percentage(applied_role: &str, recommended_roles: &[String]) -> u8 {
    if recommended_roles.is_empty() {
        return 0;
    }

    let normalized_applied = normalize(applied_role);
    let stripped_applied = strip_seniority_prefix(&normalized_applied);

    let normalized_recommended: Vec<(String, String)> = recommended_roles
        .iter()
        .map(|role| {
            let full = normalize(role);
            let stripped = strip_seniority_prefix(&full);
            (full, stripped)
        })
        .collect();

    // Exact matches first, prefix included
    if normalized_recommended
        .iter()
        .any(|(full, _)| *full == normalized_applied)
    {
        return 100;
    }

    // Same role at a different seniority level
    if normalized_recommended
        .iter()
        .any(|(_, stripped)| *stripped == stripped_applied)
    {
        return 90;
    }

    // Fall back to word-overlap similarity, keeping the best score
    let best = normalized_recommended
        .iter()
        .map(|(_, stripped)| word_overlap_similarity(&stripped_applied, stripped))
        .fold(0.0_f64, f64::max);

    best.round() as u8
}

/// Similarity (0-100) between two stripped role strings based on how many
/// words of `applied` find a counterpart in `recommended`.
///
/// A word matches when either side contains the other as a substring, so
/// "dev" matches "developer". Intentionally permissive; short words can
/// produce false positives and callers accept that.
fn word_overlap_similarity(applied: &str, recommended: &str) -> f64 {
    // Note: "".split(' ') yields [""], and every string contains "", so an
    // empty applied role matches any single word. Known quirk, kept for
    // compatibility with existing callers.
    let applied_words: Vec<&str> = applied.split(' ').collect();
    let recommended_words: Vec<&str> = recommended.split(' ').collect();

    let matching = applied_words
        .iter()
        .filter(|word| {
            recommended_words
                .iter()
                .any(|r_word| r_word.contains(**word) || word.contains(r_word))
        })
        .count();

    let max_words = applied_words.len().max(recommended_words.len());
    matching as f64 / max_words as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_recommended_roles_scores_zero() {
        assert_eq!(match_percentage("Backend Developer", &[]), 0);
        assert_eq!(match_percentage("", &[]), 0);
    }

    #[test]
    fn test_exact_match_scores_100() {
        assert_eq!(
            match_percentage("Backend Developer", &roles(&["Backend Developer"])),
            100
        );
        assert_eq!(
            match_percentage(
                "Senior Backend Developer",
                &roles(&["Senior Backend Developer"])
            ),
            100
        );
    }

    #[test]
    fn test_case_and_punctuation_insensitive() {
        assert_eq!(
            match_percentage("Data Scientist", &roles(&["data scientist"])),
            100
        );
        assert_eq!(
            match_percentage("Data Scientist", &roles(&["Data  Scientist!"])),
            100
        );
    }

    #[test]
    fn test_seniority_prefix_difference_scores_90() {
        assert_eq!(
            match_percentage("Senior Frontend Developer", &roles(&["Frontend Developer"])),
            90
        );
        assert_eq!(
            match_percentage("Frontend Developer", &roles(&["Junior Frontend Developer"])),
            90
        );
        assert_eq!(
            match_percentage(
                "Lead Backend Developer",
                &roles(&["Principal Backend Developer"])
            ),
            90
        );
    }

    #[test]
    fn test_word_overlap_fallback() {
        // {"full", "stack"} match out of max(3, 3) words -> round(66.67) = 67
        assert_eq!(
            match_percentage("Full Stack Developer", &roles(&["Full Stack Engineer"])),
            67
        );
    }

    #[test]
    fn test_substring_containment_is_bidirectional() {
        // "dev" is contained in "developer"
        assert_eq!(match_percentage("dev", &roles(&["developer"])), 100);
    }

    #[test]
    fn test_disjoint_roles_score_zero() {
        assert_eq!(
            match_percentage("Data Scientist", &roles(&["Backend Developer"])),
            0
        );
    }

    #[test]
    fn test_best_of_multiple_recommendations_wins() {
        let recommended = roles(&["Backend Developer", "Full Stack Engineer"]);
        assert_eq!(match_percentage("Full Stack Developer", &recommended), 67);
    }

    #[test]
    fn test_duplicate_recommendations_do_not_double_count() {
        let once = roles(&["Full Stack Engineer"]);
        let twice = roles(&["Full Stack Engineer", "Full Stack Engineer"]);
        assert_eq!(
            match_percentage("Full Stack Developer", &once),
            match_percentage("Full Stack Developer", &twice)
        );
    }

    #[test]
    fn test_empty_applied_role_quirk_is_stable() {
        // "" splits to [""] and every word contains "", so the empty
        // applied role scores 1/max(1, len(wordsR)) against whatever is
        // recommended. Deliberately pinned; do not "fix".
        assert_eq!(match_percentage("", &roles(&["Backend Developer"])), 50);
        assert_eq!(match_percentage("", &roles(&["Developer"])), 100);
        assert_eq!(
            match_percentage("", &roles(&["Senior Machine Learning Engineer"])),
            33
        );
    }

    #[test]
    fn test_score_always_in_range() {
        let cases = [
            ("", vec!["Backend Developer".to_string()]),
            ("QA Engineer", vec!["Quality Analyst".to_string()]),
            ("x", vec![String::new()]),
        ];
        for (applied, recommended) in cases {
            let score = match_percentage(applied, &recommended);
            assert!(score <= 100, "score {} out of range for {:?}", score, applied);
        }
    }
}
