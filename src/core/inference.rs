use crate::core::tables::ROLE_KEYWORDS;

/// Infer plausible roles from a candidate's skill list.
///
/// Used when a candidate record carries no stored recommendations. A role
/// qualifies when at least one of its keywords and one of the candidate's
/// lower-cased skills contain each other as substrings. Returns roles in
/// table order, deduplicated; may legitimately be empty.
pub fn infer_roles(skills: &[String]) -> Vec<String> {
    let normalized_skills: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();

    ROLE_KEYWORDS
        .iter()
        .filter(|(_, keywords)| {
            keywords.iter().any(|keyword| {
                normalized_skills
                    .iter()
                    .any(|skill| skill.contains(keyword) || keyword.contains(skill.as_str()))
            })
        })
        .map(|(role, _)| (*role).to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_infer_from_web_stack() {
        let inferred = infer_roles(&skills(&["react", "node", "mongodb"]));
        assert!(inferred.contains(&"Full Stack Developer".to_string()));
        assert!(inferred.contains(&"Backend Developer".to_string()));
        assert!(inferred.contains(&"Frontend Developer".to_string()));
    }

    #[test]
    fn test_infer_is_case_insensitive_on_skills() {
        let inferred = infer_roles(&skills(&["Python", "Machine Learning"]));
        assert!(inferred.contains(&"Data Scientist".to_string()));
    }

    #[test]
    fn test_infer_devops() {
        let inferred = infer_roles(&skills(&["docker", "kubernetes", "terraform"]));
        assert!(inferred.contains(&"DevOps Engineer".to_string()));
    }

    #[test]
    fn test_unrecognized_skills_yield_empty() {
        assert!(infer_roles(&skills(&["underwater basket weaving"])).is_empty());
        assert!(infer_roles(&[]).is_empty());
    }

    #[test]
    fn test_no_duplicate_roles() {
        // Several keywords of the same role can fire; the role appears once.
        let inferred = infer_roles(&skills(&["html", "css", "react", "angular"]));
        let frontend_count = inferred
            .iter()
            .filter(|r| *r == "Frontend Developer")
            .count();
        assert_eq!(frontend_count, 1);
    }
}
