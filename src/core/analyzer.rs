use crate::core::{inference::infer_roles, scoring::match_percentage, tables::required_skills};
use crate::models::{AnalyzedCandidate, AtsReport, CandidateRecord, MatchTier, RoleAnalysis};

/// Role-match analyzer - scores candidate-application pairs and assembles
/// the bucketed ATS report.
///
/// # Pipeline
/// 1. Resolve recommended roles (stored, else inferred from skills)
/// 2. Score the applied role against them
/// 3. Compute matching/missing required skills for the applied role
/// 4. Build the tiered justification and partition into buckets
#[derive(Debug, Clone, Default)]
pub struct Analyzer;

impl Analyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze one applied role against a set of recommended roles and the
    /// candidate's skills. Pure and total: any input produces a score in
    /// [0, 100] and a non-empty justification.
    pub fn analyze(
        &self,
        applied_role: &str,
        recommended_roles: &[String],
        skills: &[String],
    ) -> RoleAnalysis {
        let normalized_skills: Vec<String> = skills.iter().map(|s| s.to_lowercase()).collect();
        let required = required_skills(applied_role);

        let matching_skills: Vec<String> = required
            .iter()
            .filter(|skill| normalized_skills.iter().any(|cs| cs.contains(**skill)))
            .map(|s| (*s).to_string())
            .collect();
        let missing_skills: Vec<String> = required
            .iter()
            .filter(|skill| !normalized_skills.iter().any(|cs| cs.contains(**skill)))
            .map(|s| (*s).to_string())
            .collect();

        let score = match_percentage(applied_role, recommended_roles);

        let justification = build_justification(
            applied_role,
            score,
            &matching_skills,
            &missing_skills,
            recommended_roles,
        );

        RoleAnalysis {
            match_percentage: score,
            matching_skills,
            missing_skills,
            justification,
        }
    }

    /// Analyze a record end to end, falling back to skill-based role
    /// inference when no recommendations are stored.
    pub fn analyze_record(&self, record: &CandidateRecord) -> AnalyzedCandidate {
        let recommended_roles = if record.recommended_roles.is_empty() {
            infer_roles(&record.skills)
        } else {
            record.recommended_roles.clone()
        };

        let analysis = self.analyze(&record.applied_role, &recommended_roles, &record.skills);

        AnalyzedCandidate {
            mockello_id: record.mockello_id.clone(),
            name: record.name.clone(),
            applied_role: record.applied_role.clone(),
            recommended_roles,
            match_percentage: analysis.match_percentage,
            matching_skills: analysis.matching_skills,
            missing_skills: analysis.missing_skills,
            justification: analysis.justification,
        }
    }

    /// Score a batch of records and partition them into the three report
    /// buckets. Records are independent; order within a bucket follows
    /// input order.
    pub fn analyze_batch(&self, records: &[CandidateRecord]) -> AtsReport {
        let mut report = AtsReport::default();

        for record in records {
            let analyzed = self.analyze_record(record);
            match MatchTier::for_score(analyzed.match_percentage) {
                MatchTier::Allowed => report.allowed.push(analyzed),
                MatchTier::MediumMatch => report.medium_match.push(analyzed),
                MatchTier::NotAllowed => report.not_allowed.push(analyzed),
            }
        }

        report
    }

    /// Application ids whose score falls strictly below `threshold`.
    ///
    /// Used by the cleanup pipeline that deletes weak applications. Only
    /// stored recommended roles count here; the inference fallback does
    /// not run, so candidates without recommendations score 0 and are
    /// selected by any positive threshold.
    pub fn select_below(&self, records: &[CandidateRecord], threshold: u8) -> Vec<String> {
        records
            .iter()
            .filter(|record| {
                match_percentage(&record.applied_role, &record.recommended_roles) < threshold
            })
            .map(|record| record.application_id.clone())
            .collect()
    }
}

/// Human-readable verdict for the HR reviewer. Wording branches on the
/// score tier; the templates are fixed and consumed verbatim by the UI.
fn build_justification(
    applied_role: &str,
    score: u8,
    matching_skills: &[String],
    missing_skills: &[String],
    recommended_roles: &[String],
) -> String {
    let mut justification = String::new();

    if score >= 70 {
        justification.push_str(&format!(
            "Strong match for {} role ({}% match). ",
            applied_role, score
        ));
        if !matching_skills.is_empty() {
            justification.push_str(&format!(
                "Has relevant skills: {}. ",
                matching_skills.join(", ")
            ));
        }
    } else if score >= 50 {
        justification.push_str(&format!(
            "Medium match for {} role ({}% match). ",
            applied_role, score
        ));
        if !matching_skills.is_empty() {
            justification.push_str(&format!(
                "Has some relevant skills: {}. ",
                matching_skills.join(", ")
            ));
        }
        if !missing_skills.is_empty() {
            justification.push_str(&format!(
                "Could improve in: {}. ",
                missing_skills.join(", ")
            ));
        }
    } else if score > 0 {
        justification.push_str(&format!(
            "Low match for {} role ({}% match). ",
            applied_role, score
        ));
        if !missing_skills.is_empty() {
            justification.push_str(&format!(
                "Missing key skills: {}. ",
                missing_skills.join(", ")
            ));
        }
        if !recommended_roles.is_empty() {
            justification.push_str(&format!(
                "Better suited for: {}. ",
                recommended_roles.join(", ")
            ));
        }
    } else {
        justification.push_str(&format!(
            "Not recommended for {} role (0% match). ",
            applied_role
        ));
        if !missing_skills.is_empty() {
            justification.push_str(&format!(
                "Missing critical skills: {}. ",
                missing_skills.join(", ")
            ));
        }
        if !recommended_roles.is_empty() {
            justification.push_str(&format!(
                "Consider these roles instead: {}. ",
                recommended_roles.join(", ")
            ));
        }
    }

    justification
}
