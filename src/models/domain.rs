use serde::{Deserialize, Serialize};

/// One candidate-application pair, as supplied by the data-fetch step.
///
/// `mockello_id` is the opaque candidate identifier used as a foreign key
/// across collections; `application_id` identifies the job application the
/// scoring verdict applies to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "candidateId")]
    pub mockello_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "applicationId")]
    pub application_id: String,
    #[serde(rename = "appliedRole")]
    pub applied_role: String,
    #[serde(rename = "recommendedRoles", default)]
    pub recommended_roles: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Result of analyzing one applied role against a candidate's profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleAnalysis {
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    pub justification: String,
}

/// A candidate record together with its analysis, as it appears in report
/// buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzedCandidate {
    #[serde(rename = "candidateId")]
    pub mockello_id: String,
    pub name: String,
    #[serde(rename = "appliedRole")]
    pub applied_role: String,
    #[serde(rename = "recommendedRoles")]
    pub recommended_roles: Vec<String>,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "matchingSkills")]
    pub matching_skills: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skills: Vec<String>,
    pub justification: String,
}

/// Qualification tier derived from the match percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchTier {
    Allowed,
    MediumMatch,
    NotAllowed,
}

impl MatchTier {
    /// Tier boundaries are fixed at 70 and 50; UIs key their copy and
    /// colors off these exact values.
    pub fn for_score(score: u8) -> Self {
        if score >= 70 {
            MatchTier::Allowed
        } else if score >= 50 {
            MatchTier::MediumMatch
        } else {
            MatchTier::NotAllowed
        }
    }
}

/// Bucketed report over a batch of candidate records. The three buckets
/// are a disjoint partition: every analyzed record lands in exactly one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtsReport {
    pub allowed: Vec<AnalyzedCandidate>,
    #[serde(rename = "mediumMatch")]
    pub medium_match: Vec<AnalyzedCandidate>,
    #[serde(rename = "notAllowed")]
    pub not_allowed: Vec<AnalyzedCandidate>,
}

impl AtsReport {
    pub fn total(&self) -> usize {
        self.allowed.len() + self.medium_match.len() + self.not_allowed.len()
    }
}
