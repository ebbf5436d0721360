use crate::models::domain::CandidateRecord;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to analyze a batch of candidate-application records
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AnalyzeRequest {
    #[serde(alias = "company_email", rename = "companyEmail")]
    #[validate(length(min = 1))]
    pub company_email: String,
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
}

/// Request to select applications below a match threshold for deletion
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PruneRequest {
    #[serde(alias = "company_email", rename = "companyEmail")]
    #[validate(length(min = 1))]
    pub company_email: String,
    /// Falls back to `matching.default_prune_threshold` when omitted
    #[validate(range(max = 100))]
    pub percentage: Option<u8>,
    #[serde(default)]
    pub candidates: Vec<CandidateRecord>,
}
