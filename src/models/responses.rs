use crate::models::domain::AnalyzedCandidate;
use serde::{Deserialize, Serialize};

/// Response for the analyze endpoint: the three report buckets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub allowed: Vec<AnalyzedCandidate>,
    #[serde(rename = "mediumMatch")]
    pub medium_match: Vec<AnalyzedCandidate>,
    #[serde(rename = "notAllowed")]
    pub not_allowed: Vec<AnalyzedCandidate>,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Response for the prune endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PruneResponse {
    pub message: String,
    #[serde(rename = "deletedCount")]
    pub deleted_count: usize,
    #[serde(rename = "deletedApplicationIds")]
    pub deleted_application_ids: Vec<String>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
