//! ats-match - Role-match scoring service for the Mockello ATS
//!
//! This library provides the pure scoring engine that decides how well a
//! candidate's recommended roles align with the role they applied for,
//! and the bucketed report built on top of it.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{match_percentage, Analyzer};
pub use crate::models::{AnalyzedCandidate, AtsReport, CandidateRecord, MatchTier, RoleAnalysis};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let score = match_percentage("Backend Developer", &["Backend Developer".to_string()]);
        assert_eq!(score, 100);
    }
}
