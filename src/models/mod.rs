// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{AnalyzedCandidate, AtsReport, CandidateRecord, MatchTier, RoleAnalysis};
pub use requests::{AnalyzeRequest, PruneRequest};
pub use responses::{AnalyzeResponse, ErrorResponse, HealthResponse, PruneResponse};
