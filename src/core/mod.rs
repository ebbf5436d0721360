// Core algorithm exports
pub mod analyzer;
pub mod inference;
pub mod normalize;
pub mod scoring;
pub mod tables;

pub use analyzer::Analyzer;
pub use inference::infer_roles;
pub use normalize::{normalize, strip_seniority_prefix};
pub use scoring::match_percentage;
pub use tables::{required_skills, ROLE_KEYWORDS, ROLE_REQUIREMENTS};
