use crate::core::Analyzer;
use crate::models::{
    AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse, PruneRequest, PruneResponse,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Analyzer,
    pub max_candidates: usize,
    pub default_prune_threshold: u8,
}

/// Configure all ATS routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/ats/analyze", web::post().to(analyze_candidates))
        .route("/ats/prune", web::post().to(prune_applications));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze candidates endpoint
///
/// POST /api/v1/ats/analyze
///
/// Request body:
/// ```json
/// {
///   "companyEmail": "hr@acme.example",
///   "candidates": [
///     {
///       "candidateId": "MKLO-123",
///       "applicationId": "app-1",
///       "appliedRole": "Backend Developer",
///       "recommendedRoles": ["Backend Developer"],
///       "skills": ["node", "sql"]
///     }
///   ]
/// }
/// ```
async fn analyze_candidates(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    if req.candidates.len() > state.max_candidates {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Too many candidates".to_string(),
            message: format!(
                "Request contains {} candidates, maximum is {}",
                req.candidates.len(),
                state.max_candidates
            ),
            status_code: 400,
        });
    }

    tracing::info!(
        "Starting analysis for company: {} ({} candidates)",
        req.company_email,
        req.candidates.len()
    );

    let report = state.analyzer.analyze_batch(&req.candidates);

    tracing::info!(
        "Analysis complete for {}: total={}, allowed={}, mediumMatch={}, notAllowed={}",
        req.company_email,
        report.total(),
        report.allowed.len(),
        report.medium_match.len(),
        report.not_allowed.len()
    );

    let total_candidates = report.total();
    HttpResponse::Ok().json(AnalyzeResponse {
        allowed: report.allowed,
        medium_match: report.medium_match,
        not_allowed: report.not_allowed,
        total_candidates,
    })
}

/// Prune applications endpoint
///
/// POST /api/v1/ats/prune
///
/// Selects the applications whose match percentage falls below the given
/// threshold. The caller (the persistence layer) performs the actual
/// deletion with the returned ids.
async fn prune_applications(
    state: web::Data<AppState>,
    req: web::Json<PruneRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for prune request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let threshold = req.percentage.unwrap_or(state.default_prune_threshold);

    let deleted_application_ids = state.analyzer.select_below(&req.candidates, threshold);
    let deleted_count = deleted_application_ids.len();

    tracing::info!(
        "Prune for {}: {} of {} applications below {}% match",
        req.company_email,
        deleted_count,
        req.candidates.len(),
        threshold
    );

    HttpResponse::Ok().json(PruneResponse {
        message: format!(
            "Successfully deleted {} applications below {}% match",
            deleted_count, threshold
        ),
        deleted_count,
        deleted_application_ids,
    })
}
