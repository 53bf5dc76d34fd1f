use crate::core::{Matcher, RankOutcome};
use crate::error::MatchError;
use crate::models::{
    ErrorResponse, ExtractAreasRequest, ExtractAreasResponse, FindMatchesRequest, HealthResponse,
    MatchEntry, MatchResponse, ServiceRequest,
};
use crate::services::CandidateRepository;
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use std::time::Duration;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn CandidateRepository>,
    pub matcher: Matcher,
    /// Upper bound on the candidate repository fetch
    pub fetch_timeout: Duration,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/locations/extract", web::post().to(extract_areas));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.repository.health_check().await;

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        repository: state.repository.name().to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "requestId": "string",
///   "skill": "cleaning|cooking|driving|gardening",
///   "timeWindow": "morning|midday|afternoon|evening|flexible",
///   "address": "string"
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, MatchError> {
    let request = validate_request(req.into_inner())?;
    let request_id = request.request_id.clone();

    match match_request(
        state.repository.as_ref(),
        &state.matcher,
        request,
        state.fetch_timeout,
    )
    .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.response_for(Some(&request_id))),
    }
}

/// Validate a raw request, fetch the pool and rank it
///
/// Upstream failures are returned as errors, never as an empty match list.
pub async fn handle_match_request(
    repository: &dyn CandidateRepository,
    matcher: &Matcher,
    raw: FindMatchesRequest,
    fetch_timeout: Duration,
) -> Result<MatchResponse, MatchError> {
    let request = validate_request(raw)?;
    match_request(repository, matcher, request, fetch_timeout).await
}

fn validate_request(raw: FindMatchesRequest) -> Result<ServiceRequest, MatchError> {
    raw.into_service_request().map_err(|e| {
        tracing::info!("Rejected match request: {}", e);
        e
    })
}

/// Fetch the available pool for a validated request and rank it
pub async fn match_request(
    repository: &dyn CandidateRepository,
    matcher: &Matcher,
    request: ServiceRequest,
    fetch_timeout: Duration,
) -> Result<MatchResponse, MatchError> {
    tracing::info!(
        "Matching request {}: skill={}, window={}",
        request.request_id,
        request.skill,
        request.time_window
    );

    let fetch = tokio::time::timeout(fetch_timeout, repository.available_candidates());
    let candidates = match fetch.await {
        Ok(Ok(candidates)) => candidates,
        Ok(Err(e)) => {
            tracing::error!(
                "Failed to fetch helpers from {} for {}: {}",
                repository.name(),
                request.request_id,
                e
            );
            return Err(MatchError::UpstreamFetch(e));
        }
        Err(_) => {
            tracing::error!(
                "Fetching helpers from {} timed out after {:?} for {}",
                repository.name(),
                fetch_timeout,
                request.request_id
            );
            return Err(MatchError::UpstreamTimeout(fetch_timeout));
        }
    };

    tracing::debug!("Fetched {} helpers for {}", candidates.len(), request.request_id);

    let ranker = matcher.clone();
    let ranked_request = request.clone();
    let outcome: RankOutcome =
        tokio::task::spawn_blocking(move || ranker.rank(&ranked_request, candidates))
            .await
            .map_err(|e| {
                tracing::error!("Ranking task failed for {}: {}", request.request_id, e);
                MatchError::Internal(e.to_string())
            })?;

    tracing::debug!(
        "Request {} resolved areas {:?}",
        request.request_id,
        outcome.extracted_areas
    );

    let message = outcome_message(outcome.matches.len(), outcome.total_candidates);

    tracing::info!(
        "Returning {} matches for request {} (from {} helpers)",
        outcome.matches.len(),
        request.request_id,
        outcome.total_candidates
    );

    Ok(MatchResponse {
        success: true,
        request_id: Some(request.request_id),
        matches: outcome.matches.into_iter().map(MatchEntry::from).collect(),
        message,
        total_candidates: outcome.total_candidates,
        extracted_areas: outcome.extracted_areas,
        error: None,
    })
}

fn outcome_message(matched: usize, total_candidates: usize) -> String {
    match (matched, total_candidates) {
        (_, 0) => "No helpers are currently available".to_string(),
        (0, _) => "No suitable helpers found for this request".to_string(),
        (1, _) => "Found 1 matching helper".to_string(),
        (n, _) => format!("Found {} matching helpers", n),
    }
}

/// Location preview endpoint
///
/// POST /api/v1/locations/extract
///
/// Returns the gazetteer areas an address resolves to.
async fn extract_areas(
    state: web::Data<AppState>,
    req: web::Json<ExtractAreasRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let address = req.address.trim();
    if address.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: "address must not be blank".to_string(),
            status_code: 400,
        });
    }

    HttpResponse::Ok().json(ExtractAreasResponse {
        address: address.to_string(),
        areas: state.matcher.gazetteer().extract_areas(address),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Gazetteer;
    use crate::models::Candidate;
    use crate::services::{InMemoryRepository, PostgresError, RepositoryError};
    use async_trait::async_trait;

    struct FailingRepository;

    #[async_trait]
    impl CandidateRepository for FailingRepository {
        async fn available_candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
            Err(PostgresError::SqlxError(sqlx::Error::PoolTimedOut).into())
        }

        async fn health_check(&self) -> bool {
            false
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    struct SlowRepository;

    #[async_trait]
    impl CandidateRepository for SlowRepository {
        async fn available_candidates(&self) -> Result<Vec<Candidate>, RepositoryError> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![])
        }

        async fn health_check(&self) -> bool {
            true
        }

        fn name(&self) -> &'static str {
            "slow"
        }
    }

    fn raw_request() -> FindMatchesRequest {
        FindMatchesRequest {
            request_id: Some("req-1".to_string()),
            skill: "cooking".to_string(),
            time_window: "evening".to_string(),
            address: "Koramangala, Bangalore".to_string(),
        }
    }

    fn matcher() -> Matcher {
        Matcher::new(Gazetteer::new(["bangalore", "koramangala"]))
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(outcome_message(0, 0), "No helpers are currently available");
        assert_eq!(outcome_message(0, 4), "No suitable helpers found for this request");
        assert_eq!(outcome_message(1, 4), "Found 1 matching helper");
        assert_eq!(outcome_message(3, 4), "Found 3 matching helpers");
    }

    #[tokio::test]
    async fn test_empty_pool_is_success() {
        let repository = InMemoryRepository::default();

        let timeout = Duration::from_secs(1);
        let response = handle_match_request(&repository, &matcher(), raw_request(), timeout)
            .await
            .unwrap();

        assert!(response.success);
        assert!(response.matches.is_empty());
        assert_eq!(response.message, "No helpers are currently available");
        assert_eq!(response.request_id.as_deref(), Some("req-1"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_error() {
        let timeout = Duration::from_secs(1);
        let result =
            handle_match_request(&FailingRepository, &matcher(), raw_request(), timeout).await;

        assert!(matches!(result, Err(MatchError::UpstreamFetch(_))));
    }

    #[tokio::test]
    async fn test_upstream_timeout() {
        let timeout = Duration::from_millis(20);
        let result =
            handle_match_request(&SlowRepository, &matcher(), raw_request(), timeout).await;

        assert!(matches!(result, Err(MatchError::UpstreamTimeout(_))));
    }

    #[tokio::test]
    async fn test_validation_happens_before_fetch() {
        let mut raw = raw_request();
        raw.skill = "babysitting".to_string();

        // The failing repository would turn any fetch into an upstream error
        let timeout = Duration::from_secs(1);
        let result = handle_match_request(&FailingRepository, &matcher(), raw, timeout).await;

        assert!(matches!(result, Err(MatchError::Validation(_))));
    }
}
