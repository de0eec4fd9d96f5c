use anyhow::Result;
use axum::{extract::{Path, Query, State}, http::StatusCode, routing::get, Json, Router};
use recommender::{Catalog, RecommendError, Recommender, RecommenderConfig, ScoredResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

const MAX_K: usize = 100;

#[derive(Deserialize)]
pub struct RecommendParams {
    pub title: String,
    pub k: Option<usize>,
}

#[derive(Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    pub prefix: String,
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct RecommendResponse {
    pub query: String,
    pub took_s: f64,
    pub results: Vec<ScoredResult>,
}

#[derive(Serialize)]
pub struct SuggestResponse {
    pub prefix: String,
    pub titles: Vec<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
}

type ApiError = (StatusCode, Json<serde_json::Value>);

/// Load the catalog at `catalog_path` and build the router around it.
pub fn build_app(catalog_path: &str, config: RecommenderConfig) -> Result<Router> {
    let catalog = Catalog::load(catalog_path, &config)?;
    Ok(build_router(Recommender::new(catalog, config)))
}

pub fn build_router(recommender: Recommender) -> Router {
    let state = AppState { recommender: Arc::new(recommender) };

    // CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default
    let cors = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => {
            let origins: Vec<_> = val
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect();
            if origins.is_empty() {
                CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
            } else {
                CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
            }
        }
        Err(_) => CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/recommend", get(recommend_handler))
        .route("/suggest", get(suggest_handler))
        .route("/movie/:index", get(movie_handler))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn recommend_handler(State(state): State<AppState>, Query(params): Query<RecommendParams>) -> Result<Json<RecommendResponse>, ApiError> {
    let start = std::time::Instant::now();
    let k = params.k.unwrap_or(state.recommender.config().top_k).clamp(1, MAX_K);
    match state.recommender.recommend_top(&params.title, k) {
        Ok(results) => Ok(Json(RecommendResponse { query: params.title, took_s: start.elapsed().as_secs_f64(), results })),
        Err(RecommendError::NotFound { query, suggestions }) => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": "not found", "query": query, "suggestions": suggestions })),
        )),
        Err(e) => {
            tracing::error!(error = %e, "recommend failed");
            Err((StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({ "error": e.to_string() }))))
        }
    }
}

pub async fn suggest_handler(State(state): State<AppState>, Query(params): Query<SuggestParams>) -> Json<SuggestResponse> {
    let titles = match params.limit {
        Some(limit) => state.recommender.catalog().titles_with_prefix(&params.prefix, limit.min(MAX_K)),
        None => state.recommender.suggest(&params.prefix),
    };
    Json(SuggestResponse { prefix: params.prefix, titles })
}

pub async fn movie_handler(State(state): State<AppState>, Path(index): Path<usize>) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(entry) = state.recommender.catalog().get(index) else {
        return Err((StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "not found" }))));
    };
    let terms: BTreeMap<&str, u32> = entry.vector.iter().map(|(t, c)| (t.as_str(), *c)).collect();
    Ok(Json(serde_json::json!({ "index": index, "title": entry.title, "terms": terms })))
}
