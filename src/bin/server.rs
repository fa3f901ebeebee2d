use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use recipe_match_engine::{
    translate, MatchEngine, MatchReport, PantryQuery, Recipe, RecipeDraft,
};

#[derive(Clone)]
struct AppState {
    engine: Arc<MatchEngine>,
}

#[derive(Debug, Deserialize)]
struct MatchRequest {
    have: Vec<String>,
    #[serde(default = "default_cutoff")]
    cutoff: f64,
}

fn default_cutoff() -> f64 {
    recipe_match_engine::DEFAULT_CUTOFF
}

#[derive(Debug, Deserialize)]
struct ListParams {
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
}

fn default_limit() -> usize {
    100
}

#[derive(Debug, Deserialize)]
struct ViewParams {
    #[serde(default)]
    lang: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

#[derive(Debug, Serialize)]
struct StatsResponse {
    total_recipes: u64,
    total_ingredients: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "match_engine_server=debug,recipe_match_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path = std::env::var("DB_PATH").unwrap_or_else(|_| "recipes.db".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8090);

    tracing::info!("Starting Recipe Match Engine Server");
    tracing::info!("Database: {}", db_path);
    tracing::info!("Port: {}", port);

    let engine = MatchEngine::new(&db_path).await?;
    let state = AppState {
        engine: Arc::new(engine),
    };

    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/api/recipes", get(list_recipes_handler).post(create_recipe_handler))
        .route(
            "/api/recipes/:id",
            get(view_recipe_handler)
                .put(update_recipe_handler)
                .delete(delete_recipe_handler),
        )
        .route("/v1/match", post(match_handler))
        .route("/v1/stats", get(stats_handler))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: recipe_match_engine::VERSION.to_string(),
    })
}

async fn match_handler(
    State(state): State<AppState>,
    Json(req): Json<MatchRequest>,
) -> Result<Json<MatchReport>, AppError> {
    tracing::debug!("Match request: {:?}", req);

    let query = PantryQuery::new(req.have).with_cutoff(req.cutoff);
    let report = state.engine.match_pantry(query).await?;

    tracing::info!(
        "{} pantry keys -> {} recipes ({} full) in {:.2}ms",
        report.have.len(),
        report.results.len(),
        report.full_match_count(),
        report.latency_ms
    );

    Ok(Json(report))
}

async fn list_recipes_handler(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Recipe>>, AppError> {
    let recipes = state.engine.list_recipes(params.skip, params.limit).await?;
    Ok(Json(recipes))
}

async fn create_recipe_handler(
    State(state): State<AppState>,
    Json(draft): Json<RecipeDraft>,
) -> Result<(StatusCode, Json<Recipe>), AppError> {
    let recipe = state.engine.add_recipe(&draft).await?;
    tracing::info!("Created recipe '{}' (id {})", recipe.name, recipe.id);
    Ok((StatusCode::CREATED, Json(recipe)))
}

async fn view_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(params): Query<ViewParams>,
) -> Result<Json<Recipe>, AppError> {
    let mut recipe = state.engine.get_recipe(id).await?;
    if !params.lang.is_empty() {
        recipe.ingredients = translate::translate_list(&recipe.ingredients, &params.lang);
        recipe.steps = translate::translate_list(&recipe.steps, &params.lang);
    }
    Ok(Json(recipe))
}

async fn update_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(draft): Json<RecipeDraft>,
) -> Result<Json<Recipe>, AppError> {
    let recipe = state.engine.update_recipe(id, &draft).await?;
    Ok(Json(recipe))
}

async fn delete_recipe_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    state.engine.delete_recipe(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.engine.store_stats().await?;
    Ok(Json(StatsResponse {
        total_recipes: stats.total_recipes,
        total_ingredients: stats.total_ingredients,
    }))
}

// Error handling
struct AppError(recipe_match_engine::MatchEngineError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        use recipe_match_engine::MatchEngineError;

        let (status, message) = match self.0 {
            MatchEngineError::RecipeNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Recipe not found: {}", id))
            }
            MatchEngineError::DuplicateName(name) => (
                StatusCode::BAD_REQUEST,
                format!("Recipe '{}' already exists", name),
            ),
            MatchEngineError::InvalidCutoff(cutoff) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                format!("Invalid cutoff {}: must be a finite number in (0.0, 1.0]", cutoff),
            ),
            e => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        };

        tracing::error!("Error: {} - {}", status, message);

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<recipe_match_engine::MatchEngineError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recipe_match_engine::MatchEngineError;

    fn status_for(err: MatchEngineError) -> StatusCode {
        AppError(err).into_response().status()
    }

    #[test]
    fn test_recipe_not_found_maps_to_404() {
        assert_eq!(
            status_for(MatchEngineError::RecipeNotFound(42)),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_duplicate_name_maps_to_400() {
        assert_eq!(
            status_for(MatchEngineError::DuplicateName("Omelette".to_string())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_invalid_cutoff_maps_to_422() {
        assert_eq!(
            status_for(MatchEngineError::InvalidCutoff(0.0)),
            StatusCode::UNPROCESSABLE_ENTITY
        );
    }

    #[test]
    fn test_other_errors_map_to_500() {
        assert_eq!(
            status_for(MatchEngineError::Other("boom".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
