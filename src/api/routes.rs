//! HTTP route handlers.

use std::path::Path as FsPath;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::db::storage::PartitionStorage;
use crate::db::tasks::Tasks;
use crate::libs::error::TaskError;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::range::{aggregate, resolve};
use crate::libs::task::{Task, TaskPatch};

/// Shared application state.
pub struct AppState {
    pub tasks: Tasks<Box<dyn PartitionStorage>>,
    /// Exporter bound to the operator name captured at start-up
    pub exporter: Exporter,
    /// Source of "today" for range queries and export file names
    pub today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(tasks: Tasks<Box<dyn PartitionStorage>>, operator_name: &str) -> Self {
        Self {
            tasks,
            exporter: Exporter::new(operator_name),
            today: local_today,
        }
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Error returned by handlers, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Task(TaskError),
    Internal(anyhow::Error),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Task(TaskError::Validation(rejection.body_text()))
    }
}

impl From<TaskError> for ApiError {
    fn from(err: TaskError) -> Self {
        ApiError::Task(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Task(err @ TaskError::Validation(_)) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Task(err @ TaskError::NotFound { .. }) => (StatusCode::NOT_FOUND, err.to_string()),
            ApiError::Task(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            ApiError::Internal(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
        };
        if status.is_server_error() {
            tracing::error!(error = %message, "request failed");
        }
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Query string of the range endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    #[serde(default)]
    pub mode: String,
    pub from: Option<String>,
    pub to: Option<String>,
}

/// Builds the application router. Unmatched paths are served from `static_dir` when given.
pub fn router(state: Arc<AppState>, static_dir: Option<&FsPath>) -> Router {
    let api = Router::new()
        .route("/api/tasks", post(create_task))
        .route("/api/tasks/:date", get(get_tasks))
        .route("/api/tasks/:date/:id", put(update_task).delete(delete_task))
        .route("/api/filter", get(filter_tasks))
        .route("/api/export-range", get(export_range))
        .with_state(state);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };
    app.layer(TraceLayer::new_for_http())
}

/// Runs a store operation on the blocking pool; partition reads and writes are synchronous file I/O.
async fn with_tasks<F, R>(state: &Arc<AppState>, action: F) -> Result<R, ApiError>
where
    F: FnOnce(&AppState) -> Result<R, TaskError> + Send + 'static,
    R: Send + 'static,
{
    let state = state.clone();
    let result = tokio::task::spawn_blocking(move || action(&*state))
        .await
        .map_err(|e| ApiError::Internal(anyhow::anyhow!("task join error: {}", e)))?;
    Ok(result?)
}

/// Malformed bodies are answered with the same `{"error": ...}` shape as validation failures.
pub async fn create_task(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Task>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(task) = payload?;
    Ok(Json(with_tasks(&state, move |state| state.tasks.insert(task)).await?))
}

pub async fn get_tasks(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(with_tasks(&state, move |state| Ok(state.tasks.read(&date))).await?))
}

pub async fn update_task(
    State(state): State<Arc<AppState>>,
    Path((date, id)): Path<(String, String)>,
    payload: Result<Json<TaskPatch>, JsonRejection>,
) -> Result<Json<Task>, ApiError> {
    let Json(patch) = payload?;
    Ok(Json(with_tasks(&state, move |state| state.tasks.update(&date, &id, &patch)).await?))
}

pub async fn delete_task(
    State(state): State<Arc<AppState>>,
    Path((date, id)): Path<(String, String)>,
) -> Result<Json<Value>, ApiError> {
    with_tasks(&state, move |state| state.tasks.remove(&date, &id)).await?;
    Ok(Json(json!({ "ok": true })))
}

pub async fn filter_tasks(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(range_tasks(&state, &query).await?))
}

pub async fn export_range(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RangeQuery>,
) -> Result<Response, ApiError> {
    let tasks = range_tasks(&state, &query).await?;
    let format = ExportFormat::Excel;
    let bytes = state.exporter.render(format, &tasks)?;
    let file_name = state.exporter.file_name(format, (state.today)());

    let disposition = HeaderValue::from_bytes(format!("attachment; filename=\"{}\"", file_name).as_bytes())
        .map_err(|e| ApiError::Internal(e.into()))?;
    let headers = [
        (header::CONTENT_TYPE, HeaderValue::from_static(format.content_type())),
        (header::CONTENT_DISPOSITION, disposition),
    ];

    tracing::info!(mode = %query.mode, rows = tasks.len(), file = %file_name, "range exported");
    Ok((headers, bytes).into_response())
}

async fn range_tasks(state: &Arc<AppState>, query: &RangeQuery) -> Result<Vec<Task>, ApiError> {
    let predicate = resolve(&query.mode, query.from.as_deref(), query.to.as_deref(), (state.today)());
    with_tasks(state, move |state| aggregate(&state.tasks, &predicate)).await
}
