use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};

use crate::error::JobcastError;
use crate::notify::{message, Notifier};
use crate::scheduler::ScheduleQueue;
use crate::store::{Job, JobFilter, JobStatus, JobStore, SortOrder};

/// Job store plus scheduled queue behind one lock. A single writer at a
/// time keeps the store/queue invariants without finer-grained locking.
#[derive(Debug, Default)]
pub struct Board {
    pub store: JobStore,
    pub queue: ScheduleQueue,
}

#[derive(Clone)]
pub struct ApiState {
    pub board: Arc<RwLock<Board>>,
    pub notifier: Arc<dyn Notifier>,
    pub channel: String,
}

#[derive(Deserialize)]
pub struct ListJobsQuery {
    #[serde(default = "default_status")]
    status: JobStatus,
    #[serde(default)]
    skip: usize,
    #[serde(default = "default_limit")]
    limit: usize,
    #[serde(default = "default_order")]
    order: SortOrder,
    search: Option<String>,
}

#[derive(Deserialize)]
pub struct CountJobsQuery {
    #[serde(default = "default_status")]
    status: JobStatus,
    search: Option<String>,
}

fn default_status() -> JobStatus {
    JobStatus::Active
}

fn default_limit() -> usize {
    10
}

fn default_order() -> SortOrder {
    SortOrder::Asc
}

#[derive(Serialize)]
struct CountResponse {
    total: usize,
}

#[derive(Serialize)]
struct MessageResponse {
    message: String,
}

#[derive(Serialize)]
struct ScheduleResponse {
    message: String,
    scheduled_time: DateTime<Local>,
}

#[derive(Serialize)]
struct ReportResponse {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    detail: String,
}

struct ApiError(JobcastError);

impl From<JobcastError> for ApiError {
    fn from(err: JobcastError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            JobcastError::JobNotFound(_) | JobcastError::NotScheduled(_) => StatusCode::NOT_FOUND,
            JobcastError::Transmission(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (
            status,
            Json(ErrorResponse {
                detail: self.0.to_string(),
            }),
        )
            .into_response()
    }
}

pub fn router(state: ApiState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/jobs", get(list_jobs_handler))
        .route("/jobs/count", get(count_jobs_handler))
        .route("/jobs/{id}/post_and_schedule", post(post_and_schedule_handler))
        .route("/jobs/{id}/mark_as_posted", post(mark_as_posted_handler))
        .route("/scheduled-jobs", get(list_scheduled_handler))
        .route("/scheduled-jobs/{id}", delete(delete_scheduled_handler))
        .route("/trigger-daily-report", post(trigger_daily_report_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run_server(addr: SocketAddr, state: ApiState, shutdown: CancellationToken) {
    let app = router(state);

    tracing::info!(addr = %addr, "Starting jobcast server");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind server");
            return;
        }
    };

    let serve = axum::serve(listener, app)
        .with_graceful_shutdown(async move { shutdown.cancelled().await });

    if let Err(e) = serve.await {
        tracing::error!(error = %e, "Server failed");
    }
}

async fn list_jobs_handler(
    State(state): State<ApiState>,
    Query(params): Query<ListJobsQuery>,
) -> Json<Vec<Job>> {
    let filter = JobFilter {
        status: params.status,
        skip: params.skip,
        limit: params.limit,
        order: params.order,
        search: params.search,
    };

    let board = state.board.read().await;
    let jobs: Vec<Job> = board.store.list(&filter).into_iter().cloned().collect();
    Json(jobs)
}

async fn count_jobs_handler(
    State(state): State<ApiState>,
    Query(params): Query<CountJobsQuery>,
) -> Json<CountResponse> {
    let filter = JobFilter {
        status: params.status,
        search: params.search,
        ..JobFilter::default()
    };

    let board = state.board.read().await;
    Json(CountResponse {
        total: board.store.count(&filter),
    })
}

async fn post_and_schedule_handler(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<ScheduleResponse>, ApiError> {
    // Schedule under the lock, transmit after releasing it. A failed send
    // is reported but the slot allocation stands.
    let (slot, announcement) = {
        let mut board = state.board.write().await;
        let Board { store, queue } = &mut *board;

        let slot = queue.schedule(store, id, Local::now())?;
        let job = store.get(id).ok_or(JobcastError::JobNotFound(id))?;
        (slot, message::announcement(job))
    };

    state.notifier.send(&announcement, &state.channel).await?;

    tracing::info!(job_id = id, slot = %slot, "Job scheduled");
    Ok(Json(ScheduleResponse {
        message: format!(
            "Job scheduled for Telegram at {}",
            slot.format("%Y-%m-%d %H:%M")
        ),
        scheduled_time: slot,
    }))
}

async fn mark_as_posted_handler(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut board = state.board.write().await;
    board.store.mark_posted(id)?;

    Ok(Json(MessageResponse {
        message: format!("Job {id} marked as 'Posted' and 'Archived'."),
    }))
}

async fn list_scheduled_handler(State(state): State<ApiState>) -> Json<Vec<Job>> {
    let board = state.board.read().await;
    let jobs: Vec<Job> = board
        .queue
        .scheduled_jobs(&board.store)
        .into_iter()
        .cloned()
        .collect();
    Json(jobs)
}

async fn delete_scheduled_handler(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut board = state.board.write().await;
    let Board { store, queue } = &mut *board;
    queue.unschedule(store, id)?;

    tracing::info!(job_id = id, "Job removed from scheduled queue");
    Ok(Json(MessageResponse {
        message: format!("Job {id} removed from queue and returned to active list."),
    }))
}

async fn trigger_daily_report_handler(State(state): State<ApiState>) -> Json<ReportResponse> {
    let board = state.board.read().await;
    if board.queue.is_empty() {
        return Json(ReportResponse {
            message: "No jobs have been posted today to report on.".to_string(),
            report: None,
        });
    }

    let report = message::daily_report(&board.queue.scheduled_jobs(&board.store));
    Json(ReportResponse {
        message: "Daily report email simulated successfully.".to_string(),
        report: Some(report),
    })
}
