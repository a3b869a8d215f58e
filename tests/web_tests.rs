use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

use jobcast::notify::NoopNotifier;
use jobcast::store::JobStore;
use jobcast::web::{router, ApiState, Board};

fn test_state() -> ApiState {
    ApiState {
        board: Arc::new(RwLock::new(Board {
            store: JobStore::with_mock_data(25),
            ..Board::default()
        })),
        notifier: Arc::new(NoopNotifier),
        channel: "@testchannel".to_string(),
    }
}

async fn request(state: &ApiState, method: &str, uri: &str) -> (StatusCode, Value) {
    let response = router(state.clone())
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn list_jobs_defaults_to_first_active_page() {
    let state = test_state();
    let (status, body) = request(&state, "GET", "/jobs").await;

    assert_eq!(status, StatusCode::OK);
    let jobs = body.as_array().unwrap();
    assert_eq!(jobs.len(), 10);
    assert_eq!(jobs[0]["id"], 1);
    assert_eq!(jobs[0]["status"], "active");
    assert_eq!(jobs[0]["posted"], "No");
    assert!(jobs[0]["scheduled_time"].is_null());
}

#[tokio::test]
async fn list_jobs_honors_query_parameters() {
    let state = test_state();
    let (status, body) = request(
        &state,
        "GET",
        "/jobs?status=archived&skip=2&limit=3&order=desc",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![23, 22, 21]);
}

#[tokio::test]
async fn count_jobs_reports_totals_per_status() {
    let state = test_state();

    let (_, body) = request(&state, "GET", "/jobs/count").await;
    assert_eq!(body["total"], 15);

    let (_, body) = request(&state, "GET", "/jobs/count?status=archived").await;
    assert_eq!(body["total"], 10);

    let (_, body) = request(&state, "GET", "/jobs/count?search=company%203").await;
    assert_eq!(body["total"], 1);
}

#[tokio::test]
async fn post_and_schedule_assigns_a_slot() {
    let state = test_state();
    let (status, body) = request(&state, "POST", "/jobs/1/post_and_schedule").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Job scheduled for Telegram at "));
    assert!(!body["scheduled_time"].is_null());

    let (status, body) = request(&state, "GET", "/scheduled-jobs").await;
    assert_eq!(status, StatusCode::OK);
    let jobs = body.as_array().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["id"], 1);
    assert_eq!(jobs[0]["posted"], "Yes");
    assert_eq!(jobs[0]["status"], "archived");
}

#[tokio::test]
async fn post_and_schedule_unknown_job_is_404() {
    let state = test_state();
    let (status, body) = request(&state, "POST", "/jobs/999/post_and_schedule").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Job not found: 999");
}

#[tokio::test]
async fn mark_as_posted_archives_and_shrinks_active_count() {
    let state = test_state();
    let (status, body) = request(&state, "POST", "/jobs/2/mark_as_posted").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Job 2 marked as 'Posted' and 'Archived'.");

    let (_, body) = request(&state, "GET", "/jobs/count").await;
    assert_eq!(body["total"], 14);
}

#[tokio::test]
async fn mark_as_posted_unknown_job_is_404() {
    let state = test_state();
    let (status, _) = request(&state, "POST", "/jobs/404/mark_as_posted").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_scheduled_job_returns_it_to_the_active_list() {
    let state = test_state();
    request(&state, "POST", "/jobs/3/post_and_schedule").await;

    let (status, body) = request(&state, "DELETE", "/scheduled-jobs/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        "Job 3 removed from queue and returned to active list."
    );

    let (_, body) = request(&state, "GET", "/scheduled-jobs").await;
    assert!(body.as_array().unwrap().is_empty());

    // Back on the active list with a clean slate.
    let (_, body) = request(&state, "GET", "/jobs?limit=25").await;
    let job = body
        .as_array()
        .unwrap()
        .iter()
        .find(|j| j["id"] == 3)
        .cloned()
        .unwrap();
    assert_eq!(job["posted"], "No");
    assert!(job["scheduled_time"].is_null());
}

#[tokio::test]
async fn delete_scheduled_job_twice_is_404() {
    let state = test_state();
    request(&state, "POST", "/jobs/3/post_and_schedule").await;
    request(&state, "DELETE", "/scheduled-jobs/3").await;

    let (status, body) = request(&state, "DELETE", "/scheduled-jobs/3").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Job not found in scheduled queue: 3");
}

#[tokio::test]
async fn daily_report_is_message_only_when_queue_is_empty() {
    let state = test_state();
    let (status, body) = request(&state, "POST", "/trigger-daily-report").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "No jobs have been posted today to report on.");
    assert!(body.get("report").is_none());
}

#[tokio::test]
async fn daily_report_lists_scheduled_jobs() {
    let state = test_state();
    request(&state, "POST", "/jobs/1/post_and_schedule").await;
    request(&state, "POST", "/jobs/2/post_and_schedule").await;

    let (status, body) = request(&state, "POST", "/trigger-daily-report").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Daily report email simulated successfully.");

    let report = body["report"].as_str().unwrap();
    assert!(report.starts_with("Daily Job Posting Report:"));
    assert!(report.contains("'Job Title 1' for 'Company 1'"));
    assert!(report.contains("'Job Title 2' for 'Company 2'"));
}
