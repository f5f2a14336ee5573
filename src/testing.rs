//! In-process stand-in for the reports API used by unit tests.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::{collections::HashMap, sync::Arc, time::Duration};
use tokio::sync::Mutex;

pub enum MockReply {
    Json(Value),
    Delayed(Duration, Value),
    Status(u16),
    Garbage,
}

#[derive(Clone)]
struct MockState {
    replies: Arc<HashMap<String, MockReply>>,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

pub struct Upstream {
    pub endpoint: String,
    requests: Arc<Mutex<Vec<(String, String)>>>,
}

impl Upstream {
    /// `(date, iso)` pairs received so far, sorted by date.
    pub async fn requests(&self) -> Vec<(String, String)> {
        let mut seen = self.requests.lock().await.clone();
        seen.sort();
        seen
    }
}

/// Serves `replies` keyed by the `date` query parameter; unknown dates get an
/// empty `data` list.
pub async fn spawn_upstream(replies: HashMap<String, MockReply>) -> Upstream {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = MockState {
        replies: Arc::new(replies),
        requests: Arc::clone(&requests),
    };
    let app = Router::new()
        .route("/api/reports", get(reports))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock upstream");
    let addr = listener.local_addr().expect("mock upstream address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Upstream {
        endpoint: format!("http://{addr}/api/reports"),
        requests,
    }
}

async fn reports(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let date = params.get("date").cloned().unwrap_or_default();
    let iso = params.get("iso").cloned().unwrap_or_default();
    state.requests.lock().await.push((date.clone(), iso));

    match state.replies.get(&date) {
        Some(MockReply::Json(body)) => Json(body.clone()).into_response(),
        Some(MockReply::Delayed(delay, body)) => {
            tokio::time::sleep(*delay).await;
            Json(body.clone()).into_response()
        }
        Some(MockReply::Status(code)) => StatusCode::from_u16(*code)
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            .into_response(),
        Some(MockReply::Garbage) => "<html>upstream exploded</html>".into_response(),
        None => Json(json!({ "data": [] })).into_response(),
    }
}
