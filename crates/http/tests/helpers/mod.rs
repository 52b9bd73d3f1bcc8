//! In-process stub of the `/search` service for transport tests.
//!
//! Serves HTML fragments on an ephemeral port and records the raw
//! path-and-query of every request it receives.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;

/// Query that makes the stub answer 500.
pub const FAILING_QUERY: &str = "boom";

#[derive(Clone, Default)]
struct StubState {
    seen: Arc<Mutex<Vec<String>>>,
}

pub struct StubServer {
    pub addr: SocketAddr,
    seen: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    pub async fn start() -> Self {
        let state = StubState::default();
        let seen = state.seen.clone();
        let app = Router::new().route("/search", get(search)).with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub server");
        let addr = listener.local_addr().expect("No local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Stub server failed");
        });

        StubServer { addr, seen }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Raw path-and-query of every request, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

async fn search(
    State(state): State<StubState>,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let raw = uri.path_and_query().map(|pq| pq.as_str().to_string()).unwrap_or_default();
    state.seen.lock().unwrap().push(raw);

    match params.get("q").map(String::as_str) {
        None => StatusCode::BAD_REQUEST.into_response(),
        Some(FAILING_QUERY) => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        Some(q) => Html(format!("<ul><li>{q}</li></ul>")).into_response(),
    }
}

/// A base URL nothing is listening on.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("No local addr");
    drop(listener);
    format!("http://{addr}")
}
