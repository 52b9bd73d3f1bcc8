//! End-to-end tests: SearchController + HttpTransport against a stub server.

mod helpers;

use helpers::{closed_base_url, StubServer, FAILING_QUERY};
use searchbox_core::{
    MemoryView, SearchController, SearchError, SearchOutcome, SearchResponse, SearchTransport,
    ViewEvent, SUBMIT_KEY,
};
use searchbox_http::HttpTransport;

// ---------------------------------------------------------------------------
// Transport
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_get_returns_body_on_success() {
    let server = StubServer::start().await;
    let transport = HttpTransport::new(&server.base_url()).unwrap();

    let response = transport.get("/search?q=cats").await.unwrap();

    assert_eq!(response, SearchResponse::ok("<ul><li>cats</li></ul>"));
}

#[tokio::test]
async fn test_get_reports_error_status_without_body() {
    let server = StubServer::start().await;
    let transport = HttpTransport::new(&server.base_url()).unwrap();

    let response = transport.get(&format!("/search?q={FAILING_QUERY}")).await.unwrap();

    assert_eq!(response.status, 500);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_get_fails_when_nothing_listens() {
    let transport = HttpTransport::new(&closed_base_url().await).unwrap();
    let err = transport.get("/search?q=cats").await.unwrap_err();
    assert!(!err.message.is_empty());
}

// ---------------------------------------------------------------------------
// Controller over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_search_renders_server_markup() {
    let server = StubServer::start().await;
    let transport = HttpTransport::new(&server.base_url()).unwrap();
    let ctrl = SearchController::new(MemoryView::with_query("result"), transport);

    let outcome = ctrl.on_trigger().await;

    assert_eq!(outcome, SearchOutcome::Rendered { bytes: 24 });
    assert_eq!(ctrl.view().results(), "<ul><li>result</li></ul>");
    assert!(ctrl.view().trigger_enabled());
    assert!(!ctrl.view().busy());
}

#[tokio::test]
async fn test_outbound_path_is_uri_component_encoded() {
    let server = StubServer::start().await;
    let transport = HttpTransport::new(&server.base_url()).unwrap();
    let ctrl = SearchController::new(MemoryView::with_query("a&b c"), transport);

    let outcome = ctrl.on_key_down(SUBMIT_KEY).await;

    assert!(matches!(outcome, Some(SearchOutcome::Rendered { .. })));
    assert_eq!(server.requests(), vec!["/search?q=a%26b%20c"]);
    assert_eq!(ctrl.view().results(), "<ul><li>a&b c</li></ul>");
}

#[tokio::test]
async fn test_server_error_keeps_previous_results() {
    let server = StubServer::start().await;
    let transport = HttpTransport::new(&server.base_url()).unwrap();
    let view = MemoryView::with_query(FAILING_QUERY);
    view.set_results("<p>previous</p>");
    let ctrl = SearchController::new(view, transport);

    let outcome = ctrl.on_trigger().await;

    assert_eq!(outcome, SearchOutcome::Failed(SearchError::Status { status: 500 }));
    assert_eq!(ctrl.view().results(), "<p>previous</p>");
    assert_eq!(
        ctrl.view().events(),
        vec![
            ViewEvent::Trigger(false),
            ViewEvent::Busy(true),
            ViewEvent::Trigger(true),
            ViewEvent::Busy(false),
        ]
    );
}

#[tokio::test]
async fn test_transport_failure_returns_to_idle() {
    let transport = HttpTransport::new(&closed_base_url().await).unwrap();
    let view = MemoryView::with_query("cats");
    view.set_results("<p>previous</p>");
    let ctrl = SearchController::new(view, transport);

    let outcome = ctrl.on_trigger().await;

    assert!(matches!(outcome, SearchOutcome::Failed(SearchError::Transport(_))));
    assert_eq!(ctrl.view().results(), "<p>previous</p>");
    assert!(ctrl.view().trigger_enabled());
    assert!(!ctrl.view().busy());
    assert!(!ctrl.is_in_flight());
}

#[tokio::test]
async fn test_blank_enter_sends_nothing() {
    let server = StubServer::start().await;
    let transport = HttpTransport::new(&server.base_url()).unwrap();
    let ctrl = SearchController::new(MemoryView::with_query("   "), transport);

    assert_eq!(ctrl.on_key_down(SUBMIT_KEY).await, None);
    assert!(server.requests().is_empty());
    assert!(ctrl.view().results().is_empty());
}
