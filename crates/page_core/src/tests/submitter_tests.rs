use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use shared::error::ApiError;
use tokio::{net::TcpListener, sync::Mutex};

use super::*;

#[derive(Clone, Copy)]
enum Reply {
    Accept,
    Decline,
    MismatchedId,
    RateLimited,
}

#[derive(Clone)]
struct ServerState {
    reply: Reply,
    received: Arc<Mutex<Vec<ContactRequest>>>,
}

async fn handle_contact(
    State(state): State<ServerState>,
    Json(request): Json<ContactRequest>,
) -> Result<Json<ContactReceipt>, (StatusCode, Json<ApiError>)> {
    state.received.lock().await.push(request.clone());
    match state.reply {
        Reply::Accept => Ok(Json(ContactReceipt {
            request_id: request.request_id,
            accepted: true,
            note: None,
        })),
        Reply::Decline => Ok(Json(ContactReceipt {
            request_id: request.request_id,
            accepted: false,
            note: Some("inbox closed".to_string()),
        })),
        Reply::MismatchedId => Ok(Json(ContactReceipt {
            request_id: ContactRequest::from_fields(&ContactFields::default()).request_id,
            accepted: true,
            note: None,
        })),
        Reply::RateLimited => Err((
            StatusCode::TOO_MANY_REQUESTS,
            Json(ApiError::new(ErrorCode::RateLimited, "slow down")),
        )),
    }
}

async fn spawn_contact_server(
    reply: Reply,
) -> anyhow::Result<(String, Arc<Mutex<Vec<ContactRequest>>>)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let received = Arc::new(Mutex::new(Vec::new()));
    let state = ServerState {
        reply,
        received: received.clone(),
    };
    let app = Router::new()
        .route("/api/contact", post(handle_contact))
        .with_state(state);
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}/api/contact"), received))
}

fn jane() -> ContactFields {
    ContactFields::new("Jane", "jane@x.com", "Hi")
}

#[tokio::test]
async fn http_submitter_posts_fields_and_returns_receipt() {
    let (endpoint, received) = spawn_contact_server(Reply::Accept).await.expect("server");
    let submitter = HttpContactSubmitter::new(&endpoint).expect("submitter");

    let receipt = submitter.submit(&jane()).await.expect("accepted");

    let received = received.lock().await;
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].name, "Jane");
    assert_eq!(received[0].email, "jane@x.com");
    assert_eq!(received[0].message, "Hi");
    assert_eq!(receipt.request_id, received[0].request_id);
    assert!(receipt.accepted);
}

#[tokio::test]
async fn http_submitter_maps_api_error_body() {
    let (endpoint, _) = spawn_contact_server(Reply::RateLimited).await.expect("server");
    let submitter = HttpContactSubmitter::new(&endpoint).expect("submitter");

    let err = submitter.submit(&jane()).await.expect_err("rate limited");
    assert_eq!(
        err,
        SubmitError::Rejected {
            status: 429,
            code: Some(ErrorCode::RateLimited),
            message: "slow down".to_string(),
        }
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn http_submitter_treats_declined_receipt_as_rejection() {
    let (endpoint, _) = spawn_contact_server(Reply::Decline).await.expect("server");
    let submitter = HttpContactSubmitter::new(&endpoint).expect("submitter");

    let err = submitter.submit(&jane()).await.expect_err("declined");
    assert!(matches!(
        err,
        SubmitError::Rejected { status: 200, ref message, .. } if message == "inbox closed"
    ));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn http_submitter_rejects_mismatched_receipt() {
    let (endpoint, _) = spawn_contact_server(Reply::MismatchedId).await.expect("server");
    let submitter = HttpContactSubmitter::new(&endpoint).expect("submitter");

    let err = submitter.submit(&jane()).await.expect_err("mismatch");
    assert!(matches!(err, SubmitError::InvalidResponse(_)));
}

#[tokio::test]
async fn http_submitter_reports_unreachable_endpoint() {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let submitter =
        HttpContactSubmitter::new(&format!("http://{addr}/api/contact")).expect("submitter");
    let err = submitter.submit(&jane()).await.expect_err("unreachable");
    assert!(matches!(err, SubmitError::Transport(_)));
    assert!(err.is_retryable());
}

#[test]
fn http_submitter_validates_endpoint() {
    assert!(matches!(
        HttpContactSubmitter::new("not a url"),
        Err(SubmitError::InvalidEndpoint { .. })
    ));
    assert!(matches!(
        HttpContactSubmitter::new("ftp://example.com/contact"),
        Err(SubmitError::InvalidEndpoint { .. })
    ));
    let submitter = HttpContactSubmitter::new("https://example.com/contact").expect("https");
    assert_eq!(submitter.endpoint().host_str(), Some("example.com"));
}

#[tokio::test(start_paused = true)]
async fn delayed_submitter_resolves_after_its_delay() {
    let submitter = DelayedSubmitter::default();
    assert_eq!(submitter.delay(), Duration::from_millis(2000));

    let started = tokio::time::Instant::now();
    let receipt = submitter.submit(&jane()).await.expect("always accepts");
    assert!(started.elapsed() >= Duration::from_millis(2000));
    assert!(receipt.accepted);
}

#[test]
fn submitter_for_rejects_bad_endpoint() {
    assert!(submitter_for(Some("::nope::"), Duration::ZERO).is_err());
}

#[tokio::test(start_paused = true)]
async fn submitter_for_falls_back_to_delay_when_endpoint_blank() {
    let submitter = submitter_for(Some("   "), Duration::from_millis(250)).expect("fallback");
    let started = tokio::time::Instant::now();
    submitter.submit(&jane()).await.expect("simulated");
    assert!(started.elapsed() >= Duration::from_millis(250));
}
