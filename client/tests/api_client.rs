//! HTTP adapter and end-to-end pipeline tests against an in-process axum backend.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_channel::Receiver;
use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use banking_client::core::service::{FeeQuoteService, SubmissionService};
use banking_client::presentation::{present, ResultView};
use banking_client::{flows, AppError, ApiClient, ClientConfig, PipelineEvent, PipelineState};
use shared::dto::fees::FeeQuoteRequest;

#[derive(Debug, Clone)]
struct Recorded {
    path: &'static str,
    bearer: Option<String>,
    body: Value,
}

#[derive(Clone, Default)]
struct Backend {
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Backend {
    fn record(&self, path: &'static str, headers: &HeaderMap, body: &Value) {
        self.requests.lock().push(Recorded {
            path,
            bearer: bearer_token(headers),
            body: body.clone(),
        });
    }

    fn last(&self, path: &str) -> Option<Recorded> {
        self.requests
            .lock()
            .iter()
            .rev()
            .find(|r| r.path == path)
            .cloned()
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    value.strip_prefix("Bearer ").map(str::to_string)
}

async fn calculate_fees(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    backend.record("fees/calculate", &headers, &body);
    if body["amount"] == "999" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Amount exceeds daily limit" })),
        )
            .into_response();
    }
    Json(json!({ "comm": "USD 1.50", "stamp": "USD 0.50", "ta": 0.25, "ca": null })).into_response()
}

async fn own_transfer(
    State(backend): State<Backend>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    backend.record("transfers/own", &headers, &body);
    if body["amount"] == "13.13" {
        return Json(json!({ "status": "error", "msg": "Insufficient funds" })).into_response();
    }
    Json(json!({
        "status": "success",
        "msg": "Transfer completed",
        "confirmationNumber": "CNF-900",
        "postingDate": "2026-10-16"
    }))
    .into_response()
}

async fn broken() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response()
}

async fn spawn_backend() -> (SocketAddr, Backend, oneshot::Sender<()>) {
    let backend = Backend::default();
    let router = Router::new()
        .route("/api/fees/calculate", post(calculate_fees))
        .route("/api/transfers/own", post(own_transfer))
        .route("/api/broken", post(broken))
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock backend");
    let addr = listener.local_addr().expect("mock backend address");
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let server = axum::serve(listener, router).with_graceful_shutdown(async move {
            let _ = rx.await;
        });
        if let Err(err) = server.await {
            eprintln!("mock backend error: {err}");
        }
    });

    (addr, backend, tx)
}

fn config_for(addr: SocketAddr) -> ClientConfig {
    ClientConfig {
        api_base_url: format!("http://{}", addr),
        http_timeout: Duration::from_secs(5),
        ..ClientConfig::default()
    }
}

fn fee_request(amount: &str) -> FeeQuoteRequest {
    FeeQuoteRequest {
        from: "1001".to_string(),
        to: "1002".to_string(),
        amount: amount.to_string(),
        currency_code: "USD".to_string(),
        code: "ACC_OWN_XFR".to_string(),
        pay_now: "Y".to_string(),
        to_currency_code: None,
        acc_no: None,
    }
}

async fn next_event(events: &Receiver<PipelineEvent>) -> PipelineEvent {
    tokio::time::timeout(Duration::from_secs(5), events.recv())
        .await
        .expect("no pipeline event within 5s")
        .expect("event channel closed")
}

#[tokio::test]
async fn fee_quote_decodes_mixed_components_and_sends_token() {
    let (addr, backend, _shutdown) = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr))
        .unwrap()
        .with_session_token("tok-123");

    let quote = api.calculate_fees(&fee_request("100.00")).await.unwrap();
    assert_eq!(quote.comm, "USD 1.50");
    assert_eq!(quote.ta, "0.25");
    assert_eq!(quote.ca, "");

    let recorded = backend.last("fees/calculate").unwrap();
    assert_eq!(recorded.bearer.as_deref(), Some("tok-123"));
    assert_eq!(recorded.body["currencyCode"], "USD");
    assert_eq!(recorded.body["payNow"], "Y");
    assert!(recorded.body.get("accNo").is_none());
    assert!(recorded.body.get("toCurrencyCode").is_none());
}

#[tokio::test]
async fn error_body_becomes_api_error() {
    let (addr, _backend, _shutdown) = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr)).unwrap();

    let result = api.calculate_fees(&fee_request("999")).await;
    assert_eq!(
        result,
        Err(AppError::Api("Amount exceeds daily limit".to_string()))
    );
}

#[tokio::test]
async fn submission_keeps_receipt_and_reports_status_failures() {
    let (addr, backend, _shutdown) = spawn_backend().await;
    let api = ApiClient::new(&config_for(addr)).unwrap();

    let payload = [
        ("from".to_string(), json!("1001")),
        ("amount".to_string(), json!("10.00")),
    ]
    .into_iter()
    .collect();
    let response = api.submitter("transfers/own").submit(&payload).await.unwrap();
    assert!(response.is_success());
    assert_eq!(response.receipt["confirmationNumber"], "CNF-900");
    assert_eq!(response.receipt["postingDate"], "2026-10-16");
    assert!(backend.last("transfers/own").unwrap().bearer.is_none());

    let result = api.submitter("broken").submit(&payload).await;
    assert_eq!(
        result.unwrap_err(),
        AppError::Api("Request failed with status 500".to_string())
    );
}

#[tokio::test]
async fn unreachable_backend_is_a_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let api = ApiClient::new(&config_for(addr)).unwrap();
    let result = api.calculate_fees(&fee_request("1")).await;
    assert!(matches!(result, Err(AppError::Api(msg)) if msg.starts_with("Network error")));
}

#[tokio::test]
async fn own_transfer_runs_end_to_end_over_http() {
    let (addr, backend, _shutdown) = spawn_backend().await;
    let config = config_for(addr);
    let api = ApiClient::new(&config).unwrap();
    let flow = flows::own_account_transfer(&config);
    let (pipeline, events) = flow.pipeline(&api).unwrap();

    let mut form = flow.form_state();
    form.set("fromAccount", "0012345678");
    form.set("toAccount", "0087654321");
    form.set("amount", "100.00");
    form.set("description", "rent");
    form.submit(|draft| {
        pipeline.open_with_draft(draft).unwrap();
    })
    .unwrap();

    assert!(matches!(next_event(&events).await, PipelineEvent::FeesLoading { .. }));
    let PipelineEvent::ReviewReady(review) = next_event(&events).await else {
        panic!("expected review");
    };
    assert_eq!(review.fees.as_ref().map(|f| f.total.as_str()), Some("2.25"));

    let quote = backend.last("fees/calculate").unwrap();
    assert_eq!(quote.body["from"], "0012345678");
    assert_eq!(quote.body["code"], "ACC_OWN_XFR");

    pipeline.confirm().unwrap();
    assert!(matches!(next_event(&events).await, PipelineEvent::Submitting { .. }));
    let event = next_event(&events).await;
    assert_eq!(pipeline.state(), PipelineState::Idle);

    let submitted = backend.last("transfers/own").unwrap().body;
    assert_eq!(submitted["from"], "0012345678");
    assert_eq!(submitted["to"], "0087654321");
    assert_eq!(submitted["desc"], "rent");
    assert_eq!(submitted["payNow"], "Y");
    assert_eq!(submitted["comm"], "USD 1.50");
    assert_eq!(submitted["tax"], "0.25");
    assert_eq!(submitted["tca"], "");
    assert!(submitted.get("fromAccount").is_none());

    let Some(ResultView::Success(summary)) = present(&event) else {
        panic!("expected a success summary, got {:?}", event);
    };
    let lines = summary.lines();
    assert!(lines.contains(&"Confirmation number: CNF-900".to_string()));
    assert!(lines.contains(&"From account: ******5678".to_string()));
}

#[tokio::test]
async fn business_failure_returns_to_review_over_http() {
    let (addr, _backend, _shutdown) = spawn_backend().await;
    let config = config_for(addr);
    let api = ApiClient::new(&config).unwrap();
    let flow = flows::own_account_transfer(&config);
    let (pipeline, events) = flow.pipeline(&api).unwrap();

    let mut form = flow.form_state();
    form.set("fromAccount", "1001");
    form.set("toAccount", "1002");
    form.set("amount", "13.13");
    form.submit(|draft| {
        pipeline.open_with_draft(draft).unwrap();
    })
    .unwrap();

    next_event(&events).await;
    next_event(&events).await;
    pipeline.confirm().unwrap();
    next_event(&events).await;

    let PipelineEvent::Failed { message, .. } = next_event(&events).await else {
        panic!("expected failure");
    };
    assert_eq!(message, "Insufficient funds");
    assert_eq!(pipeline.state(), PipelineState::ReviewReady);
    let review = pipeline.review().unwrap();
    assert_eq!(review.error.as_deref(), Some("Insufficient funds"));
    assert!(review.fees.is_some());
}
