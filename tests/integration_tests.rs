//! Integration tests for the dispatcher.
//!
//! Timing is checked on tokio's paused clock, so sleeps complete instantly but
//! the observed instants are exact.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::Instant;

use chatrelay::{
    ChatMessage, Dispatcher, ErrorKind, ScriptedTransport, TransportFailure,
    MIN_DELAY_BETWEEN_REQUESTS, RATE_LIMIT_COOLDOWN,
};

fn message(text: &str) -> ChatMessage {
    ChatMessage::new(text).expect("non-empty message")
}

fn setup(replies: Vec<Result<String, TransportFailure>>) -> (Arc<ScriptedTransport>, Dispatcher) {
    let transport = Arc::new(ScriptedTransport::new(replies));
    let dispatcher = Dispatcher::new(transport.clone());
    (transport, dispatcher)
}

#[tokio::test(start_paused = true)]
async fn test_first_call_is_not_delayed() {
    let (transport, dispatcher) = setup(vec![Ok("hello".into())]);
    let start = Instant::now();

    let response = dispatcher.send(&message("Hi")).await.expect("send failed");

    assert_eq!(response.text(), "hello");
    assert_eq!(transport.requests().await[0].issued_at, start);
}

#[tokio::test(start_paused = true)]
async fn test_immediate_second_call_waits_for_spacing() {
    let (transport, dispatcher) = setup(vec![Ok("Hello there".into()), Ok("again".into())]);

    let first = dispatcher.send(&message("Hi")).await.expect("first send");
    let second = dispatcher.send(&message("Hi")).await.expect("second send");

    assert_eq!(first.text(), "Hello there");
    assert_eq!(second.text(), "again");

    let requests = transport.requests().await;
    assert_eq!(
        requests[1].issued_at - requests[0].issued_at,
        MIN_DELAY_BETWEEN_REQUESTS
    );
}

#[tokio::test(start_paused = true)]
async fn test_spacing_holds_across_failures() {
    let (transport, dispatcher) = setup(vec![
        Err(TransportFailure::status(500)),
        Err(TransportFailure::NoResponse("reset".into())),
        Ok("fine".into()),
        Err(TransportFailure::status(401)),
    ]);

    for _ in 0..4 {
        let _ = dispatcher.send(&message("ping")).await;
    }

    let requests = transport.requests().await;
    assert_eq!(requests.len(), 4);
    for pair in requests.windows(2) {
        assert!(pair[1].issued_at - pair[0].issued_at >= MIN_DELAY_BETWEEN_REQUESTS);
    }
}

#[tokio::test(start_paused = true)]
async fn test_slow_callers_are_not_delayed() {
    let (transport, dispatcher) = setup(vec![Ok("a".into()), Ok("b".into())]);

    dispatcher.send(&message("one")).await.expect("first send");
    tokio::time::sleep(Duration::from_secs(5)).await;
    let before_second = Instant::now();
    dispatcher.send(&message("two")).await.expect("second send");

    assert_eq!(transport.requests().await[1].issued_at, before_second);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_then_success_returns_retry_response() {
    let (transport, dispatcher) = setup(vec![
        Err(TransportFailure::status(429)),
        Ok("ok".into()),
    ]);
    let start = Instant::now();

    let response = dispatcher.send(&message("Hi")).await.expect("retry should succeed");

    assert_eq!(response.text(), "ok");
    assert!(start.elapsed() >= RATE_LIMIT_COOLDOWN);
    assert_eq!(transport.requests().await.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_twice_raises_persisted_error() {
    let (transport, dispatcher) = setup(vec![
        Err(TransportFailure::status(429)),
        Err(TransportFailure::status(429)),
        Ok("never".into()),
    ]);

    let err = dispatcher.send(&message("Hi")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RateLimitPersisted);
    assert_eq!(
        err.to_string(),
        "Rate limit still exceeded. Please try again in a few minutes."
    );
    assert_eq!(transport.requests().await.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_retry_network_failure_still_reports_rate_limit() {
    let (_, dispatcher) = setup(vec![
        Err(TransportFailure::status(429)),
        Err(TransportFailure::NoResponse("connection reset".into())),
    ]);

    let err = dispatcher.send(&message("Hi")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::RateLimitPersisted);
}

#[tokio::test(start_paused = true)]
async fn test_invalid_credential_is_never_retried() {
    let (transport, dispatcher) = setup(vec![
        Err(TransportFailure::status(401)),
        Ok("never".into()),
    ]);
    let start = Instant::now();

    let err = dispatcher.send(&message("Hi")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidCredential);
    assert_eq!(transport.requests().await.len(), 1);
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn test_missing_response_is_network_unreachable() {
    let (_, dispatcher) = setup(vec![Err(TransportFailure::NoResponse(
        "connection refused".into(),
    ))]);

    let err = dispatcher.send(&message("Hi")).await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NetworkUnreachable);
}

#[tokio::test(start_paused = true)]
async fn test_shared_dispatcher_keeps_spacing_under_concurrency() {
    let transport = Arc::new(ScriptedTransport::new(
        (0..4).map(|i| Ok(format!("reply {i}"))).collect::<Vec<_>>(),
    ));
    let dispatcher = Arc::new(Dispatcher::new(transport.clone()));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let dispatcher = dispatcher.clone();
            tokio::spawn(async move { dispatcher.send(&message(&format!("m{i}"))).await })
        })
        .collect();
    for handle in handles {
        handle.await.expect("task panicked").expect("send failed");
    }

    let mut issued: Vec<Instant> = transport
        .requests()
        .await
        .into_iter()
        .map(|r| r.issued_at)
        .collect();
    issued.sort();
    for pair in issued.windows(2) {
        assert!(pair[1] - pair[0] >= MIN_DELAY_BETWEEN_REQUESTS);
    }
}
