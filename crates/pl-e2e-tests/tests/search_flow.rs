//! E2E tests for the search → report flow through the real HTTP store.

mod helpers;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use helpers::{SEARCH_PATH, TestHarness};
use pl_log_tools::tools::report_findings::REPORT_ACK;
use pl_log_tools::types::NO_RESULTS;

/// Full investigation: one search, then exactly one report.
#[tokio::test]
async fn e2e_search_then_report() {
    let h = TestHarness::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "OOMKilled AND _time:30m"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            [
                r#"{"_time":"2025-01-15T12:00:09Z","_msg":"OOMKilled","kubernetes.pod_name":"cart-66d4"}"#,
                r#"{"_time":"2025-01-15T12:00:11Z","_msg":"OOMKilled","kubernetes":{"pod_name":"cart-66d5"}}"#,
            ]
            .join("\n"),
        ))
        .expect(1)
        .mount(&h.server)
        .await;

    let logs = h
        .call(
            "fetch_k8s_logs",
            json!({"search_query": "OOMKilled", "lookback_minutes": 30}),
        )
        .await;
    assert_eq!(
        logs,
        "[2025-01-15T12:00:09Z] [cart-66d4] OOMKilled\n[2025-01-15T12:00:11Z] [cart-66d5] OOMKilled"
    );

    let ack = h
        .call("report_findings", json!({"summary": "cart pods OOMKilled"}))
        .await;
    assert_eq!(ack, REPORT_ACK);
}

/// Default lookback comes from the store config when the agent omits it.
#[tokio::test]
async fn e2e_default_lookback_sent() {
    let h = TestHarness::start().await;
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("query", "checkout AND _time:60m"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .expect(1)
        .mount(&h.server)
        .await;

    let out = h.call("fetch_k8s_logs", json!({"search_query": "checkout"})).await;
    assert_eq!(out, NO_RESULTS);
}

/// Malformed lines are dropped, valid ones keep their order, and the
/// result is capped at 50 lines.
#[tokio::test]
async fn e2e_mixed_body_truncated() {
    let h = TestHarness::start().await;
    let body: Vec<String> = (0..80)
        .flat_map(|i| {
            [
                format!(r#"{{"_time":"t{i}","_msg":"msg {i}"}}"#),
                "{not json".to_string(),
                String::new(),
            ]
        })
        .collect();
    h.respond_with_body(body.join("\n")).await;

    let out = h.call("fetch_k8s_logs", json!({"search_query": "msg"})).await;
    let lines: Vec<_> = out.lines().collect();
    assert_eq!(lines.len(), 50);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(*line, format!("[t{i}] [unknown] msg {i}"));
    }
}
