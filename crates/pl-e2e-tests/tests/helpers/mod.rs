//! Shared harness: a wiremock VictoriaLogs plus the real store and registry.

#![allow(dead_code)]

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use pl_agent::registry::ToolRegistry;
use pl_log_tools::{StoreConfig, VictoriaLogsStore};

pub const SEARCH_PATH: &str = "/select/logsql/query";

/// Mock log store server wired to a real HTTP store and tool registry.
pub struct TestHarness {
    pub server: MockServer,
    pub store: VictoriaLogsStore,
    pub registry: ToolRegistry,
}

impl TestHarness {
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        let config = StoreConfig {
            timeout_secs: 2,
            ..StoreConfig::new(server.uri())
        };
        let store = VictoriaLogsStore::new(&config).unwrap();
        Self {
            server,
            store,
            registry: ToolRegistry::from_store_config(&config),
        }
    }

    /// Answer every search with this body.
    pub async fn respond_with_body(&self, body: impl Into<String>) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string(body.into()))
            .mount(&self.server)
            .await;
    }

    /// Answer every search with this status.
    pub async fn respond_with_status(&self, code: u16) {
        Mock::given(method("GET"))
            .and(path(SEARCH_PATH))
            .respond_with(ResponseTemplate::new(code))
            .mount(&self.server)
            .await;
    }

    /// Call a tool through the registry and return its text.
    pub async fn call(&self, tool: &str, args: serde_json::Value) -> String {
        self.registry.execute(tool, args, &self.store).await.output
    }
}
