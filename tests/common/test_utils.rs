use ask_client::{
    QuestionSubmitter,
    ask::{AskClient, HttpAskClient},
    config::{ClientConfig, MessagesConfig},
    view::ViewPort,
};
use std::sync::Arc;
use tempfile::TempDir;
use wiremock::MockServer;

pub const VALIDATION_MESSAGE: &str = "Please enter a question.";
pub const ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Build a submitter over any view and client with the default messages
pub fn create_submitter(view: Arc<dyn ViewPort>, client: Arc<dyn AskClient>) -> QuestionSubmitter {
    QuestionSubmitter::new(view, client, MessagesConfig::default())
}

/// HTTP client pointed at a wiremock server
pub fn create_http_client(server: &MockServer) -> Arc<HttpAskClient> {
    create_http_client_for(&server.uri())
}

pub fn create_http_client_for(base_url: &str) -> Arc<HttpAskClient> {
    let config = ClientConfig {
        base_url: base_url.to_string(),
        ..ClientConfig::default()
    };
    Arc::new(HttpAskClient::new(config).expect("Failed to build HTTP client"))
}

/// URL of a local port nothing listens on
pub fn refused_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let addr = listener.local_addr().expect("No local address");
    drop(listener);
    format!("http://{}", addr)
}

/// Create a temporary directory for test files
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Write a config YAML file into `dir`
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    tokio::fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
client:
  base_url: "http://qa.internal:8000"
  ask_path: "/api/ask"
  timeout_ms: 2500

messages:
  validation: "Type something first."
  error: "The assistant is unavailable."

logs:
  level: "debug"
  file: "logs/ask.log"
"#;
