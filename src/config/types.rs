use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_ask_path")]
    pub ask_path: String,
    /// No timeout when unset; the request may wait forever.
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

/// Fixed texts shown to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagesConfig {
    #[serde(default = "default_validation_message")]
    pub validation: String,
    #[serde(default = "default_error_message")]
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            ask_path: default_ask_path(),
            timeout_ms: None,
        }
    }
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            validation: default_validation_message(),
            error: default_error_message(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_ask_path() -> String {
    "/ask".to_string()
}

fn default_validation_message() -> String {
    "Please enter a question.".to_string()
}

fn default_error_message() -> String {
    "Something went wrong. Please try again.".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}
