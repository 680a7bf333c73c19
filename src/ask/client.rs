use super::types::*;
use crate::{Error, Result, config::ClientConfig};
use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderValue};
use std::time::Duration;
use tracing::debug;

#[async_trait]
pub trait AskClient: Send + Sync {
    async fn ask(&self, question: &Question) -> Result<Answer>;
}

pub struct HttpAskClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAskClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout_ms) = config.timeout_ms {
            builder = builder.timeout(Duration::from_millis(timeout_ms));
        }
        let client = builder.build()?;

        let endpoint = format!(
            "{}{}",
            config.base_url.trim_end_matches('/'),
            config.ask_path
        );
        debug!("Creating ask client for: {}", endpoint);

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AskClient for HttpAskClient {
    async fn ask(&self, question: &Question) -> Result<Answer> {
        debug!("POST {} ({} chars)", self.endpoint, question.as_str().len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(&AskRequest::from(question))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                body,
            });
        }

        let answer = AskResponse::from_body(&body)?.into_answer();
        debug!("Received answer ({} chars)", answer.as_str().len());
        Ok(answer)
    }
}
