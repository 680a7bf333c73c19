use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Trimmed, non-empty text submitted by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Text rendered from the server's `response` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(String);

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

impl From<&Question> for AskRequest {
    fn from(question: &Question) -> Self {
        Self {
            question: question.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub response: Option<Value>,
}

impl AskResponse {
    /// Decodes a reply body. Anything other than a JSON object is rejected.
    pub fn from_body(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("body is not JSON: {}", e)))?;
        if !value.is_object() {
            return Err(Error::decode(format!(
                "expected a JSON object, got: {}",
                value
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// The `response` field is not type-checked: strings are used as-is, a
    /// missing field renders as `undefined`, anything else as JSON text.
    pub fn into_answer(self) -> Answer {
        match self.response {
            Some(Value::String(text)) => Answer(text),
            None | Some(Value::Null) => Answer("undefined".to_string()),
            Some(other) => Answer(other.to_string()),
        }
    }
}
