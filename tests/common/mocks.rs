use ask_client::{
    Error, Result,
    ask::{Answer, AskClient, Question},
    view::ViewPort,
};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Everything the submitter did to the view, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Output(String),
    Loading(bool),
}

/// In-memory view that records every update
#[derive(Debug, Default)]
pub struct RecordingView {
    pub input: Mutex<String>,
    pub output: Mutex<String>,
    pub loading: Mutex<bool>,
    pub events: Mutex<Vec<ViewEvent>>,
}

impl RecordingView {
    pub fn new(input: &str) -> Arc<Self> {
        let view = Self::default();
        *view.input.lock().unwrap() = input.to_string();
        Arc::new(view)
    }

    pub fn set_input(&self, input: &str) {
        *self.input.lock().unwrap() = input.to_string();
    }

    pub fn output(&self) -> String {
        self.output.lock().unwrap().clone()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.lock().unwrap()
    }

    pub fn events(&self) -> Vec<ViewEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ViewPort for RecordingView {
    fn input_text(&self) -> String {
        self.input.lock().unwrap().clone()
    }

    fn set_output_text(&self, text: &str) {
        *self.output.lock().unwrap() = text.to_string();
        self.events
            .lock()
            .unwrap()
            .push(ViewEvent::Output(text.to_string()));
    }

    fn set_loading(&self, loading: bool) {
        *self.loading.lock().unwrap() = loading;
        self.events.lock().unwrap().push(ViewEvent::Loading(loading));
    }
}

/// What the mock client does for one call
#[derive(Debug, Clone)]
pub enum MockReply {
    Answer(String),
    Fail(u16),
    /// Answers once the gate is notified.
    Gated(Arc<Notify>, String),
    /// Never completes.
    Hang,
}

/// Mock ask client with a queue of scripted replies
#[derive(Debug, Default)]
pub struct MockAskClient {
    pub replies: Mutex<VecDeque<MockReply>>,
    pub questions: Mutex<Vec<String>>,
}

impl MockAskClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies(self, replies: Vec<MockReply>) -> Self {
        *self.replies.lock().unwrap() = replies.into();
        self
    }

    pub fn questions(&self) -> Vec<String> {
        self.questions.lock().unwrap().clone()
    }
}

#[async_trait]
impl AskClient for MockAskClient {
    async fn ask(&self, question: &Question) -> Result<Answer> {
        self.questions
            .lock()
            .unwrap()
            .push(question.as_str().to_string());

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(MockReply::Answer(text)) => Ok(Answer::new(text)),
            Some(MockReply::Fail(status)) => Err(Error::Status {
                status,
                body: "mock failure".to_string(),
            }),
            Some(MockReply::Gated(gate, text)) => {
                gate.notified().await;
                Ok(Answer::new(text))
            }
            Some(MockReply::Hang) => std::future::pending().await,
            None => Err(Error::decode("No more mock replies available")),
        }
    }
}
