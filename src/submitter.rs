use crate::{
    ask::{Answer, AskClient, Question},
    config::MessagesConfig,
    view::ViewPort,
};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, error, info};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was blank; no request was made.
    Rejected,
    Answered(Answer),
    /// The request failed; the generic error message is shown.
    Failed,
    /// A newer submission started before this one finished. The view was
    /// left to the newer submission.
    Superseded,
}

/// Reads the question from the view, asks the server and renders the result.
///
/// Every accepted submission gets a generation number. Starting a new one
/// cancels the request of the previous generation, so the view only ever
/// shows the answer to the latest question.
pub struct QuestionSubmitter {
    view: Arc<dyn ViewPort>,
    client: Arc<dyn AskClient>,
    messages: MessagesConfig,
    latest: watch::Sender<u64>,
}

impl QuestionSubmitter {
    pub fn new(
        view: Arc<dyn ViewPort>,
        client: Arc<dyn AskClient>,
        messages: MessagesConfig,
    ) -> Self {
        let (latest, _) = watch::channel(0);
        Self {
            view,
            client,
            messages,
            latest,
        }
    }

    pub async fn submit(&self) -> SubmitOutcome {
        let question = match Question::parse(&self.view.input_text()) {
            Ok(question) => question,
            Err(e) => {
                debug!("Rejected submission: {}", e);
                self.view.set_output_text(&self.messages.validation);
                return SubmitOutcome::Rejected;
            }
        };

        let request_id = Uuid::new_v4();
        let mut generation = 0;
        self.latest.send_modify(|latest| {
            *latest += 1;
            generation = *latest;
            self.view.set_output_text("");
            self.view.set_loading(true);
        });
        let mut newer = self.latest.subscribe();

        info!(
            "Submitting question (request {}, generation {})",
            request_id, generation
        );

        let result = tokio::select! {
            result = self.client.ask(&question) => result,
            _ = superseded(&mut newer, generation) => {
                info!("Request {} cancelled by a newer submission", request_id);
                return SubmitOutcome::Superseded;
            }
        };

        // Render under the channel lock so a submission starting right now
        // cannot interleave with these view updates.
        let mut outcome = SubmitOutcome::Superseded;
        self.latest.send_if_modified(|latest| {
            if *latest != generation {
                return false;
            }
            self.view.set_loading(false);
            outcome = match &result {
                Ok(answer) => {
                    self.view.set_output_text(answer.as_str());
                    SubmitOutcome::Answered(answer.clone())
                }
                Err(_) => {
                    self.view.set_output_text(&self.messages.error);
                    SubmitOutcome::Failed
                }
            };
            false
        });

        match (&outcome, result) {
            (SubmitOutcome::Answered(_), _) => {
                info!("Request {} answered", request_id);
            }
            (SubmitOutcome::Failed, Err(e)) => {
                error!("Request {} failed: {}", request_id, e);
            }
            _ => {
                info!("Request {} finished after a newer submission", request_id);
            }
        }

        outcome
    }
}

async fn superseded(newer: &mut watch::Receiver<u64>, generation: u64) {
    loop {
        if *newer.borrow_and_update() != generation {
            return;
        }
        if newer.changed().await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}
