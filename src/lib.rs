pub mod ask;
pub mod cli;
pub mod config;
pub mod error;
pub mod submitter;
pub mod view;

pub use error::{Error, Result};
pub use submitter::{QuestionSubmitter, SubmitOutcome};
