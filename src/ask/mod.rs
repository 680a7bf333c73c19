mod client;
mod types;

pub use client::{AskClient, HttpAskClient};
pub use types::{Answer, AskRequest, AskResponse, Question};
