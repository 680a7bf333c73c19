use super::ViewPort;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};
use tracing::warn;

const LOADING_TEXT: &str = "Thinking...";

type SharedWriter = Mutex<Box<dyn Write + Send>>;

pub struct TerminalView {
    input: Mutex<String>,
    output: SharedWriter,
    status: SharedWriter,
    loading: Mutex<bool>,
}

impl TerminalView {
    /// Answers go to stdout, the loading indicator to stderr.
    pub fn new() -> Self {
        Self::with_writers(Box::new(io::stdout()), Box::new(io::stderr()))
    }

    pub fn with_writers(output: Box<dyn Write + Send>, status: Box<dyn Write + Send>) -> Self {
        Self {
            input: Mutex::new(String::new()),
            output: Mutex::new(output),
            status: Mutex::new(status),
            loading: Mutex::new(false),
        }
    }

    pub fn set_input(&self, text: impl Into<String>) {
        *lock(&self.input) = text.into();
    }

    pub fn is_loading(&self) -> bool {
        *lock(&self.loading)
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewPort for TerminalView {
    fn input_text(&self) -> String {
        lock(&self.input).clone()
    }

    fn set_output_text(&self, text: &str) {
        if text.is_empty() {
            return;
        }
        let mut out = lock(&self.output);
        if let Err(e) = writeln!(out, "{}", text).and_then(|_| out.flush()) {
            warn!("Failed to write answer to terminal: {}", e);
        }
    }

    fn set_loading(&self, loading: bool) {
        let mut current = lock(&self.loading);
        if *current == loading {
            return;
        }
        *current = loading;

        if loading {
            let mut status = lock(&self.status);
            if let Err(e) = writeln!(status, "{}", LOADING_TEXT).and_then(|_| status.flush()) {
                warn!("Failed to write loading indicator: {}", e);
            }
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
