mod terminal;

pub use terminal::TerminalView;

/// The three UI surfaces the submitter touches: the question input, the
/// output area and the loading indicator.
pub trait ViewPort: Send + Sync {
    fn input_text(&self) -> String;
    fn set_output_text(&self, text: &str);
    fn set_loading(&self, loading: bool);
}
