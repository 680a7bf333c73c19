use crate::{Result, submitter::QuestionSubmitter, view::TerminalView};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::info;

pub const PROMPT: &str = "Your question (or type 'exit'): ";

/// Interactive loop: one question per line until `exit` or end of input.
/// Returns how many lines were submitted.
pub async fn run<R, W>(
    submitter: &QuestionSubmitter,
    view: &TerminalView,
    reader: R,
    mut prompt: W,
) -> Result<usize>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Ready to answer questions");

    let mut lines = reader.lines();
    let mut submitted = 0;

    loop {
        prompt.write_all(PROMPT.as_bytes()).await?;
        prompt.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if is_exit(&line) {
            prompt.write_all(b"Exiting.\n").await?;
            prompt.flush().await?;
            break;
        }

        view.set_input(line);
        submitter.submit().await;
        submitted += 1;
    }

    info!("Leaving interactive mode after {} submissions", submitted);
    Ok(submitted)
}

fn is_exit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("exit")
}
