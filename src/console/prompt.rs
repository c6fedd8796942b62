//! Line input shared by the shell loop and its confirmation dialogs

use crate::view::{ConfirmRequest, Confirmation, Confirmer};
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tokio::sync::Mutex;
use tracing::warn;

type BoxedReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Source of operator input lines
pub struct PromptInput {
    lines: Mutex<Lines<BoxedReader>>,
}

impl PromptInput {
    pub fn stdin() -> Self {
        Self::from_reader(BufReader::new(tokio::io::stdin()))
    }

    pub fn from_reader(reader: impl AsyncBufRead + Unpin + Send + 'static) -> Self {
        let reader: BoxedReader = Box::new(reader);
        Self {
            lines: Mutex::new(reader.lines()),
        }
    }

    /// Next line, or `None` once input is closed
    pub async fn next_line(&self) -> std::io::Result<Option<String>> {
        self.lines.lock().await.next_line().await
    }
}

/// Asks the operator on the terminal
pub struct PromptConfirmer {
    input: Arc<PromptInput>,
}

impl PromptConfirmer {
    pub fn new(input: Arc<PromptInput>) -> Self {
        Self { input }
    }
}

/// Whether a typed answer accepts the dialog
pub fn is_confirmation(answer: &str, request: &ConfirmRequest) -> bool {
    let answer = answer.trim().to_lowercase();
    if matches!(answer.as_str(), "y" | "yes") {
        return true;
    }
    request
        .confirm_label()
        .map(|label| label.trim_end_matches('!').to_lowercase() == answer.trim_end_matches('!'))
        .unwrap_or(false)
}

pub fn dialog_text(request: &ConfirmRequest) -> String {
    let buttons: Vec<String> = request
        .buttons
        .iter()
        .map(|button| format!("[{}]", button.label))
        .collect();
    format!(
        "== {} ==\n{}\n{} (y/N) ",
        request.title,
        request.message,
        buttons.join(" ")
    )
}

#[async_trait]
impl Confirmer for PromptConfirmer {
    async fn confirm(&self, request: ConfirmRequest) -> Confirmation {
        print!("{}", dialog_text(&request));
        let _ = std::io::stdout().flush();

        match self.input.next_line().await {
            Ok(Some(answer)) if is_confirmation(&answer, &request) => Confirmation::Confirmed,
            Ok(_) => Confirmation::Cancelled,
            Err(e) => {
                warn!("Failed to read confirmation: {}", e);
                Confirmation::Cancelled
            }
        }
    }
}
