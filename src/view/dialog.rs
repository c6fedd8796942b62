//! Blocking confirmation dialogs
//!
//! A destructive action builds a [`ConfirmRequest`] and awaits a
//! [`Confirmer`]'s answer before touching the backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

/// The user's answer to a confirmation dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confirmation {
    Confirmed,
    Cancelled,
}

/// Visual weight of a dialog button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Default,
    Primary,
    Danger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogButton {
    pub result: Confirmation,
    pub label: String,
    pub style: ButtonStyle,
}

impl DialogButton {
    pub fn cancel() -> Self {
        Self {
            result: Confirmation::Cancelled,
            label: "Cancel".to_string(),
            style: ButtonStyle::Default,
        }
    }

    pub fn confirm(label: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            result: Confirmation::Confirmed,
            label: label.into(),
            style,
        }
    }
}

/// Title, body and buttons of a message box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmRequest {
    pub title: String,
    pub message: String,
    pub buttons: Vec<DialogButton>,
}

impl ConfirmRequest {
    /// Dialog with a Cancel button followed by the confirming one
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: impl Into<String>,
        style: ButtonStyle,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            buttons: vec![DialogButton::cancel(), DialogButton::confirm(confirm_label, style)],
        }
    }

    /// Label of the button that confirms, if there is one
    pub fn confirm_label(&self) -> Option<&str> {
        self.buttons
            .iter()
            .find(|button| button.result == Confirmation::Confirmed)
            .map(|button| button.label.as_str())
    }
}

/// Something that can put a dialog in front of the operator
#[async_trait]
pub trait Confirmer: Send + Sync {
    async fn confirm(&self, request: ConfirmRequest) -> Confirmation;
}

/// Answers every dialog with the same result (`--yes`, scripted runs)
#[derive(Debug, Clone, Copy)]
pub struct FixedConfirmer(pub Confirmation);

#[async_trait]
impl Confirmer for FixedConfirmer {
    async fn confirm(&self, _request: ConfirmRequest) -> Confirmation {
        self.0
    }
}

/// Plays back queued answers and remembers every dialog it was shown
///
/// Once the queue runs dry every further dialog is cancelled.
#[derive(Debug, Default)]
pub struct ScriptedConfirmer {
    answers: Mutex<Vec<Confirmation>>,
    shown: Mutex<Vec<ConfirmRequest>>,
}

impl ScriptedConfirmer {
    pub fn new(answers: Vec<Confirmation>) -> Self {
        let mut answers = answers;
        answers.reverse();
        Self {
            answers: Mutex::new(answers),
            shown: Mutex::new(Vec::new()),
        }
    }

    /// Dialogs shown so far, oldest first
    pub fn shown(&self) -> Vec<ConfirmRequest> {
        self.shown
            .lock()
            .map(|shown| shown.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, request: ConfirmRequest) -> Confirmation {
        if let Ok(mut shown) = self.shown.lock() {
            shown.push(request);
        }
        self.answers
            .lock()
            .ok()
            .and_then(|mut answers| answers.pop())
            .unwrap_or(Confirmation::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_buttons() {
        let request = ConfirmRequest::new("Delete User 1", "Sure?", "Delete!", ButtonStyle::Danger);
        assert_eq!(request.buttons.len(), 2);
        assert_eq!(request.buttons[0].label, "Cancel");
        assert_eq!(request.buttons[0].result, Confirmation::Cancelled);
        assert_eq!(request.confirm_label(), Some("Delete!"));
        assert_eq!(request.buttons[1].style, ButtonStyle::Danger);
    }

    #[tokio::test]
    async fn test_scripted_confirmer_plays_answers_in_order() {
        let confirmer = ScriptedConfirmer::new(vec![Confirmation::Confirmed, Confirmation::Cancelled]);
        let request = ConfirmRequest::new("t", "m", "OK", ButtonStyle::Primary);

        assert_eq!(confirmer.confirm(request.clone()).await, Confirmation::Confirmed);
        assert_eq!(confirmer.confirm(request.clone()).await, Confirmation::Cancelled);
        assert_eq!(confirmer.confirm(request).await, Confirmation::Cancelled);
        assert_eq!(confirmer.shown().len(), 3);
    }

    #[test]
    fn test_fixed_confirmer() {
        let confirmer = FixedConfirmer(Confirmation::Confirmed);
        let request = ConfirmRequest::new("t", "m", "OK", ButtonStyle::Primary);
        let answer = tokio_test::block_on(confirmer.confirm(request));
        assert_eq!(answer, Confirmation::Confirmed);
    }
}
