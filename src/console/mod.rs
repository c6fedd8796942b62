//! Terminal front end
//!
//! Parses operator commands, forwards them to the view-models, and renders
//! the resulting state as plain text.

pub mod command;
pub mod prompt;
pub mod render;
pub mod shell;

pub use command::Command;
pub use prompt::{PromptConfirmer, PromptInput};
pub use shell::{Flow, Shell};
