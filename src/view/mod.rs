//! View-state building blocks shared by the controllers

pub mod dialog;
pub mod filter;
pub mod pagination;

pub use dialog::{
    ButtonStyle, ConfirmRequest, Confirmation, Confirmer, DialogButton, FixedConfirmer,
    ScriptedConfirmer,
};
pub use filter::{filter_users, matches_query};
pub use pagination::Pagination;
