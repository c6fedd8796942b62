//! View-models behind each route
//!
//! Controllers own view state and call the backend; they never print. The
//! terminal shell renders them.

pub mod user_detail;
pub mod users_list;

pub use user_detail::UserDetailController;
pub use users_list::{BalanceEditor, UsersListController};
