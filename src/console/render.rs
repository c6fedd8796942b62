//! Plain-text rendering of the console views

use crate::controller::{UserDetailController, UsersListController};
use crate::routing::Route;
use crate::types::{Flash, FlashKind, User};
use crate::view::Pagination;
use std::fmt::Write;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn banner(flash: &Flash) -> String {
    match flash.kind {
        FlashKind::Success => format!("[ok] {}", flash.message),
        FlashKind::Error => format!("[error] {}", flash.message),
    }
}

pub fn user_table(users: &[User]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<20} {:>12} {:>12}  {}",
        "MSISDN", "BALANCE", "RESERVED", "STATUS"
    );
    if users.is_empty() {
        out.push_str("(no users)\n");
        return out;
    }
    for user in users {
        let _ = writeln!(
            out,
            "{:<20} {:>12} {:>12}  {}",
            user.msisdn,
            user.balance,
            user.reserved,
            user.status.as_deref().unwrap_or("-")
        );
    }
    out
}

/// Page buttons, e.g. `« 1 [2] 3 »  page 2/3, 10 per page`
pub fn pager(pagination: &Pagination) -> String {
    if pagination.page_count() == 0 {
        return format!("no pages, {} per page", pagination.entry_limit());
    }

    let mut out = String::new();
    out.push_str(if pagination.has_previous() { "« " } else { "  " });
    for page in pagination.visible_pages() {
        if page == pagination.current_page() {
            let _ = write!(out, "[{}] ", page);
        } else {
            let _ = write!(out, "{} ", page);
        }
    }
    out.push_str(if pagination.has_next() { "»" } else { " " });
    let _ = write!(
        out,
        "  page {}/{}, {} per page",
        pagination.current_page(),
        pagination.page_count(),
        pagination.entry_limit()
    );
    out
}

pub fn users_view(route: &Route, list: &UsersListController) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== {} ({}) ==", route.title(), route.path());

    if let Some(flash) = list.flash().current() {
        let _ = writeln!(out, "{}", banner(&flash));
    }
    if !list.query().is_empty() {
        let _ = writeln!(
            out,
            "filter: \"{}\" ({} of {} users)",
            list.query(),
            list.filtered_users().len(),
            list.users().len()
        );
    }

    out.push_str(&user_table(list.page_users()));
    let _ = writeln!(out, "{}", pager(list.pagination()));

    if let Some(updated) = list.last_updated() {
        let _ = writeln!(out, "Last updated: {}", updated.format(TIMESTAMP_FORMAT));
    }
    if let Some(editor) = list.balance_editor() {
        let _ = writeln!(
            out,
            "Editing balance of {}: {} -> {} ('value N', 'save' or 'cancel')",
            editor.user.msisdn, editor.user.balance, editor.new_balance
        );
    }
    if list.new_user_form().is_some() {
        let _ = writeln!(
            out,
            "New user form open ('create MSISDN [BALANCE]' or 'cancel')"
        );
    }
    out
}

pub fn detail_view(detail: &UserDetailController, list: &UsersListController) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== User {} ==", detail.user_id());
    if let Some(flash) = list.flash().current() {
        let _ = writeln!(out, "{}", banner(&flash));
    }
    match detail.find_in(list.users()) {
        Some(user) => out.push_str(&user_table(std::slice::from_ref(user))),
        None => {
            let _ = writeln!(out, "No loaded user with MSISDN {}", detail.user_id());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        let flash = Flash {
            kind: FlashKind::Error,
            message: "Failed to delete User 1.".to_string(),
        };
        assert_eq!(banner(&flash), "[error] Failed to delete User 1.");
    }

    #[test]
    fn test_user_table() {
        let table = user_table(&[User::new("123", 10.0, 2.0)]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("MSISDN"));
        assert!(lines[1].starts_with("123"));
        assert!(lines[1].ends_with("-"));

        assert!(user_table(&[]).contains("(no users)"));
    }

    #[test]
    fn test_pager() {
        let mut pagination = Pagination::default();
        pagination.recompute(25);
        pagination.set_page(2);
        assert_eq!(pager(&pagination), "« 1 [2] 3 »  page 2/3, 10 per page");

        pagination.recompute(0);
        assert_eq!(pager(&pagination), "no pages, 10 per page");
    }
}
