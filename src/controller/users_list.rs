//! User list view-model
//!
//! Holds the fetched users, the filter and paging state, and the open/closed
//! state of the balance editor and the creation form. Every mutating action
//! talks to the backend, refetches the list on success, and reports the
//! result through the shared [`FlashService`].

use crate::api::ChargingApi;
use crate::config::UiSettings;
use crate::error::ConsoleError;
use crate::notify::FlashService;
use crate::types::{ActionOutcome, Amount, NewUser, User};
use crate::utils::current_timestamp;
use crate::view::{filter_users, ButtonStyle, ConfirmRequest, Confirmation, Confirmer, Pagination};
use chrono::{DateTime, Local};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Inline balance editor for one user
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceEditor {
    pub user: User,
    pub new_balance: Amount,
}

pub struct UsersListController {
    api: Arc<dyn ChargingApi>,
    flash: Arc<FlashService>,
    confirmer: Arc<dyn Confirmer>,
    users: Vec<User>,
    filtered: Vec<User>,
    query: String,
    pagination: Pagination,
    last_updated: Option<DateTime<Local>>,
    balance_editor: Option<BalanceEditor>,
    new_user: Option<NewUser>,
}

impl UsersListController {
    pub fn new(
        api: Arc<dyn ChargingApi>,
        flash: Arc<FlashService>,
        confirmer: Arc<dyn Confirmer>,
    ) -> Self {
        Self {
            api,
            flash,
            confirmer,
            users: Vec::new(),
            filtered: Vec::new(),
            query: String::new(),
            pagination: Pagination::default(),
            last_updated: None,
            balance_editor: None,
            new_user: None,
        }
    }

    /// Use the page size and button count from the configuration
    pub fn with_ui_settings(mut self, settings: &UiSettings) -> Self {
        self.pagination = Pagination::new(settings.entry_limit, settings.max_size);
        self.refresh_filtered();
        self
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Users matching the current filter query
    pub fn filtered_users(&self) -> &[User] {
        &self.filtered
    }

    /// Filtered users visible on the current page
    pub fn page_users(&self) -> &[User] {
        self.pagination.slice(&self.filtered)
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Page buttons to draw around the current page
    pub fn visible_pages(&self) -> RangeInclusive<usize> {
        self.pagination.visible_pages()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    pub fn flash(&self) -> &Arc<FlashService> {
        &self.flash
    }

    pub fn find_user(&self, msisdn: &str) -> Result<&User, ConsoleError> {
        self.users
            .iter()
            .find(|user| user.msisdn == msisdn)
            .ok_or_else(|| ConsoleError::UserNotFound {
                msisdn: msisdn.to_string(),
            })
    }

    fn refresh_filtered(&mut self) {
        self.filtered = filter_users(&self.users, &self.query);
        self.pagination.recompute(self.filtered.len());
    }

    /// Fetch the user collection
    ///
    /// A failure leaves the current list untouched and raises no banner.
    pub async fn get_users(&mut self) -> ActionOutcome {
        match self.api.list_users().await {
            Ok(users) => {
                debug!("Loaded {} users", users.len());
                self.users = users;
                self.last_updated = Some(current_timestamp());
                self.refresh_filtered();
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Failed to fetch users: {}", e);
                ActionOutcome::Failed
            }
        }
    }

    // pagination ---------------------------------------------------------------------------------

    pub fn set_entry_limit(&mut self, limit: usize) -> Result<(), ConsoleError> {
        self.pagination.set_entry_limit(limit)
    }

    pub fn set_page(&mut self, page: usize) {
        self.pagination.set_page(page);
    }

    /// Apply a new filter query; the page count follows immediately
    pub fn filter(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh_filtered();
    }

    // balance editor -----------------------------------------------------------------------------

    pub fn edit_user_balance(&mut self, user: &User) {
        self.balance_editor = Some(BalanceEditor {
            user: user.clone(),
            new_balance: user.balance,
        });
    }

    pub fn close_edit_user_balance(&mut self) {
        self.balance_editor = None;
    }

    pub fn balance_editor(&self) -> Option<&BalanceEditor> {
        self.balance_editor.as_ref()
    }

    /// Change the value typed into the open editor
    pub fn set_new_balance(&mut self, value: Amount) -> bool {
        match self.balance_editor.as_mut() {
            Some(editor) => {
                editor.new_balance = value;
                true
            }
            None => false,
        }
    }

    /// Submit the open editor
    pub async fn submit_balance_edit(&mut self) -> ActionOutcome {
        let Some(editor) = self.balance_editor.clone() else {
            return ActionOutcome::Rejected;
        };
        self.set_user_balance(&editor.user, editor.new_balance).await
    }

    pub async fn set_user_balance(&mut self, user: &User, new_balance: Amount) -> ActionOutcome {
        match self.api.set_balance(&user.msisdn, new_balance).await {
            Ok(()) => {
                info!("User {} balance set to {}", user.msisdn, new_balance);
                self.close_edit_user_balance();
                self.get_users().await;
                self.flash.success(format!(
                    "User {} balance successfully updated to {}.",
                    user.msisdn, new_balance
                ));
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Balance update for {} failed: {}", user.msisdn, e);
                self.flash
                    .error(format!("User {} balance failed to update.", user.msisdn));
                ActionOutcome::Failed
            }
        }
    }

    // reserved units -----------------------------------------------------------------------------

    pub async fn set_user_reserved(&mut self, user: &User, reserved: Amount) -> ActionOutcome {
        match self.api.set_reserved(&user.msisdn, reserved).await {
            Ok(()) => {
                info!("User {} reserved set to {}", user.msisdn, reserved);
                self.get_users().await;
                self.flash.success(format!(
                    "User {} reserved units set to {}.",
                    user.msisdn, reserved
                ));
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Reserved update for {} failed: {}", user.msisdn, e);
                self.flash.error(format!(
                    "User {} reserved units failed to update.",
                    user.msisdn
                ));
                ActionOutcome::Failed
            }
        }
    }

    // new user form ------------------------------------------------------------------------------

    pub fn show_create_new_user(&mut self) {
        self.new_user = Some(NewUser::default());
    }

    pub fn close_create_new_user(&mut self) {
        self.new_user = None;
    }

    pub fn new_user_form(&self) -> Option<&NewUser> {
        self.new_user.as_ref()
    }

    pub fn new_user_form_mut(&mut self) -> Option<&mut NewUser> {
        self.new_user.as_mut()
    }

    /// Submit the open creation form
    pub async fn submit_new_user(&mut self) -> ActionOutcome {
        let Some(user) = self.new_user.clone() else {
            return ActionOutcome::Rejected;
        };
        self.create_new_user(user).await
    }

    pub async fn create_new_user(&mut self, user: NewUser) -> ActionOutcome {
        let msisdn = user.msisdn.trim();
        if msisdn.is_empty() {
            self.flash
                .error("MSISDN value is required for creating new user.");
            return ActionOutcome::Rejected;
        }
        let balance = user.balance.unwrap_or(0.0);

        match self.api.create_user(msisdn, balance).await {
            Ok(()) => {
                info!("Created user {} with balance {}", msisdn, balance);
                self.close_create_new_user();
                self.get_users().await;
                self.flash
                    .success(format!("User {} created successfully.", msisdn));
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Creating user {} failed: {}", msisdn, e);
                self.flash.error(format!(
                    "Failure creating new user with MSISDN {}.",
                    msisdn
                ));
                ActionOutcome::Failed
            }
        }
    }

    // delete -------------------------------------------------------------------------------------

    pub fn delete_request(user: &User) -> ConfirmRequest {
        ConfirmRequest::new(
            format!("Delete User {}", user.msisdn),
            format!(
                "Are you sure you want to delete the user {}? This action cannot be undone.",
                user.msisdn
            ),
            "Delete!",
            ButtonStyle::Danger,
        )
    }

    pub async fn confirm_user_delete(&mut self, user: &User) -> ActionOutcome {
        let answer = self.confirmer.confirm(Self::delete_request(user)).await;
        if answer != Confirmation::Confirmed {
            debug!("Delete of {} cancelled", user.msisdn);
            return ActionOutcome::Cancelled;
        }

        match self.api.delete_user(&user.msisdn).await {
            Ok(()) => {
                info!("Deleted user {}", user.msisdn);
                self.get_users().await;
                self.flash
                    .success(format!("User {} deleted successfully.", user.msisdn));
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Deleting user {} failed: {}", user.msisdn, e);
                self.flash
                    .error(format!("Failed to delete User {}.", user.msisdn));
                ActionOutcome::Failed
            }
        }
    }

    // sanitize -----------------------------------------------------------------------------------

    pub fn sanitize_request(user: &User) -> ConfirmRequest {
        ConfirmRequest::new(
            format!("Sanitize User {} Balance", user.msisdn),
            format!(
                "Sanitizing balance for user {} will transfer {} units which are reserved to their current balance of {}. New balance value will be {}.",
                user.msisdn,
                user.reserved,
                user.balance,
                user.sanitized_balance()
            ),
            "Sanitize",
            ButtonStyle::Primary,
        )
    }

    pub async fn confirm_balance_sanitize(&mut self, user: &User) -> ActionOutcome {
        let answer = self.confirmer.confirm(Self::sanitize_request(user)).await;
        if answer != Confirmation::Confirmed {
            debug!("Sanitize of {} cancelled", user.msisdn);
            return ActionOutcome::Cancelled;
        }

        match self.api.sanitize(&user.msisdn).await {
            Ok(()) => {
                info!("Sanitized user {}", user.msisdn);
                self.get_users().await;
                self.flash.success(format!(
                    "User {} balance sanitized successfully.",
                    user.msisdn
                ));
                ActionOutcome::Completed
            }
            Err(e) => {
                warn!("Sanitizing user {} failed: {}", user.msisdn, e);
                self.flash.error(format!(
                    "User {} balance failed to sanitize.",
                    user.msisdn
                ));
                ActionOutcome::Failed
            }
        }
    }
}
