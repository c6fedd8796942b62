//! Interactive read-eval loop over the view-models

use super::command::{Command, HELP};
use super::prompt::PromptInput;
use super::render;
use crate::controller::{UserDetailController, UsersListController};
use crate::error::{ConsoleError, Result};
use crate::routing::Route;
use crate::types::{ActionOutcome, NewUser};
use std::io::Write;
use tracing::{debug, info};

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

pub struct Shell {
    list: UsersListController,
    route: Route,
    detail: Option<UserDetailController>,
}

impl Shell {
    pub fn new(list: UsersListController) -> Self {
        Self {
            list,
            route: Route::Users,
            detail: None,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn list(&self) -> &UsersListController {
        &self.list
    }

    pub fn detail(&self) -> Option<&UserDetailController> {
        self.detail.as_ref()
    }

    /// Open the view for `path` and return its rendering
    pub async fn navigate(&mut self, path: &str) -> String {
        self.route = Route::resolve(path);
        debug!("Navigated to {}", self.route);

        self.detail = match &self.route {
            Route::UserDetail { .. } => UserDetailController::from_params(&self.route.params()),
            _ => None,
        };

        if self.route.uses_list_controller() || self.list.users().is_empty() {
            self.list.get_users().await;
        }
        self.render()
    }

    pub fn render(&self) -> String {
        match &self.detail {
            Some(detail) => render::detail_view(detail, &self.list),
            None => render::users_view(&self.route, &self.list),
        }
    }

    /// Run one parsed command
    pub async fn execute(&mut self, command: Command) -> Flow {
        match self.dispatch(command).await {
            Ok(flow) => flow,
            Err(e) => Flow::Continue(format!("{}\n", e)),
        }
    }

    async fn dispatch(&mut self, command: Command) -> std::result::Result<Flow, ConsoleError> {
        match command {
            Command::Quit => return Ok(Flow::Quit),
            Command::Help => return Ok(Flow::Continue(format!("{}\n", HELP))),
            Command::Goto(path) => return Ok(Flow::Continue(self.navigate(&path).await)),
            Command::List => {
                self.list.get_users().await;
            }
            Command::Show => {}
            Command::Page(page) => self.list.set_page(page),
            Command::Limit(limit) => self.list.set_entry_limit(limit)?,
            Command::Filter(query) => self.list.filter(query),
            Command::Edit(msisdn) => {
                let user = self.list.find_user(&msisdn)?.clone();
                self.list.edit_user_balance(&user);
            }
            Command::Value(value) => {
                if !self.list.set_new_balance(value) {
                    return Err(ConsoleError::InvalidCommand {
                        reason: "no balance editor is open (use 'edit MSISDN')".to_string(),
                    });
                }
            }
            Command::Save => {
                if self.list.submit_balance_edit().await == ActionOutcome::Rejected {
                    return Err(ConsoleError::InvalidCommand {
                        reason: "no balance editor is open (use 'edit MSISDN')".to_string(),
                    });
                }
            }
            Command::Cancel => {
                self.list.close_edit_user_balance();
                self.list.close_create_new_user();
            }
            Command::Dismiss => self.list.flash().clear(),
            Command::New => self.list.show_create_new_user(),
            Command::Create { msisdn, balance } => {
                let outcome = self.list.create_new_user(NewUser::new(msisdn, balance)).await;
                info!("create finished: {:?}", outcome);
            }
            Command::Delete(msisdn) => {
                let user = self.list.find_user(&msisdn)?.clone();
                let outcome = self.list.confirm_user_delete(&user).await;
                info!("delete {} finished: {:?}", msisdn, outcome);
            }
            Command::Sanitize(msisdn) => {
                let user = self.list.find_user(&msisdn)?.clone();
                let outcome = self.list.confirm_balance_sanitize(&user).await;
                info!("sanitize {} finished: {:?}", msisdn, outcome);
            }
            Command::Reserved { msisdn, value } => {
                let user = self.list.find_user(&msisdn)?.clone();
                self.list.set_user_reserved(&user, value).await;
            }
        }

        Ok(Flow::Continue(self.render()))
    }

    /// Prompt, execute and print until `quit` or end of input
    pub async fn run(&mut self, input: &PromptInput) -> Result<()> {
        println!("{}", self.navigate(&Route::Users.path()).await);

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = input.next_line().await? else {
                info!("Input closed, leaving console");
                break;
            };

            match Command::parse(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => match self.execute(command).await {
                    Flow::Continue(output) => println!("{}", output),
                    Flow::Quit => break,
                },
                Err(e) => println!("{}", e),
            }
        }

        Ok(())
    }
}
