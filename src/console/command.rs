//! Shell command grammar

use crate::error::ConsoleError;
use crate::types::{Amount, Msisdn};

/// One line typed at the console prompt
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Refetch and show the user list
    List,
    /// Redraw the current view
    Show,
    Page(usize),
    Limit(usize),
    Filter(String),
    /// Open the balance editor for a user
    Edit(Msisdn),
    /// Type a value into the open balance editor
    Value(Amount),
    /// Submit the open balance editor
    Save,
    /// Close whatever editor or form is open
    Cancel,
    /// Hide the notification banner
    Dismiss,
    /// Open the creation form
    New,
    Create {
        msisdn: Msisdn,
        balance: Option<Amount>,
    },
    Delete(Msisdn),
    Sanitize(Msisdn),
    Reserved {
        msisdn: Msisdn,
        value: Amount,
    },
    Goto(String),
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                     refetch users
  show                     redraw the current view
  page N                   go to page N
  limit N                  show N rows per page
  filter [TEXT]            filter rows (no text clears the filter)
  edit MSISDN              open the balance editor
  value N                  set the new balance in the editor
  save                     submit the balance editor
  cancel                   close the open editor or form
  dismiss                  hide the notification banner
  new                      open the new user form
  create MSISDN [BALANCE]  create a user (balance defaults to 0)
  delete MSISDN            delete a user (asks for confirmation)
  sanitize MSISDN          fold reserved units into the balance (asks for confirmation)
  reserved MSISDN N        set a user's reserved units
  goto PATH                open /users, /users/MSISDN, /services or /promotions
  help                     this text
  quit                     leave";

impl Command {
    /// Parse a prompt line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, ConsoleError> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (verb.to_lowercase().as_str(), args.as_slice()) {
            ("list" | "refresh", []) => Command::List,
            ("show", []) => Command::Show,
            ("page", [n]) => Command::Page(parse_number(n, "page")?),
            ("limit", [n]) => Command::Limit(parse_number(n, "limit")?),
            ("filter", rest) => Command::Filter(rest.join(" ")),
            ("edit", [msisdn]) => Command::Edit(msisdn.to_string()),
            ("value", [n]) => Command::Value(parse_amount(n, "value")?),
            ("save", []) => Command::Save,
            ("cancel" | "close", []) => Command::Cancel,
            ("dismiss", []) => Command::Dismiss,
            ("new", []) => Command::New,
            ("create", [msisdn]) => Command::Create {
                msisdn: msisdn.to_string(),
                balance: None,
            },
            ("create", [msisdn, balance]) => Command::Create {
                msisdn: msisdn.to_string(),
                balance: Some(parse_amount(balance, "balance")?),
            },
            ("delete", [msisdn]) => Command::Delete(msisdn.to_string()),
            ("sanitize", [msisdn]) => Command::Sanitize(msisdn.to_string()),
            ("reserved", [msisdn, value]) => Command::Reserved {
                msisdn: msisdn.to_string(),
                value: parse_amount(value, "reserved")?,
            },
            ("goto", [path]) => Command::Goto(path.to_string()),
            ("help" | "?", _) => Command::Help,
            ("quit" | "exit", []) => Command::Quit,
            (verb, _) => {
                return Err(ConsoleError::InvalidCommand {
                    reason: format!("'{}' (type 'help' for the list of commands)", verb),
                })
            }
        };

        Ok(Some(command))
    }
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, ConsoleError> {
    text.parse().map_err(|_| ConsoleError::InvalidCommand {
        reason: format!("{} must be a number, got '{}'", what, text),
    })
}

/// Like `parse_number`, but refuses `inf` and `NaN`
fn parse_amount(text: &str, what: &str) -> Result<Amount, ConsoleError> {
    let amount: Amount = parse_number(text, what)?;
    if !amount.is_finite() {
        return Err(ConsoleError::InvalidCommand {
            reason: format!("{} must be a finite number, got '{}'", what, text),
        });
    }
    Ok(amount)
}
