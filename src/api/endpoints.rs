//! Endpoint table of the charging management API

use crate::types::Amount;
use reqwest::Method;

/// One call against the management API, with its path parameters
#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint<'a> {
    ListUsers,
    SetBalance { msisdn: &'a str, balance: Amount },
    CreateUser { msisdn: &'a str, balance: Amount },
    DeleteUser { msisdn: &'a str },
    Sanitize { msisdn: &'a str },
    SetReserved { msisdn: &'a str, reserved: Amount },
}

impl Endpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::ListUsers => Method::GET,
            Endpoint::SetBalance { .. } => Method::POST,
            Endpoint::CreateUser { .. } => Method::PUT,
            Endpoint::DeleteUser { .. } => Method::DELETE,
            Endpoint::Sanitize { .. } => Method::POST,
            Endpoint::SetReserved { .. } => Method::POST,
        }
    }

    /// Unencoded path segments relative to the API base
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec!["users".to_string()];
        match self {
            Endpoint::ListUsers => {}
            Endpoint::SetBalance { msisdn, balance } | Endpoint::CreateUser { msisdn, balance } => {
                segments.extend(["msisdn".to_string(), msisdn.to_string()]);
                segments.extend(["balance".to_string(), balance.to_string()]);
            }
            Endpoint::DeleteUser { msisdn } => {
                segments.extend(["msisdn".to_string(), msisdn.to_string()]);
            }
            Endpoint::Sanitize { msisdn } => {
                segments.extend(["msisdn".to_string(), msisdn.to_string()]);
                segments.push("sanitize".to_string());
            }
            Endpoint::SetReserved { msisdn, reserved } => {
                segments.extend(["msisdn".to_string(), msisdn.to_string()]);
                segments.extend(["reserved".to_string(), reserved.to_string()]);
            }
        }
        segments
    }

    /// Readable path for log lines and errors
    pub fn path(&self) -> String {
        format!("/{}", self.segments().join("/"))
    }

    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::ListUsers => "list_users",
            Endpoint::SetBalance { .. } => "set_balance",
            Endpoint::CreateUser { .. } => "create_user",
            Endpoint::DeleteUser { .. } => "delete_user",
            Endpoint::Sanitize { .. } => "sanitize",
            Endpoint::SetReserved { .. } => "set_reserved",
        }
    }
}
