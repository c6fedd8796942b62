//! Common types used throughout the charging console

use serde::{Deserialize, Serialize};

/// Subscriber identifier (phone-number-like key)
pub type Msisdn = String;

/// Monetary units; the backend stores them as floating point
pub type Amount = f64;

/// A subscriber row as returned by the users collection endpoint
///
/// Field names follow the backend's table columns. The MSISDN column may come
/// back as a JSON number, in which case it is kept as its decimal text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "MSISDN", deserialize_with = "msisdn_serde::deserialize")]
    pub msisdn: Msisdn,
    #[serde(rename = "BALANCE", default)]
    pub balance: Amount,
    #[serde(rename = "RESERVED", default)]
    pub reserved: Amount,
    #[serde(rename = "USER_STATUS", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl User {
    pub fn new(msisdn: impl Into<Msisdn>, balance: Amount, reserved: Amount) -> Self {
        Self {
            msisdn: msisdn.into(),
            balance,
            reserved,
            status: None,
        }
    }

    /// Balance after folding the reserved units back in
    pub fn sanitized_balance(&self) -> Amount {
        self.balance + self.reserved
    }
}

mod msisdn_serde {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawMsisdn {
        Text(String),
        Number(u64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawMsisdn::deserialize(deserializer)? {
            RawMsisdn::Text(text) => text,
            RawMsisdn::Number(number) => number.to_string(),
        })
    }
}

/// Contents of the "create user" form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub msisdn: Msisdn,
    pub balance: Option<Amount>,
}

impl NewUser {
    pub fn new(msisdn: impl Into<Msisdn>, balance: Option<Amount>) -> Self {
        Self {
            msisdn: msisdn.into(),
            balance,
        }
    }
}

/// Severity of a flash notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl std::fmt::Display for FlashKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlashKind::Success => write!(f, "success"),
            FlashKind::Error => write!(f, "error"),
        }
    }
}

/// A transient banner message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    #[serde(rename = "type")]
    pub kind: FlashKind,
    pub message: String,
}

/// What happened to a user-triggered action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The backend accepted the request
    Completed,
    /// The request was sent and failed
    Failed,
    /// Local validation refused the action; nothing was sent
    Rejected,
    /// The confirmation dialog was dismissed
    Cancelled,
}

impl ActionOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed)
    }
}
