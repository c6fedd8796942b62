//! Test fixtures and fake implementations for integration testing

#![allow(dead_code)]

use async_trait::async_trait;
use charging_console::api::{ApiError, ChargingApi};
use charging_console::controller::UsersListController;
use charging_console::notify::{FlashService, ManualClock, DEFAULT_FLASH_DURATION};
use charging_console::types::{Amount, User};
use charging_console::view::{Confirmation, ScriptedConfirmer};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// In-memory charging backend that applies mutations like the real one
///
/// Every call is logged as `METHOD path`. Operations named in `failing` answer
/// with a 500 instead of touching the data.
#[derive(Debug, Default)]
pub struct FakeChargingApi {
    users: Mutex<Vec<User>>,
    calls: Mutex<Vec<String>>,
    failing: Mutex<HashSet<&'static str>>,
}

impl FakeChargingApi {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
        }
    }

    /// Make every call of `operation` fail with a server error
    pub fn fail(&self, operation: &'static str) {
        if let Ok(mut failing) = self.failing.lock() {
            failing.insert(operation);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    pub fn count_calls(&self, prefix: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.starts_with(prefix))
            .count()
    }

    pub fn stored_users(&self) -> Vec<User> {
        self.users
            .lock()
            .map(|users| users.clone())
            .unwrap_or_default()
    }

    fn record(&self, operation: &'static str, call: String) -> Result<(), ApiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        let failing = self
            .failing
            .lock()
            .map(|failing| failing.contains(operation))
            .unwrap_or(false);
        if failing {
            return Err(ApiError::Status {
                status: 500,
                body: "Internal Server Error".to_string(),
            });
        }
        Ok(())
    }

    fn update<F>(&self, msisdn: &str, apply: F) -> Result<(), ApiError>
    where
        F: FnOnce(&mut User),
    {
        let mut users = self.users.lock().expect("users lock");
        match users.iter_mut().find(|user| user.msisdn == msisdn) {
            Some(user) => {
                apply(user);
                Ok(())
            }
            None => Err(ApiError::Rejected(msisdn.to_string())),
        }
    }
}

#[async_trait]
impl ChargingApi for FakeChargingApi {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record("list_users", "GET /users".to_string())?;
        Ok(self.stored_users())
    }

    async fn set_balance(&self, msisdn: &str, balance: Amount) -> Result<(), ApiError> {
        self.record(
            "set_balance",
            format!("POST /users/msisdn/{}/balance/{}", msisdn, balance),
        )?;
        self.update(msisdn, |user| user.balance = balance)
    }

    async fn create_user(&self, msisdn: &str, balance: Amount) -> Result<(), ApiError> {
        self.record(
            "create_user",
            format!("PUT /users/msisdn/{}/balance/{}", msisdn, balance),
        )?;
        let mut users = self.users.lock().expect("users lock");
        if users.iter().any(|user| user.msisdn == msisdn) {
            return Err(ApiError::Rejected(msisdn.to_string()));
        }
        let mut user = User::new(msisdn, balance, 0.0);
        user.status = Some("ACTIVE".to_string());
        users.push(user);
        Ok(())
    }

    async fn delete_user(&self, msisdn: &str) -> Result<(), ApiError> {
        self.record("delete_user", format!("DELETE /users/msisdn/{}", msisdn))?;
        let mut users = self.users.lock().expect("users lock");
        let before = users.len();
        users.retain(|user| user.msisdn != msisdn);
        if users.len() == before {
            return Err(ApiError::Rejected(msisdn.to_string()));
        }
        Ok(())
    }

    async fn sanitize(&self, msisdn: &str) -> Result<(), ApiError> {
        self.record("sanitize", format!("POST /users/msisdn/{}/sanitize", msisdn))?;
        self.update(msisdn, |user| {
            user.balance += user.reserved;
            user.reserved = 0.0;
        })
    }

    async fn set_reserved(&self, msisdn: &str, reserved: Amount) -> Result<(), ApiError> {
        self.record(
            "set_reserved",
            format!("POST /users/msisdn/{}/reserved/{}", msisdn, reserved),
        )?;
        self.update(msisdn, |user| user.reserved = reserved)
    }
}

/// Three subscribers with a mix of reserved units
pub fn sample_users() -> Vec<User> {
    vec![
        User::new("123", 10.0, 0.0),
        User::new("00351910000001", 100.0, 20.0),
        User::new("00351910000002", 0.0, 7.0),
    ]
}

/// A controller wired to fakes, plus handles to inspect them
pub struct TestConsole {
    pub controller: UsersListController,
    pub api: Arc<FakeChargingApi>,
    pub flash: Arc<FlashService>,
    pub clock: ManualClock,
    pub confirmer: Arc<ScriptedConfirmer>,
}

pub fn test_console(users: Vec<User>, answers: Vec<Confirmation>) -> TestConsole {
    let api = Arc::new(FakeChargingApi::new(users));
    let clock = ManualClock::new();
    let flash = Arc::new(FlashService::with_clock(
        Arc::new(clock.clone()),
        DEFAULT_FLASH_DURATION,
    ));
    let confirmer = Arc::new(ScriptedConfirmer::new(answers));
    let controller = UsersListController::new(api.clone(), flash.clone(), confirmer.clone());

    TestConsole {
        controller,
        api,
        flash,
        clock,
        confirmer,
    }
}
