//! In-memory entry context for controller tests.
//!
//! `FakeContext` records every navigation, notice and create call, and
//! answers create requests with a scripted [`FakeResponse`].

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::context::{Navigator, Notifier, RoomApi, SessionStore};
use crate::error::EntryError;
use crate::link::{CreatedRoom, NavigationTarget};

/// Scripted answer to a create request.
#[derive(Debug, Clone, Copy)]
pub(crate) enum FakeResponse {
    /// 2xx with this JSON body.
    Body(&'static str),
    /// Non-2xx status.
    Status(u16),
    /// The request never reached the server.
    Unreachable,
}

pub(crate) struct FakeContext {
    response: Cell<FakeResponse>,
    hold: Cell<bool>,
    storage_fails: Cell<bool>,
    storage: RefCell<HashMap<String, String>>,
    visited: RefCell<Vec<String>>,
    notices: RefCell<Vec<EntryError>>,
    endpoints: RefCell<Vec<String>>,
    focus_count: Cell<usize>,
}

impl FakeContext {
    pub fn new(response: FakeResponse) -> Self {
        Self {
            response: Cell::new(response),
            hold: Cell::new(false),
            storage_fails: Cell::new(false),
            storage: RefCell::new(HashMap::new()),
            visited: RefCell::new(Vec::new()),
            notices: RefCell::new(Vec::new()),
            endpoints: RefCell::new(Vec::new()),
            focus_count: Cell::new(0),
        }
    }

    pub fn respond_with(&self, response: FakeResponse) {
        self.response.set(response);
    }

    /// Make create requests yield once before answering.
    pub fn hold_responses(&self) {
        self.hold.set(true);
    }

    pub fn fail_storage(&self) {
        self.storage_fails.set(true);
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.storage.borrow().get(key).cloned()
    }

    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }

    pub fn notices(&self) -> Vec<EntryError> {
        self.notices.borrow().clone()
    }

    pub fn endpoints(&self) -> Vec<String> {
        self.endpoints.borrow().clone()
    }

    pub fn create_calls(&self) -> usize {
        self.endpoints.borrow().len()
    }

    pub fn focus_count(&self) -> usize {
        self.focus_count.get()
    }
}

impl SessionStore for FakeContext {
    fn get(&self, key: &str) -> Option<String> {
        self.stored(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), EntryError> {
        if self.storage_fails.get() {
            return Err(EntryError::Storage("quota exceeded".to_string()));
        }
        self.storage
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl Navigator for FakeContext {
    fn navigate(&self, target: &NavigationTarget) {
        self.visited.borrow_mut().push(target.to_string());
    }
}

impl Notifier for FakeContext {
    fn notify(&self, error: &EntryError) {
        self.notices.borrow_mut().push(error.clone());
    }

    fn focus_name_field(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }
}

impl RoomApi for FakeContext {
    async fn create_room(&self, endpoint: &str) -> Result<CreatedRoom, EntryError> {
        self.endpoints.borrow_mut().push(endpoint.to_string());
        if self.hold.get() {
            tokio::task::yield_now().await;
        }
        match self.response.get() {
            FakeResponse::Body(body) => CreatedRoom::from_json(body),
            FakeResponse::Status(status) => Err(EntryError::Server { status }),
            FakeResponse::Unreachable => Err(EntryError::Transport("connection refused".to_string())),
        }
    }
}
