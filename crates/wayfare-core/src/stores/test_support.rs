//! Port doubles for store tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{AuthResponse, User};
use crate::ports::{AuthError, AuthService, KeyValueStore, StorageError};

pub fn demo_response() -> AuthResponse {
    AuthResponse {
        user: User {
            id: "1".to_string(),
            name: "Rukmoni".to_string(),
            email: "rukmoni@example.com".to_string(),
            avatar: "https://i.pravatar.cc/100?img=5".to_string(),
        },
        auth_token: "mock-auth-token-123".to_string(),
        ga_id: "mock-ga-id-456".to_string(),
    }
}

/// Auth service with canned outcomes.
#[derive(Default)]
pub struct ScriptedAuth {
    fail: bool,
    refuse_sign_out: bool,
    delay: Option<Duration>,
}

impl ScriptedAuth {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn refusing_sign_out() -> Self {
        Self {
            refuse_sign_out: true,
            ..Default::default()
        }
    }

    pub fn delayed(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Default::default()
        }
    }

    async fn wait(&self) {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl AuthService for ScriptedAuth {
    async fn sign_in(&self) -> Result<AuthResponse, AuthError> {
        self.wait().await;
        if self.fail {
            return Err(AuthError::Unavailable("scripted failure".to_string()));
        }
        Ok(demo_response())
    }

    async fn sign_out(&self) -> Result<bool, AuthError> {
        self.wait().await;
        if self.fail {
            return Err(AuthError::Unavailable("scripted failure".to_string()));
        }
        Ok(!self.refuse_sign_out)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Set(String, String),
    Get(String),
    Remove(String),
    RemoveMany(Vec<String>),
}

/// In-memory store that records every call and can be told to fail.
#[derive(Default)]
pub struct RecordingStore {
    values: Mutex<HashMap<String, String>>,
    calls: Mutex<Vec<Call>>,
    fail_reads: bool,
    fail_writes: bool,
    read_delay: Option<Duration>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Default::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Default::default()
        }
    }

    pub fn slow_reads(delay: Duration) -> Self {
        Self {
            read_delay: Some(delay),
            ..Default::default()
        }
    }

    /// Seed a value without recording a call.
    pub fn insert(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    /// Drop a value without recording a call.
    pub fn delete(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.lock().unwrap().clear();
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl KeyValueStore for RecordingStore {
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.record(Call::Set(key.to_string(), value.to_string()));
        if self.fail_writes {
            return Err(StorageError::Write("disk full".to_string()));
        }
        self.insert(key, value);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.record(Call::Get(key.to_string()));
        if let Some(delay) = self.read_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_reads {
            return Err(StorageError::Read("storage unavailable".to_string()));
        }
        Ok(self.values.lock().unwrap().get(key).cloned())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.record(Call::Remove(key.to_string()));
        if self.fail_writes {
            return Err(StorageError::Write("disk full".to_string()));
        }
        self.delete(key);
        Ok(())
    }

    async fn remove_many(&self, keys: &[&str]) -> Result<(), StorageError> {
        self.record(Call::RemoveMany(
            keys.iter().map(|k| k.to_string()).collect(),
        ));
        if self.fail_writes {
            return Err(StorageError::Write("disk full".to_string()));
        }
        let mut values = self.values.lock().unwrap();
        for key in keys {
            values.remove(*key);
        }
        Ok(())
    }
}
