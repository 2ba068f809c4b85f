use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use huddle_cache::{CacheError, CacheStore};

/// Mailer that records every message instead of sending it
pub struct RecordingMailer {
    sent: Mutex<Vec<huddle_mail::OutboundEmail>>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<huddle_mail::OutboundEmail> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl huddle_mail::Mailer for RecordingMailer {
    async fn send(&self, email: &huddle_mail::OutboundEmail) -> huddle_mail::Result<()> {
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

/// Mailer whose every dispatch fails, standing in for a dead relay
pub struct FailingMailer;

#[async_trait]
impl huddle_mail::Mailer for FailingMailer {
    async fn send(&self, _email: &huddle_mail::OutboundEmail) -> huddle_mail::Result<()> {
        let source = "missing-at-sign"
            .parse::<lettre::message::Mailbox>()
            .unwrap_err();
        Err(huddle_mail::MailError::from(source))
    }
}

/// Cache store whose every operation fails, standing in for an
/// unreachable backend
pub struct FailingCacheStore;

fn cache_failure() -> CacheError {
    let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    CacheError::from(source)
}

#[async_trait]
impl CacheStore for FailingCacheStore {
    async fn get(&self, _key: &str) -> huddle_cache::Result<Option<String>> {
        Err(cache_failure())
    }

    async fn set(&self, _key: &str, _value: &str, _ttl: Duration) -> huddle_cache::Result<()> {
        Err(cache_failure())
    }

    async fn delete(&self, _key: &str) -> huddle_cache::Result<()> {
        Err(cache_failure())
    }
}
