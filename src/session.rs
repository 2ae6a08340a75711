// src/session.rs
use crate::pipeline::FilteredView;
use base64::Engine;
use rand::{rngs::OsRng, RngCore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Instant;

pub const SESSION_COOKIE: &str = "dash_session";

const TOKEN_BYTES: usize = 32;

/// Opaque browser session token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn generate() -> Self {
        let mut raw = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut raw);
        Self(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(raw))
    }

    /// Accepts only tokens this module could have issued.
    pub fn parse(token: &str) -> Option<Self> {
        let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .decode(token)
            .ok()?;
        (decoded.len() == TOKEN_BYTES).then(|| Self(token.to_string()))
    }

    /// Finds the session token in a `Cookie` header value.
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Self::parse(value))
    }

    pub fn set_cookie_value(&self) -> String {
        format!("{SESSION_COOKIE}={}; Path=/; HttpOnly; SameSite=Lax", self.0)
    }
}

struct Entry {
    view: Arc<FilteredView>,
    last_seen: Instant,
}

/// Per-session cache of the most recently published filtered view.
///
/// Entries are replaced whole; the least recently seen session is dropped once
/// `max_sessions` is exceeded.
pub struct SessionRegistry {
    entries: Mutex<HashMap<SessionId, Entry>>,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(max_sessions: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            max_sessions: max_sessions.max(1),
        }
    }

    pub fn publish(&self, id: &SessionId, view: Arc<FilteredView>) {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.insert(
            id.clone(),
            Entry {
                view,
                last_seen: Instant::now(),
            },
        );

        while entries.len() > self.max_sessions {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_seen)
                .map(|(id, _)| id.clone());
            match oldest {
                Some(oldest) => {
                    entries.remove(&oldest);
                }
                None => break,
            }
        }
    }

    pub fn current(&self, id: &SessionId) -> Option<Arc<FilteredView>> {
        let mut entries = self.entries.lock().unwrap_or_else(|p| p.into_inner());
        entries.get_mut(id).map(|entry| {
            entry.last_seen = Instant::now();
            Arc::clone(&entry.view)
        })
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .len()
    }
}
