//! Process-wide map from session key to that session's view tree.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::foundation::ids::SessionKey;
use crate::session::{Session, SessionOpts};

type KeySource = dyn Fn() -> SessionKey + Send + Sync;

/// Sessions keyed by an externally supplied key (e.g. a cookie value).
///
/// Each session sits behind its own mutex, so requests for one session are
/// served strictly one after another while different sessions proceed in
/// parallel.
pub struct SessionRegistry {
    opts: SessionOpts,
    key_source: Box<KeySource>,
    sessions: Mutex<HashMap<SessionKey, Arc<Mutex<Session>>>>,
}

impl SessionRegistry {
    pub fn new(
        opts: SessionOpts,
        key_source: impl Fn() -> SessionKey + Send + Sync + 'static,
    ) -> Self {
        Self {
            opts,
            key_source: Box::new(key_source),
            sessions: Mutex::new(HashMap::new()),
        }
    }

    pub fn opts(&self) -> &SessionOpts {
        &self.opts
    }

    pub fn current_key(&self) -> SessionKey {
        (self.key_source)()
    }

    pub fn get_or_create(&self, key: &SessionKey) -> Arc<Mutex<Session>> {
        let mut sessions = self.sessions.lock();
        sessions
            .entry(key.clone())
            .or_insert_with(|| {
                tracing::debug!(session = %key, "created session");
                Arc::new(Mutex::new(Session::new(self.opts.clone())))
            })
            .clone()
    }

    pub fn get(&self, key: &SessionKey) -> Option<Arc<Mutex<Session>>> {
        self.sessions.lock().get(key).cloned()
    }

    /// Session for the current key, created on first use.
    pub fn current(&self) -> Arc<Mutex<Session>> {
        self.get_or_create(&self.current_key())
    }

    /// Run `f` against the current session while holding its lock.
    pub fn with_current<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let session = self.current();
        let mut guard = session.lock();
        f(&mut guard)
    }

    /// Forget a session and everything scoped to it.
    pub fn discard(&self, key: &SessionKey) -> bool {
        let removed = self.sessions.lock().remove(key).is_some();
        if removed {
            tracing::debug!(session = %key, "discarded session");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.lock().is_empty()
    }
}

#[cfg(test)]
#[path = "../tests/unit/registry.rs"]
mod tests;
