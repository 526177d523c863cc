//! Form state.
//!
//! The translator is stateless; the "last generated output" the form keeps
//! between re-renders lives here, one slot per session.


use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::engine::{self, PLACEHOLDER};

/// One form: remembers the output of the last conversion.
#[derive(Debug, Default, Clone)]
pub struct Shell {
    last: Option<String>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `input` and keep the result until the next submission.
    pub fn submit(&mut self, input: &str) -> &str {
        self.remember(engine::convert(input))
    }

    /// Keep output produced elsewhere (e.g. by an API handler that already converted).
    pub fn remember(&mut self, code: String) -> &str {
        self.last.insert(code).as_str()
    }

    /// What the output panel shows right now.
    pub fn display(&self) -> &str {
        self.last.as_deref().unwrap_or(PLACEHOLDER)
    }

    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

struct Slot {
    shell: Shell,
    last_seen: Instant,
}

pub const SESSION_CLEANUP_EVERY: usize = 256;

/// Shells keyed by session id, evicted after `ttl` without activity.
pub struct SessionStore {
    slots: HashMap<String, Slot>,
    ttl: Duration,
    ops: usize,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: HashMap::new(),
            ttl,
            ops: 0,
        }
    }

    pub fn submit(&mut self, id: &str, input: &str, now: Instant) -> String {
        let code = engine::convert(input);
        self.remember(id, code.clone(), now);
        code
    }

    pub fn remember(&mut self, id: &str, code: String, now: Instant) {
        self.maybe_cleanup(now);

        let slot = self.slots.entry(id.to_string()).or_insert_with(|| Slot {
            shell: Shell::new(),
            last_seen: now,
        });
        slot.last_seen = now;
        slot.shell.remember(code);
    }

    /// The remembered output for `id`, or the placeholder for unknown/expired sessions.
    pub fn display(&mut self, id: &str, now: Instant) -> String {
        self.maybe_cleanup(now);

        match self.slots.get_mut(id) {
            Some(slot) if now.duration_since(slot.last_seen) <= self.ttl => {
                slot.last_seen = now;
                slot.shell.display().to_string()
            }
            _ => PLACEHOLDER.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn maybe_cleanup(&mut self, now: Instant) {
        let n = self.ops;
        self.ops = self.ops.wrapping_add(1);
        if n % SESSION_CLEANUP_EVERY != 0 {
            return;
        }

        let ttl = self.ttl;
        let before = self.slots.len();
        self.slots
            .retain(|_, slot| now.duration_since(slot.last_seen) <= ttl);

        let evicted = before - self.slots.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = self.slots.len(), "expired sessions evicted");
        }
    }
}
