//! Process-unique id generation for domain entities.

use std::sync::atomic::{AtomicU64, Ordering};

/// Prefixed monotonic id source (`nps-1`, `nps-2`, ...).
///
/// A counter per entity kind cannot collide under rapid successive calls,
/// unlike timestamp-derived ids. `resume_past` keeps ids unique across
/// reloads of persisted state.
pub struct IdGenerator {
    prefix: &'static str,
    next: AtomicU64,
}

impl IdGenerator {
    pub fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            next: AtomicU64::new(1),
        }
    }

    pub fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{}", self.prefix, n)
    }

    /// Advance the counter past every id in `existing` that carries this
    /// generator's prefix and a numeric suffix.
    pub fn resume_past<'a>(&self, existing: impl IntoIterator<Item = &'a str>) {
        for id in existing {
            let suffix = id
                .strip_prefix(self.prefix)
                .and_then(|rest| rest.strip_prefix('-'));
            if let Some(n) = suffix.and_then(|s| s.parse::<u64>().ok()) {
                self.next.fetch_max(n + 1, Ordering::Relaxed);
            }
        }
    }
}
