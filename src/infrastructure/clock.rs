// src/infrastructure/clock.rs
use crate::application::IdSource;
use std::time::{SystemTime, UNIX_EPOCH};

/// Millisecond-timestamp ids, strictly increasing within one process even if
/// several are drawn in the same millisecond or the clock steps back.
#[derive(Debug, Default)]
pub struct ClockIdSource {
    last: i64,
}

impl ClockIdSource {
    pub fn new() -> Self {
        Self::default()
    }
}

fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}

impl IdSource for ClockIdSource {
    fn next_id(&mut self) -> i64 {
        let id = now_ms().max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}
