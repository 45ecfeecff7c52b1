// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Cancel-and-reschedule debouncing over host-supplied timestamps.
//!
//! No clocks and no timers live in here. The host says what time it is; the
//! debouncer says whether the latest input is due. Every `schedule` replaces
//! the pending value and pushes the deadline out, so only the last keystroke
//! of a burst is ever searched.

/// One pending value with its deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pending {
    value: String,
    due_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay_ms: u64,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms: u64::from(delay_ms),
            pending: None,
        }
    }

    /// Replace any pending value. Returns the new deadline.
    pub fn schedule(&mut self, value: String, now_ms: u64) -> u64 {
        let due_at_ms = now_ms.saturating_add(self.delay_ms);
        self.pending = Some(Pending { value, due_at_ms });
        due_at_ms
    }

    /// Take the pending value if its deadline has passed.
    ///
    /// A timer that fires before the deadline leaves the value pending; the
    /// caller re-arms for the remainder.
    pub fn take_due(&mut self, now_ms: u64) -> Option<String> {
        match &self.pending {
            Some(p) if now_ms >= p.due_at_ms => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value. Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn due_at_ms(&self) -> Option<u64> {
        self.pending.as_ref().map(|p| p.due_at_ms)
    }
}
