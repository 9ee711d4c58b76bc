// Copyright 2025 the Gamegraph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Schedule-with-replace deadlines.

/// Token identifying one particular scheduling of a [`Debounce`].
///
/// Holders can ask whether their scheduling is still the live one; anything
/// captured alongside a superseded token must not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

/// A single debounced action slot.
///
/// Scheduling replaces any pending deadline and bumps the generation, which
/// is cancellation by replacement: at most one scheduling is ever pending,
/// and a deadline fires at most once. Time is host-supplied milliseconds —
/// the same clock the host stamps input events with.
#[derive(Debug, Clone, Copy)]
pub struct Debounce {
    delay: u64,
    deadline: Option<u64>,
    generation: u64,
}

impl Debounce {
    /// Creates an idle slot firing `delay` milliseconds after a schedule.
    #[must_use]
    pub const fn new(delay: u64) -> Self {
        Self {
            delay,
            deadline: None,
            generation: 0,
        }
    }

    /// Schedules (or reschedules) the action at `now + delay`, superseding
    /// any pending deadline.
    pub const fn schedule(&mut self, now: u64) -> DebounceToken {
        self.generation += 1;
        self.deadline = Some(now.saturating_add(self.delay));
        DebounceToken(self.generation)
    }

    /// Cancels the pending deadline, if any.
    pub const fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` while a deadline is pending.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns `true` if `token` is the most recent scheduling.
    #[must_use]
    pub const fn is_current(&self, token: DebounceToken) -> bool {
        token.0 == self.generation
    }

    /// Fires the deadline if it is due, returning its token. Each scheduling
    /// fires at most once.
    pub const fn fire(&mut self, now: u64) -> Option<DebounceToken> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                Some(DebounceToken(self.generation))
            }
            _ => None,
        }
    }
}
