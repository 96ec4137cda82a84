//! Bounded hand-off from the input thread to the frame loop.
//!
//! The producer never blocks: when the queue is full the event is dropped.
//! The frame loop drains everything pending at the start of each frame.

use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::time::{Duration, Instant};

use rustc_hash::FxHashMap;

use crate::services::config::InputConfig;
use crate::ui::core::input::Direction;

use super::event::{KeyEvent, KeyEventKind};
use super::keymap::Keymap;

pub fn input_queue(capacity: usize) -> (InputSender, InputQueue) {
    let (tx, rx) = mpsc::sync_channel(capacity.max(1));
    (InputSender { tx }, InputQueue { rx })
}

#[derive(Debug, Clone)]
pub struct InputSender {
    tx: SyncSender<Direction>,
}

impl InputSender {
    /// Queue `direction` without blocking. Returns false if it was dropped.
    pub fn try_send(&self, direction: Direction) -> bool {
        match self.tx.try_send(direction) {
            Ok(()) => true,
            Err(TrySendError::Full(direction)) => {
                tracing::warn!(%direction, "input queue full, dropping event");
                false
            }
            Err(TrySendError::Disconnected(_)) => false,
        }
    }
}

#[derive(Debug)]
pub struct InputQueue {
    rx: Receiver<Direction>,
}

impl InputQueue {
    pub fn try_next(&self) -> Option<Direction> {
        self.rx.try_recv().ok()
    }

    /// Everything queued right now, oldest first.
    pub fn drain(&self) -> Vec<Direction> {
        self.rx.try_iter().collect()
    }
}

/// Per-direction rate limit for held directional keys.
#[derive(Debug)]
pub struct DirectionalThrottle {
    window: Duration,
    last: FxHashMap<Direction, Instant>,
}

impl DirectionalThrottle {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last: FxHashMap::default(),
        }
    }

    pub fn allow(&mut self, direction: Direction, now: Instant) -> bool {
        if let Some(prev) = self.last.get(&direction) {
            if now.saturating_duration_since(*prev) < self.window {
                return false;
            }
        }
        self.last.insert(direction, now);
        true
    }

    pub fn reset(&mut self) {
        self.last.clear();
    }
}

/// Turns key events into queued directions.
///
/// Directional keys repeat while held, limited by the throttle. Action keys
/// (Confirm/Back) fire once per press; repeats and releases are ignored.
pub struct InputProcessor {
    keymap: Keymap,
    throttle: DirectionalThrottle,
    sender: InputSender,
}

impl InputProcessor {
    pub fn new(keymap: Keymap, config: &InputConfig, sender: InputSender) -> Self {
        Self {
            keymap,
            throttle: DirectionalThrottle::new(Duration::from_millis(
                config.directional_throttle_ms,
            )),
            sender,
        }
    }

    /// Map, filter and enqueue one key event. Returns the queued direction.
    pub fn process(&mut self, event: &KeyEvent, now: Instant) -> Option<Direction> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let direction = self.keymap.lookup(&event.key())?;
        if direction.is_directional() {
            if !self.throttle.allow(direction, now) {
                return None;
            }
        } else if event.kind == KeyEventKind::Repeat {
            return None;
        }
        self.sender.try_send(direction).then_some(direction)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/input_queue.rs"]
mod tests;
