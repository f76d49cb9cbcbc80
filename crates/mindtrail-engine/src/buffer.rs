//! Bounded, insertion-ordered window of recent actions.

use std::collections::VecDeque;

use mindtrail_core::models::Action;

/// Sliding window over the most recent actions. Never exceeds its capacity.
#[derive(Debug, Clone)]
pub struct EventBuffer {
    actions: VecDeque<Action>,
    capacity: usize,
}

impl EventBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            actions: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append an action, returning the oldest one if it was pushed out.
    pub fn push(&mut self, action: Action) -> Option<Action> {
        self.actions.push_back(action);
        if self.actions.len() > self.capacity {
            self.actions.pop_front()
        } else {
            None
        }
    }

    /// Owned copy of the buffered actions in insertion order.
    pub fn snapshot(&self) -> Vec<Action> {
        self.actions.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
