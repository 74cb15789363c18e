//! Per-sprite action queue.
//!
//! Insertion order is execution order. The same catalog entry may appear any
//! number of times. The only edits are append, indexed removal and clear;
//! there is no reordering operation.

use bevy_ecs::prelude::Component;

use crate::catalog::Action;

/// Ordered list of actions a sprite will execute on the next play.
#[derive(Component, Clone, Debug, Default)]
pub struct ActionQueue {
    actions: Vec<Action>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action at the end of the queue.
    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Remove and return the action at `index`.
    ///
    /// Returns `None` for an out-of-bounds index; stale indices from the UI
    /// are expected and must not panic.
    pub fn remove_at(&mut self, index: usize) -> Option<Action> {
        if index < self.actions.len() {
            Some(self.actions.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }

    pub fn get(&self, index: usize) -> Option<Action> {
        self.actions.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The queued actions in execution order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}
