//! Playback lifecycle events.
//!
//! The playback system triggers these as runners advance through their
//! queues. Observers can subscribe for UI feedback (highlighting the active
//! queue entry, re-enabling the play button) or for assertions in tests.
//! Several may fire in a single tick when a large delta crosses more than
//! one step boundary; they always fire in execution order.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<StepStarted>| {
//!     let ev = trigger.event();
//!     log::debug!("{} begins {}", ev.sprite, ev.action);
//! });
//! ```

use bevy_ecs::prelude::*;

use crate::catalog::Action;
use crate::components::sprite::SpriteId;

/// Event emitted when a runner dispatches the next queue entry.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct StepStarted {
    /// The entity whose runner dispatched the step.
    pub entity: Entity,
    pub sprite: SpriteId,
    /// Queue index the step was dispatched from.
    pub index: usize,
    pub action: Action,
}

/// Event emitted when the active step completes and its channels snap to
/// their exact targets.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct StepFinished {
    pub entity: Entity,
    pub sprite: SpriteId,
    pub index: usize,
    pub action: Action,
}

/// Event emitted when a runner exhausts its queue and the sprite goes idle.
///
/// Not emitted on cancellation (drag or reset); only a run that actually
/// finished reports completion.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct RunFinished {
    pub entity: Entity,
    pub sprite: SpriteId,
}
