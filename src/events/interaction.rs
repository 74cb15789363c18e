//! Interaction commands arriving from the UI layer.
//!
//! The UI side pushes these through the feed half of the interaction bridge
//! ([`crate::resources::interaction`]); each tick they are drained into the
//! ECS message queue and applied by
//! [`crate::systems::interaction::apply_interaction_events`]. They may arrive
//! at any time, including mid-playback. Unknown sprite ids, unknown labels
//! and stale indices are logged no-ops, never errors.

use bevy_ecs::message::Message;

use crate::components::sprite::SpriteId;

/// One gesture or editor command from the UI.
#[derive(Message, Debug, Clone, PartialEq)]
pub enum InteractionEvent {
    /// Incremental drag delta in canvas units.
    ///
    /// The first delta of a gesture takes ownership of the sprite away from
    /// playback until release.
    DragMoved { id: SpriteId, dx: f32, dy: f32 },
    /// Gesture finished: commit the rest position from the live translation.
    DragReleased { id: SpriteId },
    /// Picker selection: resolve `label` against the catalog and enqueue it.
    ActionChosen { id: SpriteId, label: String },
    /// Editor deletion of the queue entry at `index`.
    ActionDeleted { id: SpriteId, index: usize },
}
