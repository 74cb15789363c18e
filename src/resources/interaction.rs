//! Interaction bridge between the UI layer and the ECS world.
//!
//! The UI side holds an [`InteractionFeed`] and can push
//! [`InteractionEvent`]s from any thread; the [`InteractionBridge`] resource
//! owns the receiving end, drained once per tick by
//! [`crate::systems::interaction::pump_interaction_events`]. Use
//! [`interaction_channel`] to create a connected pair.

use bevy_ecs::prelude::Resource;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::components::sprite::SpriteId;
use crate::events::interaction::InteractionEvent;

/// Cloneable sender handle for the UI layer.
///
/// Sends are best-effort: once the stage is gone events are dropped, which
/// is the right outcome for gesture traffic.
#[derive(Clone, Debug)]
pub struct InteractionFeed {
    tx: Sender<InteractionEvent>,
}

impl InteractionFeed {
    /// Push a raw event.
    pub fn send(&self, event: InteractionEvent) {
        let _ = self.tx.send(event);
    }

    /// Incremental drag delta for `id`.
    pub fn drag_moved(&self, id: SpriteId, dx: f32, dy: f32) {
        self.send(InteractionEvent::DragMoved { id, dx, dy });
    }

    /// End of the drag gesture on `id`.
    pub fn drag_released(&self, id: SpriteId) {
        self.send(InteractionEvent::DragReleased { id });
    }

    /// Picker selection of the action labelled `label` for `id`.
    pub fn action_chosen(&self, id: SpriteId, label: impl Into<String>) {
        self.send(InteractionEvent::ActionChosen {
            id,
            label: label.into(),
        });
    }

    /// Deletion of the queue entry at `index` on `id`.
    pub fn action_deleted(&self, id: SpriteId, index: usize) {
        self.send(InteractionEvent::ActionDeleted { id, index });
    }
}

/// Receiving half of the bridge, owned by the ECS world.
#[derive(Resource)]
pub struct InteractionBridge {
    /// Receiver for [`InteractionEvent`] messages (UI -> ECS).
    pub rx: Receiver<InteractionEvent>,
}

/// Create a connected feed/bridge pair.
pub fn interaction_channel() -> (InteractionFeed, InteractionBridge) {
    let (tx, rx) = unbounded::<InteractionEvent>();
    (InteractionFeed { tx }, InteractionBridge { rx })
}
