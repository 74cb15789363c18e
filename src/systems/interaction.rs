//! Interaction systems: pumping the UI bridge and applying its commands.
//!
//! # System Flow
//!
//! Each tick, before playback runs:
//!
//! 1. [`pump_interaction_events`] drains the crossbeam receiver into the ECS
//!    [`Messages<InteractionEvent>`] mailbox.
//! 2. [`apply_interaction_events`] drains the mailbox and applies each
//!    command to the world: drag deltas, drag commits, queue edits.
//!
//! The application helpers are plain `&mut World` functions shared with the
//! [`Stage`](crate::stage::Stage) facade, so the channel path and direct API
//! calls behave identically. Every helper absorbs unknown ids, unknown
//! labels and stale indices as logged no-ops; nothing here can fail loudly.

use bevy_ecs::prelude::*;
use log::{debug, warn};

use crate::catalog::Action;
use crate::components::dragging::Dragging;
use crate::components::playback::Playback;
use crate::components::queue::ActionQueue;
use crate::components::restposition::RestPosition;
use crate::components::sprite::SpriteId;
use crate::components::translation::Translation;
use crate::events::interaction::InteractionEvent;
use crate::resources::interaction::InteractionBridge;
use crate::resources::registry::SpriteRegistry;

/// Drain any pending events from the UI feed and enqueue them into the ECS
/// [`Messages<InteractionEvent>`] mailbox.
///
/// Non-blocking; intended to run each tick just before
/// [`apply_interaction_events`].
pub fn pump_interaction_events(
    bridge: Res<InteractionBridge>,
    mut writer: MessageWriter<InteractionEvent>,
) {
    writer.write_batch(bridge.rx.try_iter());
}

/// Apply every pending [`InteractionEvent`] to the world.
///
/// Runs as an exclusive system so that component changes (a drag cancelling
/// a runner) are visible to the playback system in the same tick.
pub fn apply_interaction_events(world: &mut World) {
    let events: Vec<InteractionEvent> = {
        let mut messages = world.resource_mut::<Messages<InteractionEvent>>();
        messages.drain().collect()
    };
    for event in events {
        match event {
            InteractionEvent::DragMoved { id, dx, dy } => apply_drag_moved(world, id, dx, dy),
            InteractionEvent::DragReleased { id } => apply_drag_released(world, id),
            InteractionEvent::ActionChosen { id, label } => {
                apply_action_chosen(world, id, &label)
            }
            InteractionEvent::ActionDeleted { id, index } => {
                apply_action_deleted(world, id, index)
            }
        }
    }
}

/// Resolve a sprite id, logging the miss if the registry does not know it.
fn lookup_sprite(world: &World, id: SpriteId) -> Option<Entity> {
    let entity = world.resource::<SpriteRegistry>().entity(id);
    if entity.is_none() {
        warn!("Interaction for unknown {} ignored", id);
    }
    entity
}

/// Apply an incremental drag delta to a sprite's live translation.
///
/// The first delta of a gesture marks the sprite as dragging and cancels its
/// playback runner: while the gesture owns the sprite, playback must not
/// write its channels.
pub fn apply_drag_moved(world: &mut World, id: SpriteId, dx: f32, dy: f32) {
    let Some(entity) = lookup_sprite(world, id) else {
        return;
    };
    let mut entry = world.entity_mut(entity);
    if entry.get::<Dragging>().is_none() {
        if entry.get::<Playback>().is_some() {
            entry.remove::<Playback>();
            debug!("{} drag interrupts playback", id);
        }
        entry.insert(Dragging);
    }
    if let Some(mut translation) = entry.get_mut::<Translation>() {
        translation.x += dx;
        translation.y += dy;
    }
}

/// Finish a drag gesture: the live translation becomes the committed rest
/// position.
///
/// A release without a preceding drag delta is ignored; there is nothing to
/// commit.
pub fn apply_drag_released(world: &mut World, id: SpriteId) {
    let Some(entity) = lookup_sprite(world, id) else {
        return;
    };
    let mut entry = world.entity_mut(entity);
    if entry.get::<Dragging>().is_none() {
        debug!("{} release without active drag ignored", id);
        return;
    }
    entry.remove::<Dragging>();
    let live = entry.get::<Translation>().copied();
    if let Some(live) = live {
        if let Some(mut rest) = entry.get_mut::<RestPosition>() {
            rest.x = live.x;
            rest.y = live.y;
        }
        debug!("{} released at ({}, {})", id, live.x, live.y);
    }
}

/// Resolve a picker label against the catalog and append it to the queue.
///
/// Unknown labels are rejected here, at the boundary; the queue only ever
/// holds resolved actions.
pub fn apply_action_chosen(world: &mut World, id: SpriteId, label: &str) {
    let action = match Action::from_label(label) {
        Ok(action) => action,
        Err(err) => {
            warn!("{} enqueue rejected: {}", id, err);
            return;
        }
    };
    enqueue_action(world, id, action);
}

/// Append an already-resolved action to the sprite's queue.
pub fn enqueue_action(world: &mut World, id: SpriteId, action: Action) {
    let Some(entity) = lookup_sprite(world, id) else {
        return;
    };
    if let Some(mut queue) = world.get_mut::<ActionQueue>(entity) {
        queue.push(action);
        debug!("{} queued {:?} ({} queued)", id, action, queue.len());
    }
}

/// Remove the queue entry at `index`, tolerating stale indices.
pub fn apply_action_deleted(world: &mut World, id: SpriteId, index: usize) {
    let Some(entity) = lookup_sprite(world, id) else {
        return;
    };
    if let Some(mut queue) = world.get_mut::<ActionQueue>(entity) {
        match queue.remove_at(index) {
            Some(action) => debug!("{} removed {:?} at index {}", id, action, index),
            None => debug!("{} delete at stale index {} ignored", id, index),
        }
    }
}

/// Overwrite a sprite's committed position, snapping the live translation to
/// match so the baseline and the rendered value agree.
pub fn commit_position(world: &mut World, id: SpriteId, x: f32, y: f32) {
    let Some(entity) = lookup_sprite(world, id) else {
        return;
    };
    let mut entry = world.entity_mut(entity);
    if let Some(mut rest) = entry.get_mut::<RestPosition>() {
        rest.x = x;
        rest.y = y;
    }
    if let Some(mut translation) = entry.get_mut::<Translation>() {
        translation.x = x;
        translation.y = y;
    }
}
