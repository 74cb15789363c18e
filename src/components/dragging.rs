//! Drag gesture marker component.
//!
//! While a sprite carries [`Dragging`], the interaction layer is the only
//! writer of its translate channels. The marker is inserted on the first drag
//! delta of a gesture and removed on release; inserting it also cancels the
//! sprite's playback runner, so the two writers never overlap.

use bevy_ecs::prelude::Component;

/// Tag component for sprites currently owned by a drag gesture.
#[derive(Component, Clone, Debug)]
pub struct Dragging;
