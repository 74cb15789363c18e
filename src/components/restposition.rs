use bevy_ecs::prelude::Component;

/// Last-committed logical position of a sprite.
///
/// Playback and drag gestures animate
/// [`Translation`](super::translation::Translation); the rest position only
/// changes on an explicit commit (drag release, `commit_position`) or a
/// reset. Relative moves read the live translation, so this stays the stable
/// baseline the UI anchors the sprite at between interactions.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct RestPosition {
    pub x: f32,
    pub y: f32,
}

impl RestPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
