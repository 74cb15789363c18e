use bevy_ecs::prelude::Component;

/// Live animated translation channels of a sprite, in canvas units.
///
/// This is what the renderer reads every frame. It diverges from
/// [`RestPosition`](super::restposition::RestPosition) while playback or a
/// drag gesture is writing it.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq)]
pub struct Translation {
    pub x: f32,
    pub y: f32,
}

impl Translation {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
