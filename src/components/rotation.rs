use bevy_ecs::prelude::Component;

/// Rotation angle in degrees. Unbounded: repeated turns accumulate past 360.
#[derive(Component, Clone, Debug, Copy, Default, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    pub fn new(degrees: f32) -> Self {
        Self { degrees }
    }
}
