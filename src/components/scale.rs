use bevy_ecs::prelude::Component;

/// Uniform scale factor applied to a sprite. Identity is 1.0.
#[derive(Component, Clone, Debug, Copy, PartialEq)]
pub struct Scale {
    pub factor: f32,
}
impl Scale {
    pub fn new(factor: f32) -> Self {
        Self { factor }
    }
}
impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0)
    }
}
