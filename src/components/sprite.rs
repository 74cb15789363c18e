use bevy_ecs::prelude::Component;
use serde::Serialize;
use std::fmt;

/// Stable identity of a sprite, assigned by the registry at creation.
///
/// Ids come from a monotonic counter and are never reused, so a stale id can
/// only miss a lookup, never alias another sprite.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SpriteId(pub u64);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite{}", self.0)
    }
}

/// Sprite is identified by an opaque asset key. The renderer resolves the key
/// to an image; the engine never interprets it.
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub asset_key: String,
}

impl Sprite {
    pub fn new(asset_key: impl Into<String>) -> Self {
        Self {
            asset_key: asset_key.into(),
        }
    }
}
