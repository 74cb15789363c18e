//! Spritelab engine library.
//!
//! The action-sequencing and playback core of a sprite-animation sandbox:
//! sprites on a canvas each carry an ordered queue of catalog actions, and a
//! single play request drives every queue as a timed animation sequence,
//! sequential within a sprite and concurrent across sprites.
//!
//! Most callers only need [`stage::Stage`] and [`catalog::Action`]; the ECS
//! modules are exposed for integration tests and custom embedding.

pub mod catalog;
pub mod components;
pub mod events;
pub mod resources;
pub mod stage;
pub mod systems;
