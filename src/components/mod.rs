//! ECS components for sprites.
//!
//! This module groups all component types that can be attached to sprite
//! entities on the stage. Components are plain data; the systems in
//! [`crate::systems`] read and write them each tick.
//!
//! Submodules overview:
//! - [`dragging`] – marker for sprites owned by an active drag gesture
//! - [`playback`] – per-sprite queue runner and in-flight step tweens
//! - [`queue`] – ordered action queue
//! - [`restposition`] – last-committed logical position
//! - [`rotation`] – rotation angle in degrees
//! - [`scale`] – uniform scale factor
//! - [`sprite`] – sprite identity and asset reference
//! - [`translation`] – live animated translation channels

pub mod dragging;
pub mod playback;
pub mod queue;
pub mod restposition;
pub mod rotation;
pub mod scale;
pub mod sprite;
pub mod translation;
