//! Engine systems.
//!
//! This module groups all ECS systems that advance simulation time, apply
//! user interaction, and drive queued playback.
//!
//! Submodules overview
//! - [`interaction`] – pump gesture/editor events into the world and apply them
//! - [`playback`] – advance queue runners and write transform channels
//! - [`time`] – update simulation time and delta

pub mod interaction;
pub mod playback;
pub mod time;
