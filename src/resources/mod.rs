//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: the sprite registry, timing,
//! configuration, and the channel bridge to the UI. Each submodule documents
//! the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `interaction` – feed/bridge channel pair carrying UI commands into the world
//! - `registry` – sprite id allocation and id-to-entity lookup
//! - `stageconfig` – INI-backed stage settings with safe defaults
//! - `worldtime` – simulation time and delta
pub mod interaction;
pub mod registry;
pub mod stageconfig;
pub mod worldtime;
