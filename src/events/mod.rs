//! Event types exchanged across the engine.
//!
//! This module groups the messages and observer events that cross system
//! boundaries. Events provide a decoupled way for the interaction layer, the
//! playback engine and outside observers to communicate without direct
//! dependencies.
//!
//! Submodules:
//! - [`interaction`] – gesture and queue-edit commands arriving from the UI
//! - [`playback`] – step/run lifecycle notifications from the playback system
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod interaction;
pub mod playback;
