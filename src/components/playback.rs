//! Playback runner state for one sprite.
//!
//! A [`Playback`] component exists only while the sprite's queue is
//! executing: inserting it starts the run, removing it is the cancellation.
//! The runner advances one step at a time; a step owns one tween per affected
//! channel and finishes only when its shared clock reaches the step duration.
//! See [`crate::systems::playback`] for the update system.

use bevy_ecs::prelude::Component;
use smallvec::SmallVec;

use crate::catalog::{Action, Channel};

/// Easing functions for smooth interpolation.
///
/// These functions transform a linear `t` value (0.0 to 1.0) to create
/// different acceleration/deceleration curves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Easing {
    /// Constant speed (no easing).
    Linear,
    /// Starts slow, accelerates (quadratic).
    QuadIn,
    /// Starts fast, decelerates (quadratic).
    QuadOut,
    /// Slow start and end (quadratic).
    QuadInOut,
    /// Starts slow, accelerates (cubic).
    CubicIn,
    /// Starts fast, decelerates (cubic).
    CubicOut,
    /// Slow start and end (cubic).
    CubicInOut,
}

impl Easing {
    /// Parse a configuration-file easing name.
    pub fn from_name(name: &str) -> Option<Easing> {
        match name {
            "linear" => Some(Easing::Linear),
            "quad_in" => Some(Easing::QuadIn),
            "quad_out" => Some(Easing::QuadOut),
            "quad_in_out" => Some(Easing::QuadInOut),
            "cubic_in" => Some(Easing::CubicIn),
            "cubic_out" => Some(Easing::CubicOut),
            "cubic_in_out" => Some(Easing::CubicInOut),
            _ => None,
        }
    }
}

/// One channel's in-flight interpolation within the active step.
#[derive(Clone, Copy, Debug)]
pub struct ChannelTween {
    pub channel: Channel,
    /// Channel value read when the step was dispatched.
    pub from: f32,
    /// Resolved end value.
    pub to: f32,
}

/// The step currently animating: where it came from in the queue, its tweens
/// and the clock they share.
#[derive(Clone, Debug)]
pub struct ActiveStep {
    pub action: Action,
    /// Queue index this step was dispatched from.
    pub index: usize,
    pub tweens: SmallVec<[ChannelTween; 2]>,
    /// Seconds since the step was dispatched.
    pub elapsed: f32,
    /// Step duration in seconds.
    pub duration: f32,
}

impl ActiveStep {
    /// Time left until this step completes.
    pub fn remaining(&self) -> f32 {
        (self.duration - self.elapsed).max(0.0)
    }
}

/// Queue runner for one sprite: present while Running, absent while Idle.
///
/// `cursor` indexes the live queue, so edits during a run shift what executes
/// next. A fresh runner starts at the front with no step dispatched yet.
#[derive(Component, Clone, Debug, Default)]
pub struct Playback {
    /// Index of the next action to dispatch.
    pub cursor: usize,
    /// The step currently animating, if one has been dispatched.
    pub step: Option<ActiveStep>,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_easing_from_name() {
        assert_eq!(Easing::from_name("linear"), Some(Easing::Linear));
        assert_eq!(Easing::from_name("quad_in"), Some(Easing::QuadIn));
        assert_eq!(Easing::from_name("quad_out"), Some(Easing::QuadOut));
        assert_eq!(Easing::from_name("quad_in_out"), Some(Easing::QuadInOut));
        assert_eq!(Easing::from_name("cubic_in"), Some(Easing::CubicIn));
        assert_eq!(Easing::from_name("cubic_out"), Some(Easing::CubicOut));
        assert_eq!(Easing::from_name("cubic_in_out"), Some(Easing::CubicInOut));
    }

    #[test]
    fn test_easing_from_name_unknown() {
        assert_eq!(Easing::from_name("bounce"), None);
        assert_eq!(Easing::from_name(""), None);
        assert_eq!(Easing::from_name("QuadInOut"), None); // names are snake_case
    }

    #[test]
    fn test_new_runner_starts_at_front() {
        let runner = Playback::new();
        assert_eq!(runner.cursor, 0);
        assert!(runner.step.is_none());
    }

    #[test]
    fn test_active_step_remaining() {
        let step = ActiveStep {
            action: Action::MoveX,
            index: 0,
            tweens: SmallVec::new(),
            elapsed: 0.2,
            duration: 0.5,
        };
        assert!(approx_eq(step.remaining(), 0.3));
    }

    #[test]
    fn test_active_step_remaining_clamps_at_zero() {
        let step = ActiveStep {
            action: Action::MoveX,
            index: 0,
            tweens: SmallVec::new(),
            elapsed: 0.7,
            duration: 0.5,
        };
        assert!(approx_eq(step.remaining(), 0.0));
    }
}
