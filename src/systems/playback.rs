//! Playback systems: driving queue runners and writing transform channels.
//!
//! # System Flow
//!
//! Each tick, [`playback_system`] advances every entity carrying a
//! [`Playback`](crate::components::playback::Playback) runner, independently
//! of all others:
//!
//! 1. If no step is active, the next queued action is dispatched. Its
//!    targets are resolved from the live channel values *at that moment*:
//!    a relative delta adds to whatever the channel holds now, so queued
//!    relative moves compound. A
//!    [`StepStarted`](crate::events::playback::StepStarted) event fires.
//! 2. The active step's clock advances by the tick delta; every tween of
//!    the step writes its eased value into its channel.
//! 3. When the clock reaches the step duration, all tracks snap to their
//!    exact targets, [`StepFinished`](crate::events::playback::StepFinished)
//!    fires, and leftover tick time flows into the next step so coarse
//!    ticks stay exact.
//! 4. Past the last queue entry the runner component is removed and
//!    [`RunFinished`](crate::events::playback::RunFinished) fires.
//!
//! [`start_playback`] and [`reset_stage`] are the world-level entry points
//! behind `Stage::play` and `Stage::reset_all`. Cancellation is structural:
//! removing the runner component stops a sprite cold, and there is no
//! deferred callback that could fire afterwards.

use bevy_ecs::prelude::*;
use log::{debug, info};
use smallvec::SmallVec;

use crate::catalog::{Action, Channel, Target};
use crate::components::dragging::Dragging;
use crate::components::playback::{ActiveStep, ChannelTween, Easing, Playback};
use crate::components::queue::ActionQueue;
use crate::components::restposition::RestPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::SpriteId;
use crate::components::translation::Translation;
use crate::events::playback::{RunFinished, StepFinished, StepStarted};
use crate::resources::stageconfig::StageConfig;
use crate::resources::worldtime::WorldTime;

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub(crate) fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::QuadIn => t * t,
        Easing::QuadOut => t * (2.0 - t),
        Easing::QuadInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
        Easing::CubicIn => t * t * t,
        Easing::CubicOut => {
            let p = t - 1.0;
            p * p * p + 1.0
        }
        Easing::CubicInOut => {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                let p = 2.0 * t - 2.0;
                0.5 * p * p * p + 1.0
            }
        } // TODO: sine, elastic, bounce, etc.
    }
}

/// Linearly interpolate between two floats.
pub(crate) fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Read one channel's current value off the live components.
fn channel_value(
    channel: Channel,
    translation: &Translation,
    rotation: &Rotation,
    scale: &Scale,
) -> f32 {
    match channel {
        Channel::TranslateX => translation.x,
        Channel::TranslateY => translation.y,
        Channel::Rotation => rotation.degrees,
        Channel::Scale => scale.factor,
    }
}

/// Write one channel's value into the live components.
fn set_channel_value(
    channel: Channel,
    value: f32,
    translation: &mut Translation,
    rotation: &mut Rotation,
    scale: &mut Scale,
) {
    match channel {
        Channel::TranslateX => translation.x = value,
        Channel::TranslateY => translation.y = value,
        Channel::Rotation => rotation.degrees = value,
        Channel::Scale => scale.factor = value,
    }
}

/// Build the active step for `action`, resolving every track's target from
/// the channel values as they are right now.
fn dispatch_step(
    action: Action,
    index: usize,
    translation: &Translation,
    rotation: &Rotation,
    scale: &Scale,
) -> ActiveStep {
    let effect = action.effect();
    let tweens: SmallVec<[ChannelTween; 2]> = effect
        .tracks
        .iter()
        .map(|track| {
            let from = channel_value(track.channel, translation, rotation, scale);
            let to = match track.target {
                Target::Relative(delta) => from + delta,
                Target::Absolute(value) => value,
            };
            ChannelTween {
                channel: track.channel,
                from,
                to,
            }
        })
        .collect();
    ActiveStep {
        action,
        index,
        tweens,
        elapsed: 0.0,
        duration: effect.duration,
    }
}

/// Advance every playback runner by the tick delta.
///
/// Dragged sprites are excluded by the query filter: while a gesture owns a
/// sprite, playback never writes its channels.
pub fn playback_system(
    world_time: Res<WorldTime>,
    config: Res<StageConfig>,
    mut query: Query<
        (
            Entity,
            &SpriteId,
            &mut Playback,
            &ActionQueue,
            &mut Translation,
            &mut Rotation,
            &mut Scale,
        ),
        Without<Dragging>,
    >,
    mut commands: Commands,
) {
    let easing = config.easing;
    for (entity, id, mut runner, queue, mut translation, mut rotation, mut scale) in
        query.iter_mut()
    {
        // Per-runner time budget for this tick. Leftover from a completed
        // step carries into the next one.
        let mut budget = world_time.delta.max(0.0);

        loop {
            if runner.step.is_none() {
                let Some(action) = queue.get(runner.cursor) else {
                    // Queue exhausted: the sprite goes idle.
                    commands.trigger(RunFinished {
                        entity,
                        sprite: *id,
                    });
                    commands.entity(entity).remove::<Playback>();
                    debug!("{} finished its queue", id);
                    break;
                };
                let index = runner.cursor;
                runner.step = Some(dispatch_step(
                    action,
                    index,
                    &translation,
                    &rotation,
                    &scale,
                ));
                debug!("{} dispatches {:?} (queue index {})", id, action, index);
                commands.trigger(StepStarted {
                    entity,
                    sprite: *id,
                    index,
                    action,
                });
            }

            if budget <= 0.0 {
                break;
            }
            let Some(step) = runner.step.as_mut() else {
                break;
            };

            let remaining = step.remaining();
            if budget < remaining {
                // Step survives this tick: write eased intermediate values.
                step.elapsed += budget;
                let t = ease(easing, step.elapsed / step.duration);
                for tween in &step.tweens {
                    let value = lerp_f32(tween.from, tween.to, t);
                    set_channel_value(
                        tween.channel,
                        value,
                        &mut translation,
                        &mut rotation,
                        &mut scale,
                    );
                }
                break;
            }

            // Step completes inside this tick: snap every track to its exact
            // target, then spend the leftover on the next queue entry.
            budget -= remaining;
            for tween in &step.tweens {
                set_channel_value(
                    tween.channel,
                    tween.to,
                    &mut translation,
                    &mut rotation,
                    &mut scale,
                );
            }
            let index = step.index;
            let action = step.action;
            commands.trigger(StepFinished {
                entity,
                sprite: *id,
                index,
                action,
            });
            runner.cursor = index + 1;
            runner.step = None;
        }
    }
}

/// Begin executing every non-empty queue.
///
/// Sprites already running keep their current runner (a repeated play
/// request coalesces instead of stacking a second runner) and sprites held
/// by a drag gesture are skipped. Returns how many runners were started.
pub fn start_playback(world: &mut World) -> usize {
    let mut targets: Vec<Entity> = Vec::new();
    let mut query = world.query::<(
        Entity,
        &SpriteId,
        &ActionQueue,
        Option<&Playback>,
        Option<&Dragging>,
    )>();
    for (entity, id, queue, runner, dragging) in query.iter(world) {
        if runner.is_some() {
            debug!("{} already running, play request coalesced", id);
            continue;
        }
        if dragging.is_some() {
            debug!("{} is being dragged, play request skipped", id);
            continue;
        }
        if queue.is_empty() {
            continue;
        }
        targets.push(entity);
    }
    for entity in &targets {
        world.entity_mut(*entity).insert(Playback::new());
    }
    if !targets.is_empty() {
        info!("Playback started for {} sprite(s)", targets.len());
    }
    targets.len()
}

/// Hard reset of every sprite: cancel runners and drag gestures, clear the
/// queues and snap all channels back to identity.
///
/// Nothing animates here: values snap immediately, and because removing
/// the runner component is the cancellation, no late completion can
/// overwrite the reset state. Calling this twice is the same as calling it
/// once.
pub fn reset_stage(world: &mut World) {
    let mut entities: Vec<Entity> = Vec::new();
    let mut query = world.query_filtered::<Entity, With<SpriteId>>();
    entities.extend(query.iter(world));

    for entity in &entities {
        let mut entry = world.entity_mut(*entity);
        entry.remove::<Playback>();
        entry.remove::<Dragging>();
        if let Some(mut queue) = entry.get_mut::<ActionQueue>() {
            queue.clear();
        }
        if let Some(mut translation) = entry.get_mut::<Translation>() {
            *translation = Translation::default();
        }
        if let Some(mut rotation) = entry.get_mut::<Rotation>() {
            *rotation = Rotation::default();
        }
        if let Some(mut scale) = entry.get_mut::<Scale>() {
            *scale = Scale::default();
        }
        if let Some(mut rest) = entry.get_mut::<RestPosition>() {
            *rest = RestPosition::default();
        }
    }
    info!("Stage reset: {} sprite(s) back to identity", entities.len());
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL_EASINGS: [Easing; 7] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
    ];

    // ==================== EASING FUNCTION TESTS ====================

    #[test]
    fn test_ease_all_types_at_zero() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, 0.0), 0.0),
                "{:?} at t=0.0 should be 0.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_all_types_at_one() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, 1.0), 1.0),
                "{:?} at t=1.0 should be 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_clamps_out_of_range_input() {
        for easing in ALL_EASINGS {
            assert!(
                approx_eq(ease(easing, -0.5), 0.0),
                "{:?} at t=-0.5 should clamp to 0.0",
                easing
            );
            assert!(
                approx_eq(ease(easing, 1.5), 1.0),
                "{:?} at t=1.5 should clamp to 1.0",
                easing
            );
        }
    }

    #[test]
    fn test_ease_linear_midpoint() {
        assert!(approx_eq(ease(Easing::Linear, 0.5), 0.5));
        assert!(approx_eq(ease(Easing::Linear, 0.25), 0.25));
    }

    #[test]
    fn test_ease_quad_values() {
        assert!(approx_eq(ease(Easing::QuadIn, 0.5), 0.25)); // 0.5^2
        assert!(approx_eq(ease(Easing::QuadOut, 0.5), 0.75)); // 0.5 * 1.5
        assert!(approx_eq(ease(Easing::QuadInOut, 0.25), 0.125)); // 2 * 0.25^2
        assert!(approx_eq(ease(Easing::QuadInOut, 0.75), 0.875)); // -1 + (4 - 1.5) * 0.75
        assert!(approx_eq(ease(Easing::QuadInOut, 0.5), 0.5));
    }

    #[test]
    fn test_ease_cubic_values() {
        assert!(approx_eq(ease(Easing::CubicIn, 0.5), 0.125)); // 0.5^3
        assert!(approx_eq(ease(Easing::CubicOut, 0.5), 0.875)); // (-0.5)^3 + 1
        assert!(approx_eq(ease(Easing::CubicInOut, 0.25), 0.0625)); // 4 * 0.25^3
        assert!(approx_eq(ease(Easing::CubicInOut, 0.75), 0.9375)); // 0.5 * (-0.5)^3 + 1
    }

    #[test]
    fn test_ease_monotonicity() {
        // All easing functions should be monotonically increasing
        for easing in ALL_EASINGS {
            let mut prev = ease(easing, 0.0);
            for i in 1..=100 {
                let t = i as f32 / 100.0;
                let curr = ease(easing, t);
                assert!(
                    curr >= prev - EPSILON,
                    "{:?} should be monotonic: ease({}) = {} < previous {}",
                    easing,
                    t,
                    curr,
                    prev
                );
                prev = curr;
            }
        }
    }

    // ==================== INTERPOLATION TESTS ====================

    #[test]
    fn test_lerp_f32_basic() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.0), 0.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.0), 10.0));
    }

    #[test]
    fn test_lerp_f32_negative_values() {
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.5), 0.0));
        assert!(approx_eq(lerp_f32(-10.0, 10.0, 0.25), -5.0));
    }

    #[test]
    fn test_lerp_f32_extrapolation() {
        // lerp doesn't clamp, so it extrapolates beyond [0, 1]
        assert!(approx_eq(lerp_f32(0.0, 10.0, -0.5), -5.0));
        assert!(approx_eq(lerp_f32(0.0, 10.0, 1.5), 15.0));
    }

    // ==================== DISPATCH TESTS ====================

    #[test]
    fn test_dispatch_relative_reads_live_value() {
        let translation = Translation::new(30.0, 0.0);
        let rotation = Rotation::default();
        let scale = Scale::default();

        let step = dispatch_step(Action::MoveX, 2, &translation, &rotation, &scale);

        assert_eq!(step.index, 2);
        assert_eq!(step.tweens.len(), 1);
        assert!(approx_eq(step.tweens[0].from, 30.0));
        assert!(approx_eq(step.tweens[0].to, 80.0));
        assert!(approx_eq(step.duration, 0.5));
        assert!(approx_eq(step.elapsed, 0.0));
    }

    #[test]
    fn test_dispatch_absolute_ignores_live_value() {
        let translation = Translation::default();
        let rotation = Rotation::default();
        let scale = Scale::new(1.5);

        let step = dispatch_step(Action::DecreaseSize, 0, &translation, &rotation, &scale);

        assert!(approx_eq(step.tweens[0].from, 1.5));
        assert!(approx_eq(step.tweens[0].to, 0.5));
    }

    #[test]
    fn test_dispatch_goto_origin_builds_parallel_tweens() {
        let translation = Translation::new(120.0, -40.0);
        let rotation = Rotation::new(90.0);
        let scale = Scale::default();

        let step = dispatch_step(Action::GotoOrigin, 1, &translation, &rotation, &scale);

        assert_eq!(step.tweens.len(), 2);
        assert_eq!(step.tweens[0].channel, Channel::TranslateX);
        assert!(approx_eq(step.tweens[0].from, 120.0));
        assert!(approx_eq(step.tweens[0].to, 0.0));
        assert_eq!(step.tweens[1].channel, Channel::TranslateY);
        assert!(approx_eq(step.tweens[1].from, -40.0));
        assert!(approx_eq(step.tweens[1].to, 0.0));
    }

    #[test]
    fn test_dispatch_rotation_is_unbounded() {
        let translation = Translation::default();
        let rotation = Rotation::new(360.0);
        let scale = Scale::default();

        let step = dispatch_step(Action::Rotate, 0, &translation, &rotation, &scale);

        // A second full turn targets 720, no wrapping back to 0.
        assert!(approx_eq(step.tweens[0].to, 720.0));
    }

    #[test]
    fn test_channel_value_round_trip() {
        let mut translation = Translation::new(1.0, 2.0);
        let mut rotation = Rotation::new(3.0);
        let mut scale = Scale::new(4.0);

        for (channel, expected) in [
            (Channel::TranslateX, 1.0),
            (Channel::TranslateY, 2.0),
            (Channel::Rotation, 3.0),
            (Channel::Scale, 4.0),
        ] {
            assert!(approx_eq(
                channel_value(channel, &translation, &rotation, &scale),
                expected
            ));
            set_channel_value(channel, 9.0, &mut translation, &mut rotation, &mut scale);
            assert!(approx_eq(
                channel_value(channel, &translation, &rotation, &scale),
                9.0
            ));
        }
    }
}
