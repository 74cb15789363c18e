//! Stage facade: one sandbox instance owning the ECS world and tick schedule.
//!
//! A [`Stage`] bundles the `World`, the per-tick `Schedule` (interaction
//! pumping, interaction application, playback stepping, in that order) and
//! the sender half of the interaction bridge. The UI drives it with direct
//! calls for structural edits and with [`Stage::feed`] for gesture events
//! coming from another thread, then calls [`Stage::tick`] once per frame and
//! reads back [`SpriteView`] snapshots for rendering.
//!
//! ```
//! use spritelab::catalog::Action;
//! use spritelab::stage::Stage;
//!
//! let mut stage = Stage::new();
//! let cat = stage.add_sprite_at("cat", 0.0, 0.0);
//! stage.enqueue_action(cat, Action::MoveX);
//! stage.play();
//! stage.run_until_idle(1.0 / 60.0, 600);
//! let view = stage.sprite(cat).unwrap();
//! assert!((view.translate_x - 50.0).abs() < 1e-4);
//! ```

use bevy_ecs::prelude::*;
use log::debug;
use serde::Serialize;

use crate::catalog::Action;
use crate::components::dragging::Dragging;
use crate::components::playback::Playback;
use crate::components::queue::ActionQueue;
use crate::components::restposition::RestPosition;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sprite::{Sprite, SpriteId};
use crate::components::translation::Translation;
use crate::events::interaction::InteractionEvent;
use crate::resources::interaction::{InteractionFeed, interaction_channel};
use crate::resources::registry::SpriteRegistry;
use crate::resources::stageconfig::StageConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::interaction::{
    apply_action_deleted, apply_interaction_events, commit_position, enqueue_action,
    pump_interaction_events,
};
use crate::systems::playback::{playback_system, reset_stage, start_playback};
use crate::systems::time::update_world_time;

/// Serializable snapshot of one sprite for rendering and diagnostics.
///
/// `x`/`y` are the committed rest position; `translate_x`/`translate_y`,
/// `rotation` and `scale` are the live animated channels. `queue` lists the
/// pending actions in execution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpriteView {
    pub id: SpriteId,
    pub asset: String,
    pub x: f32,
    pub y: f32,
    pub translate_x: f32,
    pub translate_y: f32,
    pub rotation: f32,
    pub scale: f32,
    pub queue: Vec<Action>,
    pub playing: bool,
    pub dragging: bool,
}

/// One sandbox instance: world, tick schedule and interaction bridge.
pub struct Stage {
    world: World,
    schedule: Schedule,
    feed: InteractionFeed,
}

impl Stage {
    /// Create a stage with default configuration.
    pub fn new() -> Self {
        Self::with_config(StageConfig::new())
    }

    /// Create a stage with an explicit configuration.
    pub fn with_config(config: StageConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
        world.insert_resource(SpriteRegistry::default());

        let (feed, bridge) = interaction_channel();
        world.insert_resource(bridge);
        world.insert_resource(Messages::<InteractionEvent>::default());
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        // Interaction lands before playback so a drag that starts this tick
        // already owns its channels when the stepper runs.
        schedule.add_systems(
            (
                pump_interaction_events,
                apply_interaction_events,
                playback_system,
            )
                .chain(),
        );

        Self {
            world,
            schedule,
            feed,
        }
    }

    /// A cloneable sender for feeding interaction events from other threads.
    pub fn feed(&self) -> InteractionFeed {
        self.feed.clone()
    }

    /// Add a sprite at the configured default spawn point.
    pub fn add_sprite(&mut self, asset: impl Into<String>) -> SpriteId {
        let (x, y) = self.world.resource::<StageConfig>().spawn_point();
        self.add_sprite_at(asset, x, y)
    }

    /// Add a sprite at an explicit position.
    ///
    /// The live translation starts at the given position and the rest
    /// position matches it; rotation starts at 0 and scale at 1.
    pub fn add_sprite_at(&mut self, asset: impl Into<String>, x: f32, y: f32) -> SpriteId {
        let asset: String = asset.into();
        let entity = self
            .world
            .spawn((
                Sprite::new(asset.clone()),
                RestPosition::new(x, y),
                Translation::new(x, y),
                Rotation::default(),
                Scale::default(),
                ActionQueue::default(),
            ))
            .id();
        let id = self.world.resource_mut::<SpriteRegistry>().register(entity);
        self.world.entity_mut(entity).insert(id);
        debug!("Added {} ({:?}) at ({}, {})", id, asset, x, y);
        id
    }

    /// Append `action` to a sprite's queue. Unknown ids are logged no-ops.
    pub fn enqueue_action(&mut self, id: SpriteId, action: Action) {
        enqueue_action(&mut self.world, id, action);
    }

    /// Remove the queue entry at `index`. Stale indices and unknown ids are
    /// logged no-ops.
    pub fn remove_action(&mut self, id: SpriteId, index: usize) {
        apply_action_deleted(&mut self.world, id, index);
    }

    /// Overwrite a sprite's rest position and snap its live translation to
    /// match.
    pub fn commit_position(&mut self, id: SpriteId, x: f32, y: f32) {
        commit_position(&mut self.world, id, x, y);
    }

    /// Start playback on every sprite with a non-empty queue.
    ///
    /// Sprites already running or currently dragged are skipped, so calling
    /// this twice never stacks runners. Returns how many runners started.
    pub fn play(&mut self) -> usize {
        start_playback(&mut self.world)
    }

    /// Hard reset: cancel all playback and drags, clear every queue, snap
    /// every sprite back to the origin with identity rotation and scale.
    pub fn reset_all(&mut self) {
        reset_stage(&mut self.world);
    }

    /// Advance the sandbox by `dt` seconds of wall time.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
    }

    /// Tick at a fixed `dt` until no sprite is playing, up to `max_ticks`.
    /// Returns the number of ticks actually run.
    pub fn run_until_idle(&mut self, dt: f32, max_ticks: u32) -> u32 {
        let mut ticks = 0;
        while ticks < max_ticks && self.is_playing() {
            self.tick(dt);
            ticks += 1;
        }
        ticks
    }

    /// True while at least one sprite has an active playback runner.
    pub fn is_playing(&self) -> bool {
        let registry = self.world.resource::<SpriteRegistry>();
        registry
            .ids()
            .into_iter()
            .filter_map(|id| registry.entity(id))
            .any(|entity| self.world.get::<Playback>(entity).is_some())
    }

    /// Snapshot one sprite, or `None` for an unknown id.
    pub fn sprite(&self, id: SpriteId) -> Option<SpriteView> {
        let entity = self.world.resource::<SpriteRegistry>().entity(id)?;
        self.view_of(id, entity)
    }

    /// Snapshot every sprite in creation order.
    pub fn sprites(&self) -> Vec<SpriteView> {
        let registry = self.world.resource::<SpriteRegistry>();
        registry
            .ids()
            .into_iter()
            .filter_map(|id| registry.entity(id).and_then(|e| self.view_of(id, e)))
            .collect()
    }

    /// Direct read access to the underlying world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct mutable access to the underlying world, for registering
    /// observers or custom integration.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn view_of(&self, id: SpriteId, entity: Entity) -> Option<SpriteView> {
        let sprite = self.world.get::<Sprite>(entity)?;
        let rest = self.world.get::<RestPosition>(entity)?;
        let translation = self.world.get::<Translation>(entity)?;
        let rotation = self.world.get::<Rotation>(entity)?;
        let scale = self.world.get::<Scale>(entity)?;
        let queue = self.world.get::<ActionQueue>(entity)?;
        Some(SpriteView {
            id,
            asset: sprite.asset_key.clone(),
            x: rest.x,
            y: rest.y,
            translate_x: translation.x,
            translate_y: translation.y,
            rotation: rotation.degrees,
            scale: scale.factor,
            queue: queue.actions().to_vec(),
            playing: self.world.get::<Playback>(entity).is_some(),
            dragging: self.world.get::<Dragging>(entity).is_some(),
        })
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new()
    }
}
