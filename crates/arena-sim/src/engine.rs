//! Headless arena session.
//!
//! `ArenaSession` drives a `WaveDirector` over an `EcsHost` at a fixed tick,
//! processes queued commands at tick boundaries and returns a
//! `DirectorSnapshot` every tick. Same seed, same commands, same snapshots.

use std::collections::VecDeque;

use hecs::Entity;
use serde::{Deserialize, Serialize};
use tracing::debug;

use arena_core::config::ArenaConfig;
use arena_core::constants::{DESPAWN_DELAY_TICKS, DT};
use arena_core::enums::EntityKind;
use arena_core::state::DirectorSnapshot;
use arena_core::types::WorldBounds;
use arena_core::ArenaResult;

use crate::director::WaveDirector;
use crate::ecs_host::EcsHost;
use crate::systems;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub arena: ArenaConfig,
    pub bounds: WorldBounds,
    /// Ticks between a despawn request and removal from the world.
    pub despawn_delay_ticks: u32,
    /// Seconds per tick.
    pub tick_secs: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            arena: ArenaConfig::default(),
            bounds: WorldBounds::default(),
            despawn_delay_ticks: DESPAWN_DELAY_TICKS,
            tick_secs: DT,
        }
    }
}

/// Outside input to a running session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ArenaCommand {
    /// Skip the rest of the Idle countdown.
    ForceNextWave,
    /// Destroy up to `count` live entities of a kind, oldest first.
    Kill { kind: EntityKind, count: u32 },
}

pub struct ArenaSession {
    director: WaveDirector<EcsHost>,
    command_queue: VecDeque<ArenaCommand>,
    despawn_buffer: Vec<Entity>,
    tick_secs: f32,
    ticks: u64,
}

impl ArenaSession {
    pub fn new(config: SessionConfig) -> ArenaResult<Self> {
        let host = EcsHost::new(config.bounds, config.despawn_delay_ticks);
        Ok(Self {
            director: WaveDirector::new(config.arena, host)?,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            tick_secs: config.tick_secs,
            ticks: 0,
        })
    }

    /// Queue a command for the next tick boundary.
    pub fn queue_command(&mut self, command: ArenaCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ArenaCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> DirectorSnapshot {
        self.process_commands();
        self.director.update(self.tick_secs);

        systems::cleanup::run(self.director.host_mut().world_mut(), &mut self.despawn_buffer);
        for &entity in &self.despawn_buffer {
            self.director.entity_destroyed(entity);
        }

        self.ticks += 1;
        self.director.snapshot()
    }

    pub fn director(&self) -> &WaveDirector<EcsHost> {
        &self.director
    }

    pub fn host(&self) -> &EcsHost {
        self.director.host()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn tick_secs(&self) -> f32 {
        self.tick_secs
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: ArenaCommand) {
        match command {
            ArenaCommand::ForceNextWave => {
                self.director.force_next_wave();
            }
            ArenaCommand::Kill { kind, count } => {
                let targets = self.director.host().find(kind);
                for entity in targets.into_iter().take(count as usize) {
                    if self.director.host_mut().kill(entity) {
                        self.director.entity_destroyed(entity);
                    }
                }
                debug!(?kind, count, "kill command handled");
            }
        }
    }
}
