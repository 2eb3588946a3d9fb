//! Wave director: the Idle → Clearing → Generating cycle.
//!
//! Spawns and despawns are paced. Each phase fills an action queue that
//! `update` drains at one action per `action_interval_secs`, carrying the
//! leftover time across calls. Actions keep the order they were queued in.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use arena_core::config::ArenaConfig;
use arena_core::enums::{EntityKind, WavePhase};
use arena_core::events::DirectorEvent;
use arena_core::state::DirectorSnapshot;
use arena_core::types::{GridCoord, GridDims, KindCounts, WorldBounds};
use arena_core::ArenaResult;

use crate::generator::{WaveGenerator, WavePlan};
use crate::host::EntityHost;
use crate::registry::EntityRegistry;

/// One paced step of a Clearing or Generating phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PacedAction<H> {
    Despawn { kind: EntityKind, handle: H },
    Spawn { kind: EntityKind, cell: GridCoord },
}

/// Orchestrates waves against an entity host.
pub struct WaveDirector<H: EntityHost> {
    host: H,
    generator: WaveGenerator,
    bounds: WorldBounds,
    rng: ChaCha8Rng,
    phase: WavePhase,
    wave: u32,
    timer: f32,
    accumulator: f32,
    power_budget: u32,
    registry: EntityRegistry<H::Handle>,
    /// Threats still alive when their despawn was requested.
    carry_over: KindCounts,
    actions: VecDeque<PacedAction<H::Handle>>,
    events: Vec<DirectorEvent>,
}

impl<H: EntityHost> WaveDirector<H> {
    /// Validate the configuration, size the grid from the host's world bounds
    /// and begin generating wave 0. The director is born in Generating, so no
    /// phase change is reported for the first wave.
    pub fn new(config: ArenaConfig, host: H) -> ArenaResult<Self> {
        config.validate()?;
        let bounds = host.world_bounds();
        bounds.validate()?;
        let dims = GridDims::from_bounds(&bounds)?;

        let mut director = Self {
            host,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            timer: config.wave_timer_max,
            generator: WaveGenerator::new(config, dims),
            bounds,
            phase: WavePhase::Generating,
            wave: 0,
            accumulator: 0.0,
            power_budget: 0,
            registry: EntityRegistry::new(),
            carry_over: KindCounts::default(),
            actions: VecDeque::new(),
            events: Vec::new(),
        };
        director.plan_wave();
        Ok(director)
    }

    /// Advance the director by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        match self.phase {
            WavePhase::Idle => {
                self.timer -= dt;
                if self.timer < 0.0 {
                    self.begin_clearing();
                }
            }
            WavePhase::Clearing | WavePhase::Generating => {
                let interval = self.generator.config().action_interval_secs;
                self.accumulator += dt;
                while self.accumulator >= interval && self.phase != WavePhase::Idle {
                    self.accumulator -= interval;
                    self.step();
                }
            }
        }
    }

    /// Skip the rest of the Idle countdown. Ignored outside Idle.
    pub fn force_next_wave(&mut self) -> bool {
        if self.phase != WavePhase::Idle {
            debug!(phase = ?self.phase, "force next wave ignored");
            return false;
        }
        self.begin_clearing();
        true
    }

    /// The host destroyed an entity on its own (killed, expired).
    pub fn entity_destroyed(&mut self, handle: H::Handle) {
        self.registry.remove(handle);

        // A threat that dies before its despawn request is not carried over.
        let pending = self.actions.iter().position(
            |a| matches!(a, PacedAction::Despawn { handle: h, .. } if *h == handle),
        );
        if let Some(pos) = pending {
            if let Some(PacedAction::Despawn { kind, .. }) = self.actions.remove(pos) {
                self.forget_carry_over(kind);
            }
        }
    }

    /// Current state plus every event since the last snapshot.
    pub fn snapshot(&mut self) -> DirectorSnapshot {
        DirectorSnapshot {
            wave: self.wave,
            phase: self.phase,
            timer_secs: self.timer,
            power_budget: self.power_budget,
            live: self.registry.live_counts(),
            pending_actions: self.actions.len() as u32,
            events: self.drain_events(),
        }
    }

    pub fn drain_events(&mut self) -> Vec<DirectorEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn phase(&self) -> WavePhase {
        self.phase
    }

    pub fn wave(&self) -> u32 {
        self.wave
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn power_budget(&self) -> u32 {
        self.power_budget
    }

    pub fn pending_actions(&self) -> usize {
        self.actions.len()
    }

    pub fn registry(&self) -> &EntityRegistry<H::Handle> {
        &self.registry
    }

    pub fn config(&self) -> &ArenaConfig {
        self.generator.config()
    }

    pub fn bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    // --- Phase transitions ---

    fn set_phase(&mut self, to: WavePhase) {
        let from = self.phase;
        self.phase = to;
        self.accumulator = 0.0;
        self.events.push(DirectorEvent::PhaseChanged { from, to });
        info!(?from, ?to, wave = self.wave, "phase changed");
    }

    fn begin_clearing(&mut self) {
        let pruned = self.registry.prune(|h| self.host.is_alive(h));
        if pruned > 0 {
            debug!(pruned, "dropped dead handles before clearing");
        }
        self.wave += 1;
        self.timer = self.generator.config().wave_timer_max;

        self.carry_over = KindCounts::default();
        for kind in EntityKind::DESPAWN_ORDER {
            if kind.is_threat() {
                self.carry_over[kind] = self.registry.handles(kind).len() as u32;
            }
            self.actions.extend(
                self.registry
                    .handles(kind)
                    .iter()
                    .map(|&handle| PacedAction::Despawn { kind, handle }),
            );
        }

        self.set_phase(WavePhase::Clearing);
    }

    fn begin_generating(&mut self) {
        self.plan_wave();
        self.set_phase(WavePhase::Generating);
    }

    /// Generate the current wave's map and roster and queue its spawns.
    fn plan_wave(&mut self) {
        self.events.push(DirectorEvent::WaveStarted { wave: self.wave });
        let carried = std::mem::take(&mut self.carry_over);
        let plan = self
            .generator
            .generate(&carried, &mut self.power_budget, &mut self.rng);
        self.registry.clear();
        self.queue_plan(&plan);
    }

    fn queue_plan(&mut self, plan: &WavePlan) {
        self.events.push(DirectorEvent::RosterComputed {
            wave: self.wave,
            stationary_threats: plan.roster.count(EntityKind::StationaryThreat),
            roaming_threats: plan.roster.count(EntityKind::RoamingThreat),
            props: plan.count(EntityKind::Prop) as u32,
            budget_left: self.power_budget,
        });
        self.events.extend(plan.degraded());
        self.actions.extend(
            plan.spawns
                .iter()
                .map(|s| PacedAction::Spawn { kind: s.kind, cell: s.cell }),
        );
    }

    fn enter_idle(&mut self) {
        self.timer = self.generator.config().wave_timer_max;
        self.set_phase(WavePhase::Idle);
    }

    // --- Paced actions ---

    fn step(&mut self) {
        match self.phase {
            WavePhase::Clearing => self.despawn_next(),
            WavePhase::Generating => self.spawn_next(),
            WavePhase::Idle => {}
        }
    }

    /// Request one despawn. Handles the host already lost are skipped
    /// without using up the interval.
    fn despawn_next(&mut self) {
        while let Some(action) = self.actions.pop_front() {
            let PacedAction::Despawn { kind, handle } = action else {
                continue;
            };
            self.registry.remove(handle);
            if !self.host.is_alive(handle) {
                self.forget_carry_over(kind);
                continue;
            }
            self.host.notify_despawn(handle);
            self.events.push(DirectorEvent::DespawnRequested { kind });
            return;
        }
        self.begin_generating();
    }

    fn spawn_next(&mut self) {
        let Some(action) = self.actions.pop_front() else {
            self.enter_idle();
            return;
        };
        let PacedAction::Spawn { kind, cell } = action else {
            return;
        };
        let position = self.bounds.cell_to_world(cell);
        debug_assert!(self.bounds.contains(position), "{cell:?} maps outside the arena");
        let handle = self.host.spawn_entity(kind, position, kind.container());
        self.registry.register(kind, handle);
        self.events.push(DirectorEvent::Spawned { kind, cell });
    }

    fn forget_carry_over(&mut self, kind: EntityKind) {
        if kind.is_threat() {
            self.carry_over[kind] = self.carry_over[kind].saturating_sub(1);
        }
    }
}
