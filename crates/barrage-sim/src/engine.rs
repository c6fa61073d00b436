//! Simulation engine: owns the ECS world and all sim state.
//!
//! `SimulationEngine` processes queued commands at tick boundaries, runs
//! the motion systems in a fixed order, and produces `SimSnapshot`s.
//! Single logical thread of control: all mutation happens synchronously
//! inside `tick`, so the same seed always yields the same snapshot
//! stream.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::commands::SimCommand;
use barrage_core::components::UserControl;
use barrage_core::config::Tuning;
use barrage_core::enums::SimPhase;
use barrage_core::events::SimEvent;
use barrage_core::state::SimSnapshot;
use barrage_core::types::SimTime;

use crate::systems;
use crate::systems::barrage::BarrageState;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    /// Motion tuning parameters.
    pub tuning: Tuning,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            tuning: Tuning::default(),
        }
    }
}

/// The simulation engine.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: SimPhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    tuning: Tuning,
    command_queue: VecDeque<SimCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    barrage: BarrageState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: SimPhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            tuning: config.tuning,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            barrage: BarrageState::default(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: SimCommand) {
        self.command_queue.push_back(command);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    pub fn tick(&mut self) -> SimSnapshot {
        self.process_commands();

        if self.phase == SimPhase::Running {
            self.run_systems();
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build(&self.world, &self.time, self.phase, events)
    }

    /// Get the current simulation phase.
    pub fn phase(&self) -> SimPhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single command.
    fn handle_command(&mut self, command: SimCommand) {
        match command {
            SimCommand::Start => {
                if self.phase == SimPhase::Idle {
                    world_setup::setup_world(&mut self.world, &mut self.rng, &self.tuning);
                    self.barrage.clear();
                    self.time = SimTime::default();
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::Pause => {
                if self.phase == SimPhase::Running {
                    self.phase = SimPhase::Paused;
                }
            }
            SimCommand::Resume => {
                if self.phase == SimPhase::Paused {
                    self.phase = SimPhase::Running;
                }
            }
            SimCommand::Reset => {
                // Live entities and pending deferred creations are cleared
                // in the same command application: atomic between ticks.
                self.world = World::new();
                self.barrage.clear();
                self.despawn_buffer.clear();
                self.events.clear();
                self.time = SimTime::default();
                self.phase = SimPhase::Idle;
            }
            SimCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, 4.0);
            }
            SimCommand::SetUserControl { enabled } => {
                for (_entity, control) in self.world.query_mut::<&mut UserControl>() {
                    control.enabled = enabled;
                }
            }
            SimCommand::SteerInput { yaw, pitch } => {
                for (_entity, control) in self.world.query_mut::<&mut UserControl>() {
                    control.yaw_input = yaw.clamp(-1.0, 1.0);
                    control.pitch_input = pitch.clamp(-1.0, 1.0);
                }
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Barrage scheduling + deferred spawn drain
        systems::barrage::run(
            &mut self.world,
            &mut self.rng,
            &mut self.barrage,
            &self.tuning,
            &self.time,
            &mut self.events,
        );
        // 2. Actor motion (user input or autonomous evasion)
        systems::actor::run(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            &self.time,
            &mut self.events,
        );
        // 3. Projectile motion (retarget, spiral, steer, hit/expiry)
        systems::projectile::run(
            &mut self.world,
            &mut self.rng,
            &self.tuning,
            &self.time,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 4. Cleanup (marked removals, out-of-bounds backstop)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);
    }
}
