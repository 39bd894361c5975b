//! Session orchestration
//!
//! Owns the player, the enemy population and the boundary, and wires the
//! spawner and the collision arbiter together. Terminal outcomes are
//! reported through the injected `Navigation` collaborator; there is no
//! global state anywhere.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, GameConfig};
use crate::consts::{STATIONARY_SIZE, WIN_SIZE};
use crate::services::{AudioSink, Navigation, SizeDisplay};
use crate::sim::boundary::{Boundary, Rect};
use crate::sim::collision::{resolve, CollisionOutcome};
use crate::sim::spawner::Spawner;
use crate::sim::state::{Enemy, EnemyKind, Player};
use crate::sim::wander::WanderState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Normalized-or-smaller movement vector from the input provider
    pub move_dir: Vec2,
}

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Running,
    /// Player reached the win threshold
    Won,
    /// Player was consumed by a bigger enemy
    Dead,
}

/// One run of the game, from spawn to win or death
pub struct GameSession {
    config: GameConfig,
    boundary: Boundary,
    player: Player,
    /// Live enemies, kept in ascending-id order for stable iteration
    enemies: Vec<Enemy>,
    spawner: Spawner,
    rng: Pcg32,
    next_id: u32,
    phase: SessionPhase,
    nav: Box<dyn Navigation>,
    audio: Box<dyn AudioSink>,
    display: Box<dyn SizeDisplay>,
}

impl GameSession {
    /// Build a session: validate config (fatal on error), compute the
    /// boundary from the border geometry, place the player and the initial
    /// stationary population, and arm the wandering spawn ramp.
    pub fn new(
        config: GameConfig,
        borders: &[Rect],
        seed: u64,
        nav: Box<dyn Navigation>,
        audio: Box<dyn AudioSink>,
        display: Box<dyn SizeDisplay>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let boundary = Boundary::compute(borders, config.boundary_padding);
        let player = Player {
            size: config.player.start_size,
            pos: boundary.clamp(config.player.spawn_position),
            vel: Vec2::ZERO,
        };
        let spawner = Spawner::new(config.wandering_spawns, config.stationary_spawns);

        let mut session = Self {
            config,
            boundary,
            player,
            enemies: Vec::new(),
            spawner,
            rng: Pcg32::seed_from_u64(seed),
            next_id: 1,
            phase: SessionPhase::Running,
            nav,
            audio,
            display,
        };

        session.spawn_initial_stationary();
        log::info!(
            "session started: seed={}, {} stationary enemies placed",
            seed,
            session.enemies.len()
        );
        Ok(session)
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Place the full stationary population at random interior points.
    /// Without a bounded region there is no interior to sample, so an
    /// unconstrained arena gets no stationary enemies.
    fn spawn_initial_stationary(&mut self) {
        if self.boundary.is_unconstrained() {
            if self.spawner.stationary_quota() > 0 {
                log::warn!("unconstrained arena: skipping stationary enemy placement");
            }
            return;
        }
        for _ in 0..self.spawner.stationary_quota() {
            let pos = self
                .boundary
                .random_interior(&mut self.rng)
                .unwrap_or_default();
            let id = self.next_entity_id();
            self.enemies.push(Enemy {
                id,
                kind: EnemyKind::Stationary,
                size: STATIONARY_SIZE,
                pos,
                vel: Vec2::ZERO,
                wander: None,
            });
            self.spawner.notify_spawned(EnemyKind::Stationary);
        }
    }

    /// Spawn one wandering enemy at the arena center with a sampled size
    fn spawn_wandering(&mut self) {
        let w = &self.config.wander;
        let size = if w.max_size > w.min_size {
            self.rng.random_range(w.min_size..w.max_size)
        } else {
            w.min_size
        };
        let wander = WanderState::new(w, &mut self.rng);
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            kind: EnemyKind::Wandering,
            size,
            pos: self.boundary.center(),
            vel: Vec2::ZERO,
            wander: Some(wander),
        });
        self.spawner.notify_spawned(EnemyKind::Wandering);
    }

    /// Advance the session by one fixed timestep
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        if self.phase != SessionPhase::Running {
            return;
        }

        // Player motion: input vector, scaled, clamped
        let dir = input.move_dir.normalize_or_zero();
        self.player.vel = dir * self.config.player.move_speed;
        self.player.pos = self.boundary.clamp(self.player.pos + self.player.vel * dt);

        // Enemy wandering
        for enemy in &mut self.enemies {
            if let Some(wander) = &mut enemy.wander {
                enemy.vel = wander.advance(dt, &self.config.wander, &mut self.rng);
                enemy.pos = self.boundary.clamp(enemy.pos + enemy.vel * dt);
            }
        }

        // Scheduled spawns due this tick
        let due = self.spawner.tick(dt);
        for _ in 0..due {
            self.spawn_wandering();
        }

        self.resolve_contacts();

        self.display.show_size(self.player.size);
    }

    /// Arbitrate every player/enemy overlap, in ascending enemy-id order
    fn resolve_contacts(&mut self) {
        let scale = self.config.scale_increment;
        let mut i = 0;
        while i < self.enemies.len() {
            let enemy = &self.enemies[i];
            let reach = self.player.radius(scale) + enemy.radius(scale);
            if self.player.pos.distance_squared(enemy.pos) > reach * reach {
                i += 1;
                continue;
            }

            match resolve(self.player.size, enemy.size, enemy.kind.contact_kind()) {
                CollisionOutcome::Consumed(new_size) => {
                    let kind = enemy.kind;
                    self.enemies.remove(i);
                    self.player.size = new_size;
                    self.audio.play_consume_cue();
                    self.spawner.notify_consumed(kind);
                    if new_size >= WIN_SIZE {
                        log::info!("player reached size {new_size}: win");
                        self.phase = SessionPhase::Won;
                        self.nav.load_win_scene();
                        return;
                    }
                }
                CollisionOutcome::Died => {
                    log::info!(
                        "player (size {}) consumed by enemy of size {}",
                        self.player.size,
                        self.enemies[i].size
                    );
                    self.phase = SessionPhase::Dead;
                    self.nav.load_end_scene();
                    return;
                }
                CollisionOutcome::Ignored => {
                    i += 1;
                }
            }
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn boundary(&self) -> &Boundary {
        &self.boundary
    }

    pub fn live_count(&self, kind: EnemyKind) -> u32 {
        self.spawner.live_count(kind)
    }
}
