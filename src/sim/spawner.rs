//! Steady-state enemy population maintenance
//!
//! Stationary enemies are placed once, synchronously, at session start.
//! Wandering enemies ramp up after an initial delay, one per interval, and
//! consumed ones are replaced after a respawn delay. All delayed work is a
//! plain countdown entry drained once per tick; there is no suspension and
//! nothing here ever blocks.

use crate::config::SpawnPolicy;
use crate::sim::state::EnemyKind;

/// Ramp-up progress for the wandering population
#[derive(Debug, Clone, Copy, PartialEq)]
enum Ramp {
    /// Waiting out the initial delay before the first spawn
    InitialDelay(f32),
    /// Between cadence spawns
    Interval(f32),
    /// Population reached max; only respawn timers remain
    Done,
}

/// Tracks live counts per enemy kind and schedules wandering spawns.
///
/// The session is the only caller: it drains `tick`, materializes that many
/// enemies, and reports every spawn and consumption back via
/// `notify_spawned` / `notify_consumed`.
#[derive(Debug, Clone)]
pub struct Spawner {
    wandering: SpawnPolicy,
    stationary: SpawnPolicy,
    live_wandering: u32,
    live_stationary: u32,
    ramp: Ramp,
    /// Pending replacement spawns, as seconds-remaining countdowns
    respawn_timers: Vec<f32>,
}

impl Spawner {
    pub fn new(wandering: SpawnPolicy, stationary: SpawnPolicy) -> Self {
        let ramp = if wandering.max_count > 0 {
            Ramp::InitialDelay(wandering.initial_delay)
        } else {
            Ramp::Done
        };
        Self {
            wandering,
            stationary,
            live_wandering: 0,
            live_stationary: 0,
            ramp,
            respawn_timers: Vec::new(),
        }
    }

    /// How many stationary enemies the session must place at start
    pub fn stationary_quota(&self) -> u32 {
        self.stationary.max_count
    }

    pub fn live_count(&self, kind: EnemyKind) -> u32 {
        match kind {
            EnemyKind::Wandering => self.live_wandering,
            EnemyKind::Stationary => self.live_stationary,
        }
    }

    /// Advance all timers by `dt` and return how many wandering enemies are
    /// due to spawn this tick. Never asks for more than would fit under
    /// `max_count`; an expired timer that no longer fits is dropped silently.
    pub fn tick(&mut self, dt: f32) -> u32 {
        let mut due = 0u32;
        let mut room = self
            .wandering
            .max_count
            .saturating_sub(self.live_wandering);

        // Ramp: at most one cadence spawn per tick
        self.ramp = match self.ramp {
            Ramp::InitialDelay(t) => {
                let t = t - dt;
                if t > 0.0 {
                    Ramp::InitialDelay(t)
                } else if room > 0 {
                    due += 1;
                    room -= 1;
                    if room > 0 {
                        Ramp::Interval(self.wandering.spawn_interval)
                    } else {
                        Ramp::Done
                    }
                } else {
                    Ramp::Done
                }
            }
            Ramp::Interval(t) => {
                let t = t - dt;
                if t > 0.0 {
                    Ramp::Interval(t)
                } else if room > 0 {
                    due += 1;
                    room -= 1;
                    if room > 0 {
                        Ramp::Interval(self.wandering.spawn_interval)
                    } else {
                        Ramp::Done
                    }
                } else {
                    Ramp::Done
                }
            }
            Ramp::Done => Ramp::Done,
        };

        // Replacement timers
        for timer in &mut self.respawn_timers {
            *timer -= dt;
        }
        self.respawn_timers.retain(|&t| {
            if t > 0.0 {
                return true;
            }
            if room > 0 {
                due += 1;
                room -= 1;
            }
            false
        });

        due
    }

    /// Record a materialized spawn
    pub fn notify_spawned(&mut self, kind: EnemyKind) {
        match kind {
            EnemyKind::Wandering => self.live_wandering += 1,
            EnemyKind::Stationary => self.live_stationary += 1,
        }
    }

    /// Record a consumption. A wandering removal schedules exactly one
    /// replacement after `respawn_delay`, unless the population (live plus
    /// already-scheduled replacements) is still committed to `max_count`.
    pub fn notify_consumed(&mut self, kind: EnemyKind) {
        match kind {
            EnemyKind::Wandering => {
                self.live_wandering = self.live_wandering.saturating_sub(1);
                let committed = self.live_wandering + self.respawn_timers.len() as u32;
                if committed < self.wandering.max_count {
                    self.respawn_timers.push(self.wandering.respawn_delay);
                }
            }
            EnemyKind::Stationary => {
                self.live_stationary = self.live_stationary.saturating_sub(1);
            }
        }
    }
}
