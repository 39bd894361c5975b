//! Idle/Moving wander behavior for autonomous enemies
//!
//! A tiny two-state machine evaluated once per tick. There is no blocking
//! or suspension anywhere: each call consumes `dt`, maybe flips the phase,
//! and reports the velocity for this tick. Given a seeded RNG the whole
//! walk is reproducible.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use std::f32::consts::TAU;

use crate::config::WanderConfig;
use crate::unit_from_angle;

/// Which half of the walk cycle the entity is in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WanderPhase {
    Idle,
    Moving,
}

/// Per-entity wander state
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WanderState {
    pub phase: WanderPhase,
    /// Seconds left in the current phase
    pub remaining: f32,
    /// Unit direction; only meaningful while Moving
    pub direction: Vec2,
}

/// Sample a duration from [min, max). Equal bounds are allowed and yield min.
fn sample_duration(rng: &mut Pcg32, min: f32, max: f32) -> f32 {
    if max > min { rng.random_range(min..max) } else { min }
}

/// Uniform direction over the unit circle
fn sample_direction(rng: &mut Pcg32) -> Vec2 {
    unit_from_angle(rng.random_range(0.0..TAU))
}

impl WanderState {
    /// Fresh state: Idle, with a sampled idle duration
    pub fn new(config: &WanderConfig, rng: &mut Pcg32) -> Self {
        Self {
            phase: WanderPhase::Idle,
            remaining: sample_duration(rng, config.min_idle_duration, config.max_idle_duration),
            direction: Vec2::ZERO,
        }
    }

    /// Advance the state machine by `dt` and return this tick's velocity.
    ///
    /// Velocity is exactly zero while Idle and exactly
    /// `direction * config.speed` while Moving. The caller integrates the
    /// position and clamps it to the boundary.
    pub fn advance(&mut self, dt: f32, config: &WanderConfig, rng: &mut Pcg32) -> Vec2 {
        self.remaining -= dt;
        match self.phase {
            WanderPhase::Idle => {
                if self.remaining <= 0.0 {
                    self.phase = WanderPhase::Moving;
                    self.remaining =
                        sample_duration(rng, config.min_move_duration, config.max_move_duration);
                    self.direction = sample_direction(rng);
                }
                Vec2::ZERO
            }
            WanderPhase::Moving => {
                let velocity = self.direction * config.speed;
                if self.remaining <= 0.0 {
                    self.phase = WanderPhase::Idle;
                    self.remaining =
                        sample_duration(rng, config.min_idle_duration, config.max_idle_duration);
                    self.direction = Vec2::ZERO;
                }
                velocity
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn config() -> WanderConfig {
        WanderConfig {
            speed: 2.0,
            min_size: 1,
            max_size: 6,
            min_move_duration: 1.0,
            max_move_duration: 1.0,
            min_idle_duration: 0.5,
            max_idle_duration: 0.5,
        }
    }

    #[test]
    fn test_starts_idle_with_zero_velocity() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut state = WanderState::new(&config, &mut rng);
        assert_eq!(state.phase, WanderPhase::Idle);
        let v = state.advance(0.1, &config, &mut rng);
        assert_eq!(v, Vec2::ZERO);
    }

    #[test]
    fn test_idle_expiry_starts_moving_with_unit_direction() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut state = WanderState::new(&config, &mut rng);

        // Burn through the 0.5s idle window
        state.advance(0.5, &config, &mut rng);
        assert_eq!(state.phase, WanderPhase::Moving);
        assert!((state.direction.length() - 1.0).abs() < 1e-5);

        let v = state.advance(0.1, &config, &mut rng);
        assert_eq!(v, state.direction * config.speed);
        assert!(v.length() > 0.0);
    }

    #[test]
    fn test_moving_expiry_returns_to_idle() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut state = WanderState::new(&config, &mut rng);

        state.advance(0.5, &config, &mut rng); // -> Moving (1.0s)
        state.advance(1.0, &config, &mut rng); // -> Idle again
        assert_eq!(state.phase, WanderPhase::Idle);
        assert_eq!(state.advance(0.1, &config, &mut rng), Vec2::ZERO);
    }

    #[test]
    fn test_deterministic_under_equal_seeds() {
        let config = config();
        let mut rng_a = Pcg32::seed_from_u64(99);
        let mut rng_b = Pcg32::seed_from_u64(99);
        let mut a = WanderState::new(&config, &mut rng_a);
        let mut b = WanderState::new(&config, &mut rng_b);

        for _ in 0..500 {
            let va = a.advance(0.05, &config, &mut rng_a);
            let vb = b.advance(0.05, &config, &mut rng_b);
            assert_eq!(va, vb);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_velocity_nonzero_only_while_moving() {
        let config = config();
        let mut rng = Pcg32::seed_from_u64(17);
        let mut state = WanderState::new(&config, &mut rng);

        for _ in 0..1000 {
            let phase_before = state.phase;
            let v = state.advance(0.03, &config, &mut rng);
            match phase_before {
                WanderPhase::Idle => assert_eq!(v, Vec2::ZERO),
                WanderPhase::Moving => assert!(v.length() > 0.0),
            }
        }
    }
}
