//! Munch - a 2D grow-by-eating arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, spawning, session)
//! - `config`: Data-driven tuning with fatal startup validation
//! - `services`: Injected collaborator traits (navigation, audio, display)
//!
//! Rendering, input capture and scene management live outside this crate;
//! the simulation only talks to them through the `services` traits.

pub mod config;
pub mod services;
pub mod sim;

pub use config::{ConfigError, GameConfig, SpawnPolicy};
pub use services::{AudioSink, Navigation, SizeDisplay};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Player size at which the session is won
    pub const WIN_SIZE: u32 = 100;

    /// Stationary enemies always have this size
    pub const STATIONARY_SIZE: u32 = 1;
}

/// Entity contact radius from its integer size.
///
/// Sprites are scaled uniformly by `size * scale_increment`, so the
/// collision circle is half that.
#[inline]
pub fn radius_for_size(size: u32, scale_increment: f32) -> f32 {
    size as f32 * scale_increment * 0.5
}

/// Unit vector at the given angle (radians)
#[inline]
pub fn unit_from_angle(theta: f32) -> Vec2 {
    Vec2::new(theta.cos(), theta.sin())
}
