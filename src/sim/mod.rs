//! The headless game simulation
//!
//! Everything that decides the outcome of a session lives in this module,
//! and two sessions built from the same config, borders and seed must play
//! out identically. To keep that true:
//! - advance time only through `GameSession::tick` with an explicit `dt`
//! - draw randomness only from the session's seeded `Pcg32`
//! - visit enemies in ascending-id order
//! - call out to nothing but the injected `services` traits

pub mod boundary;
pub mod collision;
pub mod session;
pub mod spawner;
pub mod state;
pub mod wander;

pub use boundary::{Boundary, Rect};
pub use collision::{resolve, CollisionOutcome, ContactKind};
pub use session::{GameSession, SessionPhase, TickInput};
pub use spawner::Spawner;
pub use state::{Enemy, EnemyKind, Player};
pub use wander::{WanderPhase, WanderState};
