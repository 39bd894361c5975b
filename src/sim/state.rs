//! Core entity types
//!
//! Sizes are integers and never less than 1; a size-0 entity cannot be
//! constructed through any code path in this crate.

use glam::Vec2;

use crate::radius_for_size;
use crate::sim::collision::ContactKind;
use crate::sim::wander::WanderState;

/// Closed set of enemy kinds, dispatched by exhaustive match everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Wandering,
    Stationary,
}

impl EnemyKind {
    /// The kind a contact with this enemy reports to the arbiter
    pub fn contact_kind(self) -> ContactKind {
        match self {
            EnemyKind::Wandering => ContactKind::WanderingEnemy,
            EnemyKind::Stationary => ContactKind::StationaryEnemy,
        }
    }
}

/// An enemy entity
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub size: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Wander behavior; `None` for stationary enemies
    pub wander: Option<WanderState>,
}

impl Enemy {
    pub fn radius(&self, scale_increment: f32) -> f32 {
        radius_for_size(self.size, scale_increment)
    }
}

/// The player entity. Lives for the whole session.
#[derive(Debug, Clone)]
pub struct Player {
    pub size: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Player {
    pub fn radius(&self, scale_increment: f32) -> f32 {
        radius_for_size(self.size, scale_increment)
    }
}
