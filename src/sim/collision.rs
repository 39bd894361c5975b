//! Size-contest arbitration for player/enemy contacts
//!
//! The arbiter is a pure function: it looks at the two sizes and says what
//! should happen. All mutation (removing the enemy, growing the player,
//! ending the session) is done by the caller from the returned outcome.

/// What the contact report claims the player touched.
///
/// `Unknown` covers objects with no gameplay identity (decor, borders,
/// miswired colliders); those contacts must be invisible to gameplay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    WanderingEnemy,
    StationaryEnemy,
    Unknown,
}

/// Arbitration result for one contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The enemy is consumed; the player's new size is carried inside
    Consumed(u32),
    /// The enemy was bigger; the player is eliminated
    Died,
    /// No gameplay effect
    Ignored,
}

/// Resolve a player/enemy size contact.
///
/// Ties go to the player: equal sizes consume. An `Unknown` kind is a
/// defensive default, never fatal.
pub fn resolve(player_size: u32, enemy_size: u32, kind: ContactKind) -> CollisionOutcome {
    match kind {
        ContactKind::Unknown => {
            log::debug!("contact with unknown kind ignored");
            CollisionOutcome::Ignored
        }
        ContactKind::WanderingEnemy | ContactKind::StationaryEnemy => {
            if player_size >= enemy_size {
                CollisionOutcome::Consumed(player_size + enemy_size)
            } else {
                CollisionOutcome::Died
            }
        }
    }
}
