//! Collaborator traits injected into the session
//!
//! The simulation never talks to an engine directly. Scene transitions,
//! sound playback and the size readout all go through these traits, so a
//! test can substitute recorders and a frontend can wire in the real thing.

/// Scene transitions. Invoked by the session on terminal outcomes; the
/// remaining entry points exist for menu/frontend code built on this crate.
pub trait Navigation {
    fn load_menu(&mut self);
    fn load_game(&mut self);
    /// Death screen
    fn load_end_scene(&mut self);
    /// Victory screen
    fn load_win_scene(&mut self);
    fn quit(&mut self);
}

/// Fire-and-forget sound cues
pub trait AudioSink {
    /// Played whenever the player consumes an enemy
    fn play_consume_cue(&mut self);
}

/// Read-only consumer of the player's current size, fed once per tick
pub trait SizeDisplay {
    fn show_size(&mut self, size: u32);
}
