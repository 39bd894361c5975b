//! Munch headless demo
//!
//! Runs a full session with a simple autopilot standing in for the real
//! input provider: chase the nearest enemy we can eat, flee anything
//! bigger. Collaborators are wired to the log and stdout.

use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use munch::consts::SIM_DT;
use munch::sim::{Boundary, GameSession, Rect, SessionPhase, TickInput};
use munch::{AudioSink, GameConfig, Navigation, SizeDisplay};

/// Logs scene transitions instead of loading scenes
struct LogNavigation;

impl Navigation for LogNavigation {
    fn load_menu(&mut self) {
        log::info!("nav: menu");
    }
    fn load_game(&mut self) {
        log::info!("nav: game");
    }
    fn load_end_scene(&mut self) {
        log::info!("nav: end scene (died)");
    }
    fn load_win_scene(&mut self) {
        log::info!("nav: win scene");
    }
    fn quit(&mut self) {
        log::info!("nav: quit");
    }
}

struct LogAudio;

impl AudioSink for LogAudio {
    fn play_consume_cue(&mut self) {
        log::debug!("audio: pop");
    }
}

/// Prints the size whenever it changes
#[derive(Default)]
struct StdoutDisplay {
    last: Option<u32>,
}

impl SizeDisplay for StdoutDisplay {
    fn show_size(&mut self, size: u32) {
        if self.last != Some(size) {
            println!("Size: {size}");
            self.last = Some(size);
        }
    }
}

/// Pick a movement direction: toward the nearest smaller-or-equal enemy,
/// away from the nearest bigger one if it is uncomfortably close.
fn autopilot(session: &GameSession) -> Vec2 {
    let player = session.player();

    let mut toward: Option<(f32, Vec2)> = None;
    let mut away: Option<(f32, Vec2)> = None;
    for enemy in session.enemies() {
        let offset = enemy.pos - player.pos;
        let dist = offset.length();
        if enemy.size <= player.size {
            if toward.is_none_or(|(best, _)| dist < best) {
                toward = Some((dist, offset));
            }
        } else if dist < 4.0 && away.is_none_or(|(best, _)| dist < best) {
            away = Some((dist, offset));
        }
    }

    if let Some((_, threat)) = away {
        return -threat.normalize_or_zero();
    }
    toward
        .map(|(_, prey)| prey.normalize_or_zero())
        .unwrap_or(Vec2::ZERO)
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("seed: {seed}");

    let borders = [
        Rect::new(Vec2::new(-16.0, -9.0), Vec2::new(-15.0, 9.0)),
        Rect::new(Vec2::new(15.0, -9.0), Vec2::new(16.0, 9.0)),
        Rect::new(Vec2::new(-16.0, 8.0), Vec2::new(16.0, 9.0)),
        Rect::new(Vec2::new(-16.0, -9.0), Vec2::new(16.0, -8.0)),
    ];

    let mut session = match GameSession::new(
        GameConfig::default(),
        &borders,
        seed,
        Box::new(LogNavigation),
        Box::new(LogAudio),
        Box::new(StdoutDisplay::default()),
    ) {
        Ok(session) => session,
        Err(e) => {
            log::error!("refusing to start: {e}");
            std::process::exit(1);
        }
    };

    if let Boundary::Bounded { min, max } = *session.boundary() {
        log::info!("arena: {min} to {max}");
    }

    // Ten simulated minutes, tops
    let max_ticks = (600.0 / SIM_DT) as u64;
    for tick in 0..max_ticks {
        let input = TickInput {
            move_dir: autopilot(&session),
        };
        session.tick(&input, SIM_DT);

        match session.phase() {
            SessionPhase::Running => {}
            SessionPhase::Won => {
                println!("Won after {:.1}s", tick as f32 * SIM_DT);
                return;
            }
            SessionPhase::Dead => {
                println!(
                    "Died at size {} after {:.1}s",
                    session.player().size,
                    tick as f32 * SIM_DT
                );
                return;
            }
        }
    }
    println!("Time limit reached at size {}", session.player().size);
}
