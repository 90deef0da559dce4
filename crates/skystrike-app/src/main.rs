//! Headless demo sortie: drives the game loop thread through a scripted
//! flight and prints one snapshot summary line per second.

use std::time::Duration;

use skystrike_app::state::{GameLoopCommand, HostState};
use skystrike_core::commands::GameCommand;
use skystrike_flight::RawInput;

fn main() {
    let state = HostState::new();
    state.start_loop();

    if !state.send(GameLoopCommand::Game(GameCommand::StartGame)) {
        eprintln!("game loop thread gone");
        return;
    }
    state.send(GameLoopCommand::Game(GameCommand::ConfirmSpawn {
        lon: 7.57,
        lat: 46.55,
        alt: 3000.0,
        heading: 0.0,
    }));
    state.send(GameLoopCommand::Game(GameCommand::TransitionComplete));

    // Ten seconds of flight: gun burst in the middle, a flare at the end.
    for second in 0..10 {
        if let Ok(mut input) = state.input.lock() {
            *input = RawInput {
                fire: (3..5).contains(&second),
                fire_flare: second == 8,
                pitch_up: second == 6,
                ..Default::default()
            };
        }
        std::thread::sleep(Duration::from_secs(1));

        if let Ok(cell) = state.latest_snapshot.lock() {
            if let Some(snap) = cell.as_ref() {
                println!(
                    "t={:>6.2}s alt={:>6.0}m hdg={:>5.1} spd={:>5.0} npcs={} projectiles={} score={}",
                    snap.time.elapsed_secs,
                    snap.flight.position.alt,
                    snap.flight.heading,
                    snap.flight.speed,
                    snap.npcs.len(),
                    snap.projectiles.len(),
                    snap.flight.score,
                );
                for event in &snap.ui_events {
                    match serde_json::to_string(event) {
                        Ok(json) => println!("  ui: {json}"),
                        Err(err) => eprintln!("  ui event serialization failed: {err}"),
                    }
                }
            }
        }
    }

    state.send(GameLoopCommand::Shutdown);
}
