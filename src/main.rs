//! Headless driver: racks the table, plays one break and prints the final frame

use std::path::PathBuf;

use glam::DVec2;
use snooker_sim::sim::{Engine, reference_rack};
use snooker_sim::{AimController, Settings};

/// Where the scripted break aims (just above the apex red)
const BREAK_AIM: DVec2 = DVec2::new(90.0, 51.0);
/// Where the scripted drag is released (pulled back behind the cue ball)
const BREAK_RELEASE: DVec2 = DVec2::new(40.0, 51.0);

fn main() {
    env_logger::init();
    log::info!("Snooker Sim (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(&PathBuf::from(path)),
        None => Settings::default(),
    };

    let mut engine = Engine::from_settings(&settings, reference_rack(&settings));
    let mut aim = AimController::new(engine.table());

    // Pointer gesture: hover to aim, press, drag back, release
    aim.pointer_move(BREAK_AIM);
    aim.pointer_down();
    aim.pointer_move(BREAK_RELEASE);
    if let Some(cue) = engine.cue_ball().map(|b| b.pos) {
        aim.pointer_up(cue);
    }

    loop {
        let input = aim.next_input();
        engine.tick(&input);

        if engine.all_stopped() {
            log::info!("All balls stopped after {} ticks", engine.ticks());
            break;
        }
        if engine.ticks() >= settings.max_ticks {
            log::warn!("Gave up after {} ticks with balls still moving", engine.ticks());
            break;
        }
    }

    log::info!(
        "Pocketed {} ball(s): {:?}",
        engine.pocketed().len(),
        engine.pocketed()
    );

    match serde_json::to_string_pretty(&engine.snapshot()) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize snapshot: {}", e),
    }
}
