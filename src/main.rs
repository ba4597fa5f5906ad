//! Ray Cannon entry point
//!
//! Opens the window and runs the fixed-rate frame loop.

use macroquad::input::prevent_quit;
use macroquad::window::{Conf, next_frame};

use ray_cannon::consts::{TICK_RATE, WORLD_HEIGHT, WORLD_WIDTH};
use ray_cannon::platform::{FramePacer, poll_input};
use ray_cannon::renderer::draw_frame;
use ray_cannon::settings::Settings;
use ray_cannon::sim::{SimState, tick};

fn window_conf() -> Conf {
    Conf {
        window_title: "Ray Cannon".to_owned(),
        window_width: WORLD_WIDTH as i32,
        window_height: WORLD_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    log::info!("Ray Cannon starting...");

    // Route window close through the loop so the last tick finishes cleanly
    prevent_quit();

    let mut state = SimState::new(Settings::default());
    let mut pacer = FramePacer::new(TICK_RATE);
    let mut dt = pacer.tick_duration().as_secs_f32();
    log::info!(
        "Scene ready: {} targets, {} rays per target",
        state.targets.len(),
        state.fan().len()
    );

    while state.is_running() {
        let input = poll_input();
        tick(&mut state, &input, dt);
        draw_frame(&state);
        next_frame().await;

        // Measured after the swap, so a vsync wait already counts toward the tick
        dt = pacer.finish_tick();
    }

    log::info!("Ray Cannon stopped after {} ticks", state.time_ticks);
}
