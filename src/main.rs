//! Radar sweep headless driver
//!
//! Runs the simulation at a fixed timestep and logs what the beam paints.
//! A real frontend would call the same `tick` + query surface and draw the
//! sweep edges, the detection list and the mini-map shape list.

use radar_sweep::sim::{RadarState, ShapeKind, tick};
use radar_sweep::RadarConfig;

const DT: f32 = 1.0 / 60.0;
const RUN_SECONDS: f32 = 20.0;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| std::process::id() as u64);

    let config = RadarConfig::load("radar.json");
    let mut state = RadarState::new(config, seed);
    log::info!(
        "seed {seed}: {} shapes, sweep speed {:.3} rad/tick",
        state.shapes().len(),
        state.sweep.speed
    );

    let ticks = (RUN_SECONDS / DT) as u64;
    let mut last_count = 0usize;
    for _ in 0..ticks {
        tick(&mut state, DT);

        let count = state.detections().len();
        if count != last_count {
            let (_, e1, e2) = state.sweep_edges();
            log::info!(
                "t={:.2}s angle={:.2} beam=({:.0},{:.0})-({:.0},{:.0}) detections={}",
                state.time_secs,
                state.sweep.angle,
                e1.x,
                e1.y,
                e2.x,
                e2.y,
                count
            );
            last_count = count;
        }

        // Halfway through, drop in a fresh batch of movers
        if state.time_ticks == ticks / 2 {
            state.generate_shapes(5, ShapeKind::Ellipse);
        }
    }

    log::info!(
        "done: {} ticks, {} shapes, {} detections on screen",
        state.time_ticks,
        state.shapes().len(),
        state.detections().len()
    );
}
