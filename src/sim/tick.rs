//! Fixed timestep simulation tick
//!
//! One call advances everything in strict order: sweep angle, shape
//! positions, beam wedge, detection tracker, wave overlays. All mutation is
//! serialized through the single `RadarState`; nothing here blocks or
//! suspends.

use crate::sim::state::RadarState;
use crate::sim::wave::Wave;

/// Advance the simulation by one tick of `dt` seconds
pub fn tick(state: &mut RadarState, dt: f32) {
    state.time_ticks += 1;
    state.time_secs += dt;

    state.sweep.advance();

    let bounds = state.config.bounds();
    for shape in &mut state.shapes {
        shape.advance(bounds);
    }

    let wedge = state.sweep.wedge();
    let new_hits = state.tracker.update(&state.shapes, &wedge, state.time_secs);

    // Spawn an echo ring at every fresh detection, then age the rings
    for pos in new_hits {
        state.waves.push(Wave::echo(pos, state.config.sweep_length));
    }
    for wave in &mut state.waves {
        wave.update(dt);
    }
    state.waves.retain(|w| w.active);
}
