//! Deterministic radar simulation
//!
//! All detection logic lives here. This module must stay pure and
//! deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable shape order (spawn order, ids monotonic)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod shape;
pub mod state;
pub mod sweep;
pub mod tick;
pub mod tracker;
pub mod wave;

pub use geometry::{Triangle, edge_sign};
pub use shape::{Shape, ShapeKind};
pub use state::{RadarState, SimError};
pub use sweep::Sweep;
pub use tick::tick;
pub use tracker::{DetectionRecord, DetectionTracker};
pub use wave::{Wave, WaveKind};
