//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Stable iteration order (insertion order of balls, table order of cushions)
//! - No rendering or platform dependencies

pub mod collision;
pub mod rack;
pub mod state;
pub mod table;
pub mod tick;

pub use collision::{balls_approaching, balls_overlap, cushion_hit, exchange_normal_velocity};
pub use rack::reference_rack;
pub use state::{Ball, BallLabel, BallView, MotionState, Snapshot};
pub use table::{Cushion, Orientation, Table};
pub use tick::{Engine, TickInput};
