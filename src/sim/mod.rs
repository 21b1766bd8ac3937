//! Movement sandbox simulation
//!
//! All in-level gameplay lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Input arrives as a per-tick snapshot
//! - No rendering or platform dependencies

pub mod state;
pub mod tick;

pub use state::{Camera, Player, World};
pub use tick::{TickInput, tick};
