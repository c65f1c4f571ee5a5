//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Whole-pixel positions, floored displacements
//! - No randomness
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod state;
pub mod tick;

pub use collision::{circle_rect_overlap, edges_overlap, player_hits_axe};
pub use motion::Movement;
pub use state::{Axe, GamePhase, GameState, Player, Rect, Ruleset, Score};
pub use tick::{TickInput, tick};
