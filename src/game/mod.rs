//! Minimal game prototype core: deck shuffling and opening hands

pub mod state;
pub mod zone;

pub use state::{GameState, OPENING_HAND_SIZE};
pub use zone::{CardZone, Zone};
