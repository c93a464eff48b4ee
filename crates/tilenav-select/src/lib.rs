//! Move selection on a tile grid.
//!
//! [`Selection`] strings the search queries together the way a pointer-driven
//! tactics UI uses them: place an entity, show where it can go, preview the
//! route to the hovered tile with arrows, then walk it one tile at a time.
//! Drawing, input handling and animation stay with the caller.

pub mod config;
pub mod selection;

pub use config::SelectConfig;
pub use selection::{SelectError, Selection};
