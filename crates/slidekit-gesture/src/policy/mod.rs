//! Translate policies applied to every accepted drag sample, in order:
//! edge resistance first, then direction locks.

pub mod direction_lock;
pub mod resistance;

pub use direction_lock::{apply_direction_lock, AllowedDirections};
pub use resistance::{apply_edge_resistance, EdgeOutcome, Resistance, TranslateBounds};
