//! Field extraction
//!
//! Resolves compiled field paths against one decoded record and coerces the
//! selected value into the scalar the caller asked for.

mod coerce;
mod error;
mod path;

pub use error::*;
pub use path::*;
