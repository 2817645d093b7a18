//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `time` - Timestamp capture and formatting
//! - `validation` - Input presence checks

pub mod io;
pub mod time;
pub mod validation;
