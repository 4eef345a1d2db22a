//! Catalogue and codec for two-dimensional cellular-automaton patterns
//!
//! Patterns are stored as rectangular grid text and served as origin-centred
//! sparse coordinate lists. The codec converts between the two through an
//! odd-sided square board, so decoded patterns are always centred on `(0, 0)`.

#![forbid(unsafe_code)]

/// File-backed pattern catalogue with name search
pub mod catalogue;
/// Grid text and pattern object conversion
pub mod codec;
/// Input/output operations and error handling
pub mod io;
/// Origin-centred board addressed by signed coordinates
pub mod spatial;

pub use io::error::{LifecatError, Result};
