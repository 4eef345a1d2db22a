//! Pattern codec
//!
//! Converts between stored grid text and the origin-centred sparse pattern
//! objects served to clients:
//!
//! ```text
//! grid text --deserialize--> Board --serialize--> PatternObject
//! PatternObject --to_grid_text--> grid text
//! ```
//!
//! Every transform owns the board it builds, so all of them can run
//! concurrently without coordination.

/// Grid text to board
pub mod decode;
/// Board to pattern object
pub mod encode;
/// Pattern object and package types
pub mod pattern;
/// Pattern object to grid text
pub mod reencode;
/// Seeded random patterns
pub mod soup;
/// Package shape validation
pub mod validate;

pub use decode::deserialize;
pub use encode::serialize;
pub use pattern::{LiveCell, PatternObject, PatternPackage, PatternRecord};
pub use reencode::to_grid_text;
pub use validate::{is_valid_package, parse_package};
