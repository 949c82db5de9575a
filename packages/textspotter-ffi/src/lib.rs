//! Runtime binding to the native `textspotter` library.
//!
//! The library is opened once with [`NativeTextSpotter::load`] and consumed
//! through the [`TextSpotter`] trait, which callers can also implement with
//! test doubles.

pub mod engine;
pub mod native;
pub mod position;

pub use engine::{MatchRequest, SpotterError, TextSpotter};
pub use native::{default_library_path, NativeTextSpotter};
pub use position::{MatchResult, Position};
