mod engine;
pub mod ffi;

pub use engine::{default_library_path, NativeTextSpotter};
