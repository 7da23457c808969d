/// Shared kernel: error types, the crate-wide Result alias and
/// file-system safety checks used by several adapters.
pub mod error;
pub mod result;
pub mod security;

pub use result::Result;
