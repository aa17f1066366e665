//! Hash value types.
//!
//! - [`HashCode`] - variable-width hash value with hex formatting

mod code;

pub use code::HashCode;
