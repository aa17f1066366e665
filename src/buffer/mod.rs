//! Byte storage used by the hasher.
//!
//! - [`ByteWindow`] - public position/limit cursor over caller bytes
//! - `StagingBuffer` - internal fixed-capacity staging area, one per hasher

mod staging;
mod window;

pub(crate) use staging::StagingBuffer;
pub use window::ByteWindow;
