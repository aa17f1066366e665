//! The streaming hasher and its I/O adapters.

mod engine;
mod io;

pub use engine::StreamingHasher;
pub use io::{READ_BUFFER_SIZE, hash_reader};
