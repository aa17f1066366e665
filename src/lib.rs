//! streamhash
//!
//! Streaming incremental hashing over fixed-size chunks.
//!
//! `streamhash` accepts primitives and byte ranges of any size or alignment,
//! stages them into fixed-size chunks, and hands each chunk to a pluggable
//! [`ChunkProcessor`]. At finalization the trailing partial chunk is
//! zero-padded and processed once. It is a small building block for:
//!
//! - block-oriented hash functions that consume fixed-width input
//! - hashing structured records field by field
//! - hashing data that arrives in arbitrary pieces
//!
//! The crate intentionally:
//! - does NOT pick a hash function for you
//! - does NOT do any I/O of its own (the [`hash_reader`] adapter aside)
//! - does NOT synchronize; a hasher is a plain `&mut` value
//!
//! It only does one thing: **Put values → chunks → hash**
//!
//! # Example
//!
//! ```
//! use streamhash::{Fnv1a64, HasherConfig, StreamingHasher};
//!
//! let mut hasher = StreamingHasher::new(HasherConfig::new(8)?, Fnv1a64::new());
//! hasher
//!     .put_int(42)?
//!     .put_str("answer")?
//!     .put_bool(true)?;
//!
//! let code = hasher.hash();
//! assert_eq!(code.bits(), 64);
//! # Ok::<(), streamhash::HashError>(())
//! ```
//!
//! # Reading from `std::io`
//!
//! ```
//! use std::io::Cursor;
//! use streamhash::{hash_reader, HasherConfig};
//! # #[cfg(feature = "hash-blake3")]
//! use streamhash::Blake3Processor;
//!
//! # #[cfg(feature = "hash-blake3")]
//! # {
//! let code = hash_reader(
//!     Cursor::new(b"hello world"),
//!     HasherConfig::new(64)?,
//!     Blake3Processor::new(),
//! )?;
//! println!("{}", code);
//! # }
//! # Ok::<(), streamhash::HashError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod buffer;
mod config;
mod encode;
mod error;
mod hash;
mod hasher;
mod processor;

//
// Public surface
//

pub use buffer::ByteWindow;
pub use config::{DEFAULT_CHUNK_SIZE, HasherConfig};
pub use encode::LittleEndian;
pub use error::HashError;
pub use hash::HashCode;
pub use hasher::{READ_BUFFER_SIZE, StreamingHasher, hash_reader};
pub use processor::{ChunkCall, ChunkProcessor, Concat, Fnv1a64, Recording};

#[cfg(feature = "hash-blake3")]
pub use processor::Blake3Processor;

/// Result alias for fallible streamhash operations.
pub type Result<T> = std::result::Result<T, HashError>;
