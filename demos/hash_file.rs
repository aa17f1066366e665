//! File hashing example.
//!
//! Run with:
//!     cargo run --example hash_file -- /path/to/file

use std::env;
use std::fs::File;

use streamhash::{Blake3Processor, Fnv1a64, HasherConfig, hash_reader};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Cargo.toml".to_string());

    println!("Hashing file: {}\n", path);

    let metadata = std::fs::metadata(&path)?;
    println!("File size: {} bytes\n", metadata.len());

    // Stage 16 chunks per flush
    let config = HasherConfig::with_buffer(64, 64 * 16)?;

    let blake3 = hash_reader(File::open(&path)?, config, Blake3Processor::new())?;
    let fnv = hash_reader(File::open(&path)?, config, Fnv1a64::new())?;

    println!("blake3: {}", blake3);
    println!("fnv1a64: {}", fnv);

    Ok(())
}
