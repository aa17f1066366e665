//! Putting values into a hasher and watching the chunks go by.
//!
//! Run with:
//!     cargo run --example put_values

use streamhash::{ChunkCall, HasherConfig, Recording, StreamingHasher};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = HasherConfig::new(8)?;
    let mut hasher = StreamingHasher::new(config, Recording::new());

    println!("Chunk size: {} bytes\n", config.chunk_size());

    hasher
        .put_int(0x0403_0201)?
        .put_long(-1)?
        .put_str("streamhash")?
        .put_char(u16::from(b'!'))?
        .put_double(std::f64::consts::PI)?;

    println!("Consumed {} bytes, {} staged\n", hasher.bytes_consumed(), hasher.buffered_len());

    let calls = hasher.hash();
    for (i, call) in calls.iter().enumerate() {
        match call {
            ChunkCall::Full(chunk) => {
                println!("Chunk {}: full  {:02x?}", i + 1, chunk);
            }
            ChunkCall::Final { chunk, valid_len } => {
                println!(
                    "Chunk {}: final {:02x?} ({} bytes + {} padding)",
                    i + 1,
                    chunk,
                    valid_len,
                    chunk.len() - valid_len
                );
            }
        }
    }

    println!("\nTotal: {} chunks", calls.len());

    Ok(())
}
