//! FM-Index Full-Text Search Example
//!
//! Builds an index over a file (or a built-in sample) and runs queries.
//!
//! ```bash
//! cargo run --example full_text_search -- [FILE] [PATTERN...]
//! ```

use std::process::ExitCode;

use fm_search::{Bytes, FmIndex, IndexConfig, RankStrategy};

const SAMPLE: &[u8] = b"the quick brown fox jumps over the lazy dog. \
                        the fox was quick and the dog was lazy. \
                        a quick brown dog outfoxed a lazy fox.";

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);

    let text = match args.next() {
        Some(path) => match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("failed to read {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => SAMPLE.to_vec(),
    };

    let mut queries: Vec<String> = args.collect();
    if queries.is_empty() {
        queries = ["fox", "the", "quick", "lazy", "cat", "brown fox"]
            .iter()
            .map(|q| q.to_string())
            .collect();
    }

    let config = IndexConfig::default().with_rank(RankStrategy::Wavelet);
    let index = match FmIndex::build_with(&text[..], Bytes::default(), config) {
        Ok(index) => index,
        Err(e) => {
            eprintln!("cannot index input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("=== fm-search FM-Index Demo ===\n");
    println!("{:#?}", index.stats());

    println!("\n--- Search Results ---\n");

    for query in &queries {
        match index.locate_all(query.as_bytes()) {
            Ok(positions) if positions.is_empty() => println!("  \"{}\" -> not found", query),
            Ok(positions) => println!(
                "  \"{}\" -> {} occurrences at positions {:?}",
                query,
                positions.len(),
                positions
            ),
            Err(e) => println!("  \"{}\" -> {}", query, e),
        }
    }
    ExitCode::SUCCESS
}
