use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use nilsimsa_cli::{init_tracing, read_lines};
use nilsimsa_search::DuplicateSearcher;

#[derive(Parser, Debug)]
#[clap(
    name = "nilsimsa-find_dups",
    about = "A program to find near-duplicate documents with Nilsimsa digests."
)]
struct Args {
    /// File path to a document file to be searched, one document per line.
    /// Empty lines must not be included.
    #[clap(short = 'i', long)]
    document_path: PathBuf,

    /// Maximum number of differing bits in the range of [0,256].
    #[clap(short = 'r', long, default_value = "24")]
    max_difference: u32,

    /// Prints groups of documents with identical digests instead of similar pairs.
    #[clap(short = 'e', long)]
    exact: bool,

    /// Disables parallel construction.
    #[clap(short = 'p', long)]
    disable_parallel: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();

    let document_path = args.document_path;
    let max_difference = args.max_difference;
    let exact = args.exact;
    let disable_parallel = args.disable_parallel;

    let searcher = {
        tracing::info!("Converting documents into digests...");
        let start = Instant::now();
        let documents = read_lines(File::open(&document_path)?)?;
        let searcher = DuplicateSearcher::new().shows_progress(true);
        let searcher = if disable_parallel {
            searcher.build_digests(documents)?
        } else {
            searcher.build_digests_in_parallel(documents)?
        };
        tracing::info!(
            "Produced {} digests in {} sec",
            searcher.len(),
            start.elapsed().as_secs_f64()
        );
        searcher
    };

    if exact {
        for group in searcher.exact_duplicates() {
            let ids: Vec<_> = group.iter().map(|i| i.to_string()).collect();
            println!("{}", ids.join(","));
        }
        return Ok(());
    }

    tracing::info!("Finding all similar pairs in digests...");
    let start = Instant::now();
    let results = searcher.search_similar_pairs(max_difference)?;
    tracing::info!("Done in {} sec", start.elapsed().as_secs_f64());

    println!("i,j,dist");
    for (i, j, dist) in results {
        println!("{i},{j},{dist}");
    }

    Ok(())
}
