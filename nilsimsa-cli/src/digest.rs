use std::error::Error;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use nilsimsa::Nilsimsa;
use nilsimsa_cli::{digest_reader, init_tracing, read_lines};

#[derive(Parser, Debug)]
#[clap(
    name = "nilsimsa-digest",
    about = "A program to print Nilsimsa digests of files."
)]
struct Args {
    /// File path to be digested. Can be given more than once.
    /// If None, the standard input is digested.
    #[clap(short = 'i', long)]
    input_path: Vec<PathBuf>,

    /// Digests every line separately instead of the whole input.
    #[clap(short = 'l', long)]
    lines: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();

    let input_paths = args.input_path;
    let lines = args.lines;

    if input_paths.is_empty() {
        print_digests(io::stdin().lock(), "-", lines)?;
    }
    for path in &input_paths {
        tracing::debug!(path = %path.display(), "Digesting");
        print_digests(File::open(path)?, &path.display().to_string(), lines)?;
    }

    Ok(())
}

fn print_digests<R>(rdr: R, name: &str, lines: bool) -> io::Result<()>
where
    R: io::Read,
{
    if lines {
        let mut hasher = Nilsimsa::new();
        for (i, line) in read_lines(rdr)?.iter().enumerate() {
            println!("{}  {name}:{}", hasher.digest_data(line), i + 1);
        }
    } else {
        println!("{}  {name}", digest_reader(rdr)?);
    }
    Ok(())
}
