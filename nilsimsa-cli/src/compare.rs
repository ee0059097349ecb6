use std::error::Error;

use clap::Parser;

use nilsimsa_cli::{init_tracing, resolve_operand};

#[derive(Parser, Debug)]
#[clap(
    name = "nilsimsa-compare",
    about = "A program to compare two inputs with their Nilsimsa digests."
)]
struct Args {
    /// Left-side operand, a hex digest or a file path.
    lhs: String,

    /// Right-side operand, a hex digest or a file path.
    rhs: String,

    /// Treats both operands as hex digests.
    #[clap(short = 'x', long)]
    hex: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    let args = Args::parse();

    let lhs = resolve_operand(&args.lhs, args.hex)?;
    let rhs = resolve_operand(&args.rhs, args.hex)?;
    tracing::debug!(%lhs, %rhs, "Comparing");

    println!("difference,score");
    println!("{},{}", lhs.bitwise_difference(&rhs), lhs.compare(&rhs));

    Ok(())
}
