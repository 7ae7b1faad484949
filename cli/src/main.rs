//! The arraysum CLI tool

mod util;

use std::io;

use arraysum::{FillOptions, SumMode, ARRAY_LEN, MAX_VALUE, MIN_VALUE};
use clap::Parser;
use env_logger::{Builder, Target};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "arraysum", author, version, about, long_about = None)]
struct Cli {
    #[arg(long, hide = true)]
    markdown_help: bool,

    /// Set log filter value [ off, error, warn, info, debug, trace ]
    #[arg(long)]
    #[arg(default_value_t = LevelFilter::Warn)]
    log_level: LevelFilter,

    /// Whether the printed accumulator keeps its initial value ("observed")
    /// or holds the sum of all elements ("intended").
    #[arg(long)]
    #[arg(default_value_t = SumMode::Observed)]
    #[arg(value_parser = clap_enum_variants!(SumMode))]
    mode: SumMode,

    /// Seed for the random generator. Seeded from the OS if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of array elements.
    #[arg(long)]
    #[arg(default_value_t = ARRAY_LEN)]
    len: usize,

    /// Smallest element value (inclusive).
    #[arg(long)]
    #[arg(default_value_t = MIN_VALUE)]
    min: u32,

    /// Largest element value (inclusive).
    #[arg(long)]
    #[arg(default_value_t = MAX_VALUE)]
    max: u32,
}

fn main() {
    let args = Cli::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        // stdout only carries the result
        .target(Target::Stderr)
        .init();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
    } else {
        run_command(args);
    }
}

#[allow(clippy::print_stderr)]
fn run_command(args: Cli) {
    let options = FillOptions {
        len: args.len,
        min: args.min,
        max: args.max,
        seed: args.seed,
    };
    log::debug!("Running with {options:?} in {} mode", args.mode);

    let mut out = io::stdout().lock();
    if let Err(error) = arraysum::run(&options, args.mode, &mut out) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
