use std::{
    fs,
    io::{self, BufWriter, Write},
    process::ExitCode,
};

use clap::Parser;
use grapher::{
    interpreter::sampler::{DEFAULT_SAMPLE_COUNT, DEFAULT_STEP, SampleGrid},
    load_formula,
};

/// grapher samples a prefix-notation formula in `x` and prints one `x y` pair
/// per line, ready to be piped into a plotting tool.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells grapher to read the formula from a file instead of the argument.
    #[arg(short, long)]
    file: bool,

    /// Number of samples.
    #[arg(short, long, default_value_t = DEFAULT_SAMPLE_COUNT)]
    count: u32,

    /// Distance between neighbouring samples.
    #[arg(short, long, default_value_t = DEFAULT_STEP)]
    step: f64,

    contents: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    let formula = match load_formula(&source) {
        Ok(formula) => formula,
        Err(e) => {
            eprintln!("invalid formula: {e}");
            return ExitCode::FAILURE;
        },
    };

    let points = match formula.sample(SampleGrid::new(args.count, args.step)) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        },
    };

    let mut out = BufWriter::new(io::stdout().lock());
    for point in points {
        if writeln!(out, "{} {}", point.x, point.y).is_err() {
            return ExitCode::FAILURE;
        }
    }
    if out.flush().is_err() {
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
