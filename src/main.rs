use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use matgen::generate::generate_with_seed;
use matgen::matrix::Matrix;

/// Generate a matrix of uniform random integers and emit it as CSV
#[derive(Parser)]
struct Args {
    /// Number of rows
    #[arg(long)]
    rows: usize,

    /// Number of columns
    #[arg(long)]
    cols: usize,

    /// Smallest value an element may take (inclusive)
    #[arg(long, default_value_t = 0)]
    min: i64,

    /// Largest value an element may take (inclusive)
    #[arg(long, default_value_t = 255)]
    max: i64,

    /// Seed for reproducible output; omit for a fresh matrix each run
    #[arg(long)]
    seed: Option<u64>,

    /// Write the CSV to this file instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("matgen: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    // Progress goes to stderr so the CSV on stdout stays clean
    eprint!("Generating {}x{} matrix... ", args.rows, args.cols);
    let now = Instant::now();
    let matrix = generate_with_seed(args.rows, args.cols, args.min, args.max, args.seed)?;
    eprintln!("Done [{}ms]", now.elapsed().as_millis());

    let now = Instant::now();
    match &args.output {
        Some(path) => {
            write_csv(&matrix, File::create(path)?)?;
            eprintln!(
                "Wrote {} rows to {} [{}ms]",
                matrix.rows(),
                path.display(),
                now.elapsed().as_millis()
            );
        }
        None => write_csv(&matrix, io::stdout().lock())?,
    }
    Ok(())
}

// One record per matrix row, no headers
fn write_csv(matrix: &Matrix, writer: impl Write) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    for row in matrix.iter_rows() {
        writer.write_record(row.iter().map(|value| value.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
