use boggle_solver::{Board, Error};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

/// Roll a random Boggle board and write it in the board file format.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Rows of the board. Without --rows and --cols a 4 x 4 board is rolled from
    /// the Hasbro dice, otherwise tiles follow english letter frequencies.
    #[arg(long, requires = "cols")]
    rows: Option<usize>,

    /// Columns of the board.
    #[arg(long, requires = "rows")]
    cols: Option<usize>,

    /// Seed for reproducible boards.
    #[arg(short, long)]
    seed: Option<u64>,

    /// File to write the board to instead of standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Opts::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Opts) -> Result<(), Error> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let board = Board::roll(opts.rows.zip(opts.cols), &mut rng)?;

    match opts.output {
        Some(path) => {
            fs::write(&path, board.to_string()).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            })?;
            info!(
                "wrote a {} x {} board to {}",
                board.rows(),
                board.cols(),
                path.display()
            );
        }
        None => print!("{}", board),
    }

    Ok(())
}
