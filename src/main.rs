use boggle_solver::utilities::read_dictionary;
use boggle_solver::{Board, BoggleSolver, Error};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Find every dictionary word on a Boggle board and add up their scores.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Opts {
    /// Word list of upper case words separated by whitespace.
    dictionary: PathBuf,

    /// Board file: "ROWS COLS" on the first line, then one line of tiles per row.
    /// A random board is rolled when omitted.
    board: Option<PathBuf>,

    /// Rows of a random board. Without --rows and --cols a 4 x 4 board is rolled
    /// from the Hasbro dice.
    #[arg(long, requires = "cols", conflicts_with = "board")]
    rows: Option<usize>,

    /// Columns of a random board.
    #[arg(long, requires = "rows", conflicts_with = "board")]
    cols: Option<usize>,

    /// Seed for the random board.
    #[arg(short, long, conflicts_with = "board")]
    seed: Option<u64>,

    /// Only print the score and the time taken.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let opts = Opts::parse();
    debug!("command line options: {:?}", opts);

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(opts: Opts) -> Result<(), Error> {
    info!("reading words from {}", opts.dictionary.display());
    let solver = BoggleSolver::new(read_dictionary(&opts.dictionary)?)?;
    info!(
        "finished building a dictionary containing {} words",
        solver.dictionary().len()
    );

    let board = match &opts.board {
        Some(path) => Board::from_file(path)?,
        None => {
            let mut rng = match opts.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let board = Board::roll(opts.rows.zip(opts.cols), &mut rng)?;
            print!("{}", board);
            board
        }
    };

    let timer = Instant::now();
    let words = solver.all_valid_words(&board);
    let score = solver.total_score(&words);
    let elapsed = timer.elapsed();

    if !opts.quiet {
        let mut sorted: Vec<&String> = words.iter().collect();
        sorted.sort();
        for word in sorted {
            println!("{}", word);
        }
    }
    println!("Score = {}", score);
    println!("Time = {}", elapsed.as_secs_f64());

    Ok(())
}
