//! Finds every dictionary word hidden in a Boggle board.
//!
//! A [`BoggleSolver`] stores its dictionary in a [`PrefixIndex`], a 26-way trie, and
//! walks every simple path through a [`Board`], abandoning a path as soon as no
//! dictionary word starts with the letters traced so far. The `Q` tile always reads
//! as `QU`.
//!
//! ```
//! use boggle_solver::{Board, BoggleSolver};
//!
//! let solver = BoggleSolver::new(["CAT", "CATS", "DOG"])?;
//! let board: Board = "2 2\nC A\nT S\n".parse()?;
//!
//! let words = solver.all_valid_words(&board);
//! assert!(words.contains("CATS"));
//! assert_eq!(solver.total_score(&words), 2);
//! # Ok::<(), boggle_solver::Error>(())
//! ```

pub mod board;
pub mod error;
pub mod letter;
pub mod prefix_index;
pub mod solver;
pub mod utilities;

pub use board::Board;
pub use error::Error;
pub use letter::Letter;
pub use prefix_index::PrefixIndex;
pub use solver::BoggleSolver;
