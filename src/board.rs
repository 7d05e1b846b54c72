use crate::error::Error;
use crate::letter::Letter;
use once_cell::sync::Lazy;
use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// the sixteen dice of the 1992 Hasbro edition. a Q face is read as QU.
const HASBRO_DICE: [&[u8; 6]; 16] = [
    b"LRYTTE", b"VTHRWE", b"EGHWNE", b"SEOTIS", b"ANAEEG", b"IDSYTT", b"OATTOW", b"MTOICU",
    b"AFPKFS", b"XLDERI", b"HCPOAS", b"ENSIEU", b"YLDEVR", b"ZNRNHL", b"NMIQHU", b"OBBAOJ",
];

/// side length of a dice board
const DICE_BOARD_SIDE: usize = 4;

/// relative frequency of each letter in english text, A to Z
const FREQUENCIES: [f64; 26] = [
    0.08167, 0.01492, 0.02782, 0.04253, 0.12703, 0.02228, 0.02015, 0.06094, 0.06966, 0.00153,
    0.00772, 0.04025, 0.02406, 0.06749, 0.07507, 0.01929, 0.00095, 0.05987, 0.06327, 0.09056,
    0.02758, 0.00978, 0.02360, 0.00150, 0.01974, 0.00074,
];

static LETTER_DISTRIBUTION: Lazy<WeightedIndex<f64>> = Lazy::new(|| {
    WeightedIndex::new(FREQUENCIES).expect("letter frequencies are positive and finite")
});

static DIMENSIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(\d+)\s+(\d+)\s*$").unwrap());

static TILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:[A-Z]|Q[uU])$").unwrap());

/// an immutable grid of letters. (0, 0) is the top left corner.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// tiles are read from left to right, top to bottom
    tiles: Vec<Letter>,
}

impl Board {
    /// constructor. `tiles` holds the grid row by row.
    pub fn new(rows: usize, cols: usize, tiles: Vec<Letter>) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(Error::MalformedBoard(format!(
                "a board needs at least one row and one column but {} x {} was requested",
                rows, cols
            )));
        }
        if rows.checked_mul(cols) != Some(tiles.len()) {
            return Err(Error::MalformedBoard(format!(
                "a {} x {} board needs {} tiles but {} were given",
                rows,
                cols,
                rows.saturating_mul(cols),
                tiles.len()
            )));
        }

        Ok(Self { rows, cols, tiles })
    }

    /// build a board from a vector of rows, which must all be the same length
    pub fn from_rows(grid: Vec<Vec<Letter>>) -> Result<Self, Error> {
        let rows = grid.len();
        let cols = grid.first().map_or(0, Vec::len);
        if let Some(ragged) = grid.iter().position(|row| row.len() != cols) {
            return Err(Error::MalformedBoard(format!(
                "row {} has {} tiles but row 0 has {}",
                ragged,
                grid[ragged].len(),
                cols
            )));
        }

        Self::new(rows, cols, grid.into_iter().flatten().collect())
    }

    /// read a board in the text format produced by `Display`
    pub fn from_file<P: AsRef<Path>>(board_file_path: P) -> Result<Self, Error> {
        let path = board_file_path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        contents.parse()
    }

    /// roll a 4 x 4 board from the Hasbro dice: the dice are shuffled into the grid
    /// and each shows a random face.
    pub fn random_dice<R: Rng>(rng: &mut R) -> Self {
        let mut dice = HASBRO_DICE;
        dice.shuffle(rng);

        let tiles = dice
            .iter()
            .map(|die| Letter::from((die[rng.random_range(0..die.len())] - b'A') as usize))
            .collect();

        Self {
            rows: DICE_BOARD_SIDE,
            cols: DICE_BOARD_SIDE,
            tiles,
        }
    }

    /// a board whose tiles are drawn independently according to english letter frequencies
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, Error> {
        let tile_count = rows.checked_mul(cols).ok_or_else(|| {
            Error::MalformedBoard(format!("a {} x {} board is too large", rows, cols))
        })?;
        let tiles = (0..tile_count)
            .map(|_| Letter::from(LETTER_DISTRIBUTION.sample(rng)))
            .collect();

        Self::new(rows, cols, tiles)
    }

    /// a dice board when no dimensions are given, a letter frequency board otherwise
    pub fn roll<R: Rng>(dimensions: Option<(usize, usize)>, rng: &mut R) -> Result<Self, Error> {
        match dimensions {
            Some((rows, cols)) => Self::random(rows, cols, rng),
            None => Ok(Self::random_dice(rng)),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// the letter at (row, col). panics outside of the board.
    #[inline(always)]
    pub fn letter(&self, row: usize, col: usize) -> Letter {
        assert!(
            row < self.rows && col < self.cols,
            "({}, {}) is outside of a {} x {} board",
            row,
            col,
            self.rows,
            self.cols
        );
        self.tiles[row * self.cols + col]
    }
}

/// parse a single tile. Q, Qu and QU all denote the QU tile.
fn parse_tile(token: &str) -> Result<Letter, Error> {
    if !TILE.is_match(token) {
        return Err(Error::MalformedBoard(format!(
            "invalid tile {:?}. tiles are single upper case letters or Qu",
            token
        )));
    }
    // the regex guarantees the first character is an upper case letter
    Letter::try_from(token.chars().next().unwrap_or_default())
        .map_err(|c| Error::MalformedBoard(format!("invalid tile character {:?}", c)))
}

impl FromStr for Board {
    type Err = Error;

    /// the first non-blank line holds the dimensions `ROWS COLS`, each of the
    /// following `ROWS` lines holds `COLS` whitespace separated tiles.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().filter(|line| !line.trim().is_empty());

        let header = lines
            .next()
            .ok_or_else(|| Error::MalformedBoard("missing board dimensions".to_owned()))?;
        let captures = DIMENSIONS.captures(header).ok_or_else(|| {
            Error::MalformedBoard(format!(
                "expected dimensions \"ROWS COLS\" but found {:?}",
                header
            ))
        })?;
        let parse_dimension = |text: &str| {
            text.parse::<usize>()
                .map_err(|e| Error::MalformedBoard(format!("bad dimension {:?}: {}", text, e)))
        };
        let rows = parse_dimension(&captures[1])?;
        let cols = parse_dimension(&captures[2])?;

        let mut grid = Vec::with_capacity(rows.min(s.len()));
        for row in 0..rows {
            let line = lines.next().ok_or_else(|| {
                Error::MalformedBoard(format!("expected {} rows but found {}", rows, row))
            })?;
            let tiles = line
                .split_whitespace()
                .map(parse_tile)
                .collect::<Result<Vec<Letter>, Error>>()?;
            if tiles.len() != cols {
                return Err(Error::MalformedBoard(format!(
                    "row {} has {} tiles but the board has {} columns",
                    row,
                    tiles.len(),
                    cols
                )));
            }
            grid.push(tiles);
        }

        if let Some(extra) = lines.next() {
            return Err(Error::MalformedBoard(format!(
                "unexpected line after the last row: {:?}",
                extra
            )));
        }

        Self::new(rows, cols, grid.into_iter().flatten().collect())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.rows, self.cols)?;
        for row in self.tiles.chunks(self.cols) {
            let line: Vec<String> = row
                .iter()
                .map(|letter| match letter {
                    Letter::Q => "Qu".to_owned(),
                    other => format!("{:<2}", other.to_char()),
                })
                .collect();
            writeln!(f, "{}", line.join(" ").trim_end())?;
        }
        Ok(())
    }
}
