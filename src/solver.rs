use crate::board::Board;
use crate::error::Error;
use crate::prefix_index::{NodeId, PrefixIndex};
use crate::utilities::{points_for_length, MIN_WORD_LENGTH};
use log::{debug, trace};
use std::collections::HashSet;

/// offsets (row, col) of the eight tiles surrounding a tile
const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// finds and scores the dictionary words hidden in boards
pub struct BoggleSolver {
    dictionary: PrefixIndex,
}

impl BoggleSolver {
    /// build the solver's dictionary. duplicates are fine, but the whole list is
    /// rejected if any entry is empty or holds anything other than A-Z.
    pub fn new<I, S>(dictionary: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = PrefixIndex::from_words(dictionary)?;
        debug!("built dictionary containing {} words", dictionary.len());
        Ok(Self { dictionary })
    }

    pub fn dictionary(&self) -> &PrefixIndex {
        &self.dictionary
    }

    /// every distinct dictionary word of at least three letters that can be traced
    /// through adjacent tiles of `board` without using a tile twice.
    pub fn all_valid_words(&self, board: &Board) -> HashSet<String> {
        let mut search = Search::new(&self.dictionary, board);
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                search.enter(row, col, self.dictionary.root());
                search.exhaust();
            }
        }

        debug!(
            "found {} words on a {} x {} board",
            search.words.len(),
            board.rows(),
            board.cols()
        );
        search.words
    }

    /// score a word against the dictionary alone - whether it appears on any board
    /// does not matter. a missing word is an error.
    pub fn score_of(&self, word: Option<&str>) -> Result<u32, Error> {
        let word = word.ok_or(Error::InvalidArgument)?;
        Ok(self.score_word(word))
    }

    /// summed score of a collection of words
    pub fn total_score<I, S>(&self, words: I) -> u32
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .map(|word| self.score_word(word.as_ref()))
            .sum()
    }

    fn score_word(&self, word: &str) -> u32 {
        if word.len() < MIN_WORD_LENGTH || !self.dictionary.is_word(word) {
            return 0;
        }
        points_for_length(word.len())
    }
}

/// one tile on the current path
struct Frame {
    row: usize,
    col: usize,
    /// dictionary node reached by the path up to and including this tile
    node: NodeId,
    /// length of the prefix before this tile's letters were appended
    prefix_len: usize,
    /// index into NEIGHBOURS of the next neighbour to try
    next_neighbour: usize,
}

/// the state of a single board search. the path lives on an explicit stack so
/// that long paths cannot overflow the call stack.
struct Search<'a> {
    dictionary: &'a PrefixIndex,
    board: &'a Board,
    /// tiles on the current path, indexed row by row
    visited: Vec<bool>,
    /// letters of the current path with Q already expanded to QU
    prefix: String,
    stack: Vec<Frame>,
    words: HashSet<String>,
}

impl<'a> Search<'a> {
    fn new(dictionary: &'a PrefixIndex, board: &'a Board) -> Self {
        Self {
            dictionary,
            board,
            visited: vec![false; board.rows() * board.cols()],
            prefix: String::new(),
            stack: Vec::new(),
            words: HashSet::new(),
        }
    }

    /// try to extend the current path onto (row, col), whose predecessor reached `parent`.
    /// the path is only extended if some dictionary word starts with the extended prefix.
    #[inline(always)]
    fn enter(&mut self, row: usize, col: usize, parent: NodeId) {
        if row >= self.board.rows() || col >= self.board.cols() {
            return;
        }
        let tile = row * self.board.cols() + col;
        // do not re-use tiles
        if self.visited[tile] {
            return;
        }

        let letters = self.board.letter(row, col).expansion();
        let Some(node) = self.dictionary.descend(parent, letters) else {
            return;
        };

        self.visited[tile] = true;
        let prefix_len = self.prefix.len();
        self.prefix.extend(letters.iter().map(|letter| letter.to_char()));

        if self.prefix.len() >= MIN_WORD_LENGTH
            && self.dictionary.is_terminal(node)
            && !self.words.contains(&self.prefix)
        {
            trace!("found {} ending at ({}, {})", self.prefix, row, col);
            self.words.insert(self.prefix.clone());
        }

        self.stack.push(Frame {
            row,
            col,
            node,
            prefix_len,
            next_neighbour: 0,
        });
    }

    /// explore every extension of the current path, backtracking until the stack is empty
    fn exhaust(&mut self) {
        while let Some(frame) = self.stack.last_mut() {
            if frame.next_neighbour == NEIGHBOURS.len() {
                // all neighbours explored, so give the tile back
                self.visited[frame.row * self.board.cols() + frame.col] = false;
                self.prefix.truncate(frame.prefix_len);
                self.stack.pop();
                continue;
            }

            let (row_offset, col_offset) = NEIGHBOURS[frame.next_neighbour];
            frame.next_neighbour += 1;

            let parent = frame.node;
            if let (Some(row), Some(col)) = (
                frame.row.checked_add_signed(row_offset),
                frame.col.checked_add_signed(col_offset),
            ) {
                self.enter(row, col, parent);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letter::{translate_word, Letter};
    use crate::utilities::read_dictionary;

    const DICTIONARY_FILE_PATH: &str = "tests/dictionary.txt";

    fn board(rows: &[&str]) -> Board {
        Board::from_rows(rows.iter().map(|row| translate_word(row).unwrap()).collect()).unwrap()
    }

    fn words(list: &[&str]) -> HashSet<String> {
        list.iter().map(|word| word.to_string()).collect()
    }

    /// enumerate every simple path of a small board without any pruning
    fn brute_force_words(board: &Board, dictionary: &HashSet<String>) -> HashSet<String> {
        fn walk(
            board: &Board,
            dictionary: &HashSet<String>,
            row: usize,
            col: usize,
            path: &mut Vec<(usize, usize)>,
            prefix: String,
            found: &mut HashSet<String>,
        ) {
            path.push((row, col));
            let prefix = prefix
                + &board
                    .letter(row, col)
                    .expansion()
                    .iter()
                    .map(|l| l.to_char())
                    .collect::<String>();
            if prefix.len() >= 3 && dictionary.contains(&prefix) {
                found.insert(prefix.clone());
            }
            for r in row.saturating_sub(1)..=(row + 1).min(board.rows() - 1) {
                for c in col.saturating_sub(1)..=(col + 1).min(board.cols() - 1) {
                    if !path.contains(&(r, c)) {
                        walk(board, dictionary, r, c, path, prefix.clone(), found);
                    }
                }
            }
            path.pop();
        }

        let mut found = HashSet::new();
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                walk(
                    board,
                    dictionary,
                    row,
                    col,
                    &mut Vec::new(),
                    String::new(),
                    &mut found,
                );
            }
        }
        found
    }

    #[test]
    fn test_all_valid_words_small_board() {
        let solver = BoggleSolver::new(["CAT", "CATS", "DOG", "DO"]).unwrap();
        // C A
        // T S
        let found = solver.all_valid_words(&board(&["CA", "TS"]));
        assert_eq!(found, words(&["CAT", "CATS"]));
    }

    #[test]
    fn test_all_valid_words_q_tile() {
        let solver = BoggleSolver::new([
            "QUEST", "QEST", "QUA", "QU", "EAT", "TEA", "SET", "SEAT", "SEX", "TAX", "SETS", "TEE",
        ])
        .unwrap();
        // Qu E S
        // A  T X
        let board = Board::from_file("tests/board-quest.txt").unwrap();
        let found = solver.all_valid_words(&board);

        // QUEST comes from only four tiles and QEST can never be spelled
        assert_eq!(
            found,
            words(&["QUEST", "QUA", "EAT", "TEA", "SET", "SEAT", "SEX"])
        );
    }

    #[test]
    fn test_all_valid_words_q_tile_counts_as_two_letters() {
        let solver = BoggleSolver::new(["QUA", "QUAD", "AQUA"]).unwrap();
        // Q A D
        let found = solver.all_valid_words(&board(&["QAD"]));
        assert_eq!(found, words(&["QUA", "QUAD"]));
    }

    #[test]
    fn test_single_tile_board() {
        let solver = BoggleSolver::new(["A", "QU", "QUA"]).unwrap();
        assert!(solver.all_valid_words(&board(&["A"])).is_empty());
        assert!(solver.all_valid_words(&board(&["Q"])).is_empty());
    }

    #[test]
    fn test_tiles_are_not_reused() {
        let solver = BoggleSolver::new(["ABA", "ABAB", "BAB", "AB"]).unwrap();
        assert!(solver.all_valid_words(&board(&["AB"])).is_empty());

        // with a second A the path A B A exists
        let found = solver.all_valid_words(&board(&["AB", "AX"]));
        assert_eq!(found, words(&["ABA"]));
    }

    #[test]
    fn test_all_valid_words_real_board() {
        let solver = BoggleSolver::new(read_dictionary(DICTIONARY_FILE_PATH).unwrap()).unwrap();
        // F L O S
        // E I M T
        // R K E I
        // O Y R A
        let found = solver.all_valid_words(&board(&["FLOS", "EIMT", "RKEI", "OYRA"]));

        // manually verified that:
        // - words begin and end on almost every tile and use connections in all directions
        // - the board contains duplicate words reachable along different paths
        // - none of the Q words or off-board words in the dictionary are reachable
        assert_eq!(found.len(), 287);
        for word in ["SMIRKIER", "STEMLIKE", "OSTIARY", "YORKIE", "KRAIT", "AERY", "YOK"] {
            assert!(found.contains(word), "{} should be found", word);
        }
        for word in ["QUEST", "FILMY", "STORM", "MISTER", "MO", "ST"] {
            assert!(!found.contains(word), "{} should not be found", word);
        }
        assert_eq!(solver.total_score(&found), 459);
    }

    #[test]
    fn test_all_valid_words_real_board_with_q() {
        let solver = BoggleSolver::new(read_dictionary(DICTIONARY_FILE_PATH).unwrap()).unwrap();
        // Qu I E T
        // U  L T S
        // A  R E Z
        // J  O D G
        let found = solver.all_valid_words(&board(&["QIET", "ULTS", "AREZ", "JODG"]));
        assert_eq!(
            found,
            words(&[
                "ARETS", "QUIET", "QUILT", "QUITE", "RELIE", "STEIL", "ARET", "QUIT", "RETS",
                "STIE", "TEIL", "ARE", "ERA", "ITS", "LEI", "LIE", "ORE", "RET", "TIE",
            ])
        );
        assert_eq!(solver.total_score(&found), 25);
    }

    #[test]
    fn test_all_valid_words_matches_brute_force() {
        let dictionary_words = read_dictionary(DICTIONARY_FILE_PATH).unwrap();
        let solver = BoggleSolver::new(&dictionary_words).unwrap();
        let dictionary: HashSet<String> = dictionary_words.into_iter().collect();

        for rows in [["SMI", "TER", "AOK"], ["QIE", "ULT", "ARS"], ["LIF", "EMO", "STK"]] {
            let board = board(&rows);
            let found = solver.all_valid_words(&board);
            assert_eq!(found, brute_force_words(&board, &dictionary), "{:?}", rows);
            assert!(found
                .iter()
                .all(|word| word.len() >= 3 && dictionary.contains(word)));
        }
    }

    #[test]
    fn test_long_paths() {
        // a single row of identical tiles forces a path across the whole board
        const LENGTH: usize = 2000;
        let long_word = "A".repeat(LENGTH);
        let solver = BoggleSolver::new([long_word.as_str(), "AAA"]).unwrap();
        let board = Board::new(1, LENGTH, vec![Letter::A; LENGTH]).unwrap();

        let found = solver.all_valid_words(&board);
        assert_eq!(found, HashSet::from([long_word, "AAA".to_owned()]));
    }

    #[test]
    fn test_concurrent_searches_share_the_solver() {
        let solver = BoggleSolver::new(read_dictionary(DICTIONARY_FILE_PATH).unwrap()).unwrap();
        let boards = [
            board(&["FLOS", "EIMT", "RKEI", "OYRA"]),
            board(&["QIET", "ULTS", "AREZ", "JODG"]),
        ];
        let expected: Vec<HashSet<String>> = boards
            .iter()
            .map(|board| solver.all_valid_words(board))
            .collect();

        let solver = &solver;
        let actual: Vec<HashSet<String>> = std::thread::scope(|s| {
            let handles: Vec<_> = boards
                .iter()
                .map(|board| s.spawn(move || solver.all_valid_words(board)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_search_is_repeatable() {
        let solver = BoggleSolver::new(["CAT", "CATS", "ACT", "SCAT", "TACS"]).unwrap();
        let board = board(&["CA", "TS"]);
        let first = solver.all_valid_words(&board);
        assert_eq!(first, solver.all_valid_words(&board));
        assert_eq!(first, words(&["CAT", "CATS", "ACT", "SCAT", "TACS"]));
    }

    #[test]
    fn test_score_of() {
        let solver = BoggleSolver::new([
            "AT", "CAT", "CATS", "QUEST", "PUZZLE", "ALCHEMY", "ALPHABET", "ZOOLOGICAL",
        ])
        .unwrap();

        assert_eq!(solver.score_of(Some("AT")).unwrap(), 0);
        assert_eq!(solver.score_of(Some("CAT")).unwrap(), 1);
        assert_eq!(solver.score_of(Some("CATS")).unwrap(), 1);
        assert_eq!(solver.score_of(Some("QUEST")).unwrap(), 2);
        assert_eq!(solver.score_of(Some("PUZZLE")).unwrap(), 3);
        assert_eq!(solver.score_of(Some("ALCHEMY")).unwrap(), 5);
        assert_eq!(solver.score_of(Some("ALPHABET")).unwrap(), 11);
        assert_eq!(solver.score_of(Some("ZOOLOGICAL")).unwrap(), 11);
    }

    #[test]
    fn test_score_of_unknown_and_short_words() {
        let solver = BoggleSolver::new(["CAT", "AT", "A"]).unwrap();
        for word in ["", "A", "AT", "CA", "DOG", "CATS", "BANANAS", "cat", "ZOOLOGICAL"] {
            assert_eq!(solver.score_of(Some(word)).unwrap(), 0, "{}", word);
        }
    }

    #[test]
    fn test_score_of_missing_word() {
        let solver = BoggleSolver::new(["CAT"]).unwrap();
        assert!(matches!(solver.score_of(None), Err(Error::InvalidArgument)));
    }

    #[test]
    fn test_new_rejects_malformed_dictionary() {
        match BoggleSolver::new(["CAT", "Dog"]) {
            Err(Error::MalformedWord { word, character }) => {
                assert_eq!(word, "Dog");
                assert_eq!(character, 'o');
            }
            Err(e) => panic!("unexpected error {}", e),
            Ok(_) => panic!("malformed dictionary was accepted"),
        }
        assert!(matches!(
            BoggleSolver::new(["CAT", ""]),
            Err(Error::EmptyWord)
        ));
        assert!(BoggleSolver::new(read_dictionary("tests/invalid_wordlist.txt").unwrap()).is_err());
    }

    #[test]
    fn test_new_accepts_duplicates() {
        let solver = BoggleSolver::new(["CAT", "CAT", "CATS", "CAT"]).unwrap();
        assert_eq!(solver.dictionary().len(), 2);
        assert_eq!(solver.score_of(Some("CAT")).unwrap(), 1);
        assert_eq!(
            solver.all_valid_words(&board(&["CA", "TS"])),
            words(&["CAT", "CATS"])
        );
    }
}
