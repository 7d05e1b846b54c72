use crate::error::Error;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

pub mod test_utilities;

pub const ALPHABET_LENGTH: usize = 26;

/// words shorter than this never count
pub const MIN_WORD_LENGTH: usize = 3;

/// point values for word lengths from 0 to 7
pub const POINTS: [u32; 8] = [0, 0, 0, 1, 1, 2, 3, 5];

/// point value for every word of length 8 or more
pub const MAX_POINTS: u32 = 11;

/// point value of a valid word with `len` letters
#[inline(always)]
pub fn points_for_length(len: usize) -> u32 {
    POINTS.get(len).copied().unwrap_or(MAX_POINTS)
}

/// read the whitespace separated words of a word list file. words are validated
/// when they are stored, not here.
pub fn read_dictionary<P: AsRef<Path>>(word_list_file_path: P) -> Result<Vec<String>, Error> {
    let path = word_list_file_path.as_ref();
    let io_error = |source: io::Error| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(io_error)?;
    let mut words = Vec::new();
    for line in io::BufReader::new(file).lines() {
        let line = line.map_err(io_error)?;
        words.extend(line.split_whitespace().map(str::to_owned));
    }
    log::debug!("read {} words from {}", words.len(), path.display());
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utilities::test_utilities::{test_dir, TestCleanup};
    use std::fs;

    const WORDLIST_FILE_PATH: &str = "tests/wordlist.txt";
    const DNE_FILE_PATH: &str = "tests/DNE";

    #[test]
    fn test_points_for_length() {
        for len in 0..=2 {
            assert_eq!(points_for_length(len), 0);
        }
        assert_eq!(points_for_length(3), 1);
        assert_eq!(points_for_length(4), 1);
        assert_eq!(points_for_length(5), 2);
        assert_eq!(points_for_length(6), 3);
        assert_eq!(points_for_length(7), 5);
        for len in 8..=25 {
            assert_eq!(points_for_length(len), MAX_POINTS);
        }
    }

    #[test]
    fn test_read_dictionary() {
        let words = read_dictionary(WORDLIST_FILE_PATH).unwrap();

        // hardcode expected contents - there is a risk of erroneous divergence
        // here, but we avoid the risk of replicating errors in I/O.
        const EXPECTED_WORDS: [&str; 3] = ["ALPHABET", "CAROLINA", "ZOOLOGICAL"];
        assert_eq!(words, EXPECTED_WORDS);
    }

    #[test]
    fn test_read_dictionary_splits_on_any_whitespace() {
        let dir = test_dir("read_dictionary_whitespace");
        let _test_cleanup = TestCleanup::new(&dir);
        let path = dir.join("words.txt");
        fs::write(&path, "CAT  DOG\n\n\tBIRD\r\nCAT\n").unwrap();

        let words = read_dictionary(&path).unwrap();
        assert_eq!(words, ["CAT", "DOG", "BIRD", "CAT"]);
    }

    #[test]
    fn test_read_dictionary_file_dne() {
        match read_dictionary(DNE_FILE_PATH) {
            Err(Error::Io { path, .. }) => assert_eq!(path, Path::new(DNE_FILE_PATH)),
            other => panic!("expected an io error but got {:?}", other),
        }
    }
}
