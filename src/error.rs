use std::io;
use std::path::PathBuf;

/// everything that can go wrong while loading a dictionary or a board, or while scoring
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// a word was required but none was given
    #[error("a word must be provided in order to be scored")]
    InvalidArgument,

    #[error("cannot store an empty word")]
    EmptyWord,

    #[error("could not decode character {character:?} in word {word:?}. only uppercase English letters are accepted")]
    MalformedWord { word: String, character: char },

    #[error("the dictionary cannot hold more than {limit} trie nodes")]
    DictionaryFull { limit: usize },

    #[error("malformed board: {0}")]
    MalformedBoard(String),

    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
