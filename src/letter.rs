use crate::error::Error;
use std::fmt;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
/// our grammar consists of only upper case english letters, so a letter doubles
/// as the index of its child slot in the dictionary trie.
pub enum Letter {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
    J = 9,
    K = 10,
    L = 11,
    M = 12,
    N = 13,
    O = 14,
    P = 15,
    Q = 16,
    R = 17,
    S = 18,
    T = 19,
    U = 20,
    V = 21,
    W = 22,
    X = 23,
    Y = 24,
    Z = 25,
}

impl Letter {
    /// the letters a tile showing this letter contributes to a word.
    /// the Q tile is always read as QU.
    #[inline(always)]
    pub fn expansion(&self) -> &'static [Letter] {
        match self {
            Letter::Q => &[Letter::Q, Letter::U],
            other => std::slice::from_ref(&ALPHABET[usize::from(*other)]),
        }
    }

    #[inline(always)]
    pub fn to_char(self) -> char {
        (b'A' + self as u8) as char
    }
}

/// every letter in alphabetical order
pub static ALPHABET: [Letter; 26] = [
    Letter::A,
    Letter::B,
    Letter::C,
    Letter::D,
    Letter::E,
    Letter::F,
    Letter::G,
    Letter::H,
    Letter::I,
    Letter::J,
    Letter::K,
    Letter::L,
    Letter::M,
    Letter::N,
    Letter::O,
    Letter::P,
    Letter::Q,
    Letter::R,
    Letter::S,
    Letter::T,
    Letter::U,
    Letter::V,
    Letter::W,
    Letter::X,
    Letter::Y,
    Letter::Z,
];

impl From<Letter> for usize {
    fn from(letter: Letter) -> usize {
        letter as usize
    }
}

impl From<usize> for Letter {
    fn from(n: usize) -> Letter {
        match ALPHABET.get(n) {
            Some(letter) => *letter,
            None => panic!("Cannot convert values greater than 25 into a letter."),
        }
    }
}

impl TryFrom<char> for Letter {
    type Error = char;

    /// only upper case ascii letters are accepted; the offending character is handed back
    fn try_from(c: char) -> Result<Self, Self::Error> {
        if c.is_ascii_uppercase() {
            Ok(Letter::from((c as u8 - b'A') as usize))
        } else {
            Err(c)
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// translate a dictionary word into letters, failing on the first character outside of A-Z
pub fn translate_word(word: &str) -> Result<Vec<Letter>, Error> {
    if word.is_empty() {
        return Err(Error::EmptyWord);
    }
    word.chars()
        .map(|c| {
            Letter::try_from(c).map_err(|character| Error::MalformedWord {
                word: word.to_owned(),
                character,
            })
        })
        .collect()
}
