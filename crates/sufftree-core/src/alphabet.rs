//! Alphabet mapping from text to small integer symbols.
//!
//! Every distinct character of a reference text gets a `u8` symbol, ordered
//! the same way as the characters. Symbol `0` is reserved for the sentinel
//! that terminates an [`EncodedSeq`], so the sentinel sorts below every
//! letter and no suffix of an encoded sequence is a prefix of another.

use std::collections::HashMap;
use std::fmt;

/// Symbol reserved for the sequence terminator.
pub const SENTINEL: u8 = 0;

/// Letters that fit next to the sentinel in a `u8` symbol space.
pub const MAX_LETTERS: usize = u8::MAX as usize;

/// How the sentinel is shown when decoding.
pub const SENTINEL_GLYPH: char = '$';

/// Errors raised while building an alphabet or encoding a text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    #[error("text has {0} distinct letters, at most {MAX_LETTERS} are supported")]
    TooManyLetters(usize),

    #[error("text contains U+0000, which is reserved for the sentinel")]
    ReservedSentinel,

    #[error("letter {0:?} is not part of the alphabet")]
    UnknownLetter(char),
}

/// Bidirectional mapping between characters and symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    /// Character to symbol, for encoding.
    symbols: HashMap<char, u8>,
    /// Letters in symbol order; symbol `s` is `letters[s - 1]`.
    letters: Vec<char>,
}

impl Alphabet {
    /// Build the alphabet of all characters in `reference`.
    pub fn new(reference: &str) -> Result<Self, AlphabetError> {
        let mut letters: Vec<char> = reference.chars().collect();
        letters.sort_unstable();
        letters.dedup();

        if letters.first() == Some(&'\0') {
            return Err(AlphabetError::ReservedSentinel);
        }
        if letters.len() > MAX_LETTERS {
            return Err(AlphabetError::TooManyLetters(letters.len()));
        }

        let symbols = letters
            .iter()
            .enumerate()
            .map(|(i, &c)| (c, (i + 1) as u8))
            .collect();

        Ok(Self { symbols, letters })
    }

    /// Number of symbols, sentinel included.
    #[inline]
    pub fn symbol_count(&self) -> usize {
        self.letters.len() + 1
    }

    #[inline]
    pub fn symbol(&self, letter: char) -> Option<u8> {
        self.symbols.get(&letter).copied()
    }

    /// Letter for `symbol`. The sentinel has no letter.
    #[inline]
    pub fn letter(&self, symbol: u8) -> Option<char> {
        match symbol {
            SENTINEL => None,
            s => self.letters.get(s as usize - 1).copied(),
        }
    }

    /// Encode `text` without a sentinel.
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, AlphabetError> {
        text.chars()
            .map(|c| self.symbol(c).ok_or(AlphabetError::UnknownLetter(c)))
            .collect()
    }

    /// Encode `text` and append the sentinel.
    pub fn encode_terminated(self, text: &str) -> Result<EncodedSeq, AlphabetError> {
        let mut symbols = self.encode(text)?;
        symbols.push(SENTINEL);
        Ok(EncodedSeq {
            alphabet: self,
            symbols: symbols.into_boxed_slice(),
        })
    }

    /// Decode symbols back into text, showing the sentinel as `$`.
    ///
    /// Symbols outside the alphabet decode as U+FFFD.
    pub fn decode(&self, symbols: &[u8]) -> String {
        symbols
            .iter()
            .map(|&s| match s {
                SENTINEL => SENTINEL_GLYPH,
                s => self.letter(s).unwrap_or(char::REPLACEMENT_CHARACTER),
            })
            .collect()
    }

    /// Build the alphabet of `text` and encode it with a sentinel.
    pub fn map_string(text: &str) -> Result<EncodedSeq, AlphabetError> {
        Self::new(text)?.encode_terminated(text)
    }
}

/// Immutable sentinel-terminated symbol buffer.
///
/// The sentinel appears exactly once, as the last symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSeq {
    alphabet: Alphabet,
    symbols: Box<[u8]>,
}

impl EncodedSeq {
    #[inline]
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// All symbols, sentinel included.
    #[inline]
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }

    /// Length including the sentinel. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the sequence encodes the empty text (only the sentinel).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.len() == 1
    }

    /// Length of the encoded text, sentinel excluded.
    #[inline]
    pub fn text_len(&self) -> usize {
        self.symbols.len() - 1
    }
}

impl fmt::Display for EncodedSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.alphabet.decode(&self.symbols))
    }
}
