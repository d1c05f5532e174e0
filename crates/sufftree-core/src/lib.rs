#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core collaborators for sufftree.
//!
//! - **Alphabet** (`Alphabet`, `EncodedSeq`): maps text onto `u8` symbols and
//!   terminates it with a unique sentinel that sorts below every letter
//! - **Reference arrays** (`suffix_array`, `lcp_array`): inputs for the
//!   LCP-based tree constructor
//! - **Colors**: ANSI palette shared by dumps and traces

pub mod alphabet;
pub mod colors;
pub mod suffix_array;

pub use alphabet::{Alphabet, AlphabetError, EncodedSeq, MAX_LETTERS, SENTINEL, SENTINEL_GLYPH};
pub use colors::Colors;
pub use suffix_array::{lcp_array, suffix_array};

#[cfg(test)]
mod alphabet_tests;
#[cfg(test)]
mod colors_tests;
