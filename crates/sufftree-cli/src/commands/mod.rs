pub mod dump;
pub mod input;
pub mod search;
pub mod trace;

#[cfg(test)]
mod input_tests;
