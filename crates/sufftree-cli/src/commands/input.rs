//! Loading the text to index and building its tree.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use sufftree::{Algorithm, BuildTracer, EncodedSeq, SuffixTree};
use sufftree_core::Alphabet;

/// Where the text comes from: inline, a file, or stdin (`-f -`).
pub struct TextInput {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to read stdin: {0}")]
    Stdin(io::Error),

    #[error("text input required (-t or -f)")]
    Missing,
}

impl TextInput {
    /// Read the text. One trailing newline is dropped from file input.
    pub fn load(&self) -> Result<String, InputError> {
        if let Some(text) = &self.text {
            return Ok(text.clone());
        }
        let Some(path) = &self.file else {
            return Err(InputError::Missing);
        };

        let mut text = if path.as_os_str() == "-" {
            read_stdin()?
        } else {
            read_file(path)?
        };
        strip_trailing_newline(&mut text);
        Ok(text)
    }

    /// Load and encode the text, exiting on failure.
    pub fn sequence(&self) -> EncodedSeq {
        let text = self.load().unwrap_or_else(|e| fail(e));
        Alphabet::map_string(&text).unwrap_or_else(|e| fail(e))
    }

    pub fn build(&self, algorithm: Algorithm) -> SuffixTree {
        SuffixTree::build(self.sequence(), algorithm)
    }

    pub fn build_traced<T: BuildTracer>(&self, algorithm: Algorithm, tracer: &mut T) -> SuffixTree {
        SuffixTree::build_traced(self.sequence(), algorithm, tracer)
    }
}

fn read_stdin() -> Result<String, InputError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(InputError::Stdin)?;
    Ok(buf)
}

fn read_file(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_owned(),
        source,
    })
}

/// Drop a single trailing `\n` or `\r\n`.
pub fn strip_trailing_newline(text: &mut String) {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
}

/// Report `err` on stderr and exit with status 1.
pub fn fail(err: impl fmt::Display) -> ! {
    eprintln!("error: {err}");
    std::process::exit(1)
}
