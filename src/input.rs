//! Finding and reading puzzle input.

use failure::{Error, ResultExt};
use std::fs;
use std::path::PathBuf;

/// Return the path of the input file for `day`, relative to the current
/// directory.
///
/// Debug builds use the small worked example under `data/examples`, so that a
/// plain `cargo run` checks the answers from the puzzle text. Release builds
/// use the full puzzle input under `data`.
pub fn input_path(day: u32) -> PathBuf {
    let dir = if cfg!(debug_assertions) {
        "data/examples"
    } else {
        "data"
    };
    PathBuf::from(dir).join(format!("{:02}.txt", day))
}

/// Read the whole input file for `day`.
pub fn read_input(day: u32) -> Result<String, Error> {
    let path = input_path(day);
    info!("reading input from {}", path.display());
    let text = fs::read_to_string(&path)
        .with_context(|_| format!("couldn't read input file {}", path.display()))?;
    Ok(text)
}

/// Iterate over the non-blank lines of `input`, with surrounding whitespace
/// trimmed.
pub fn records<'a>(input: &'a str) -> impl Iterator<Item = &'a str> + 'a {
    input.lines().map(str::trim).filter(|line| !line.is_empty())
}
