use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

/// Failure to turn a program source file into a memory listing.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("could not read program: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed program cell: {0}")]
    Malformed(#[from] ParseIntError),
}

/// Parse a flat comma-separated list of signed decimal integers.
///
/// Surrounding whitespace (including the trailing newline every input file
/// carries) is ignored, both around the listing and around individual cells.
pub fn parse(text: &str) -> Result<Vec<i64>, ProgramError> {
    text.trim()
        .split(',')
        .map(|cell| cell.trim().parse::<i64>().map_err(ProgramError::from))
        .collect()
}

/// Read a program listing from a file. One program per file.
pub fn load(path: &Path) -> Result<Vec<i64>, ProgramError> {
    parse(&std::fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_listing() {
        assert_eq!(parse("1,0,0,3,99").unwrap(), vec![1, 0, 0, 3, 99]);
    }

    #[test]
    fn test_parse_signed_cells_and_trailing_newline() {
        assert_eq!(parse("109,-1,204,1,99\n").unwrap(), vec![109, -1, 204, 1, 99]);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("1,two,3").is_err());
        assert!(parse("").is_err());
    }
}
