//! Errors raised while loading texts and compiling queries.

use std::{error, fmt, result};

/// Loading and query compilation report failures through this type.
pub type Result<T> = result::Result<T, Box<dyn error::Error>>;

/// A document that cannot be read as an annotated text.
#[derive(Debug)]
pub struct InvalidInput(pub String);

/// Invalid query or command line argument.
#[derive(Debug)]
pub struct InvalidArgument(pub String);

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid input: {}", self.0)
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid argument: {}", self.0)
    }
}

impl error::Error for InvalidInput {}

impl error::Error for InvalidArgument {}

/// Wraps a message about a malformed document.
pub fn invalid_input(s: String) -> Box<dyn error::Error> {
    InvalidInput(s).into()
}

/// Wraps a message about an unusable query gloss.
pub fn invalid_argument(s: String) -> Box<dyn error::Error> {
    InvalidArgument(s).into()
}

/// Prefixes an error with the path of the file it came from.
pub fn in_file(path: &str, e: impl fmt::Display) -> Box<dyn error::Error> {
    invalid_input(format!("{path}: {e}"))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(invalid_input("x".to_owned()).to_string(), "invalid input: x");
        assert_eq!(
            invalid_argument("bad (".to_owned()).to_string(),
            "invalid argument: bad ("
        );
        assert_eq!(in_file("a.json", "eof").to_string(), "invalid input: a.json: eof");
    }
}
