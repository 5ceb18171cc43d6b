//! Resolved settings for one conversion run.

use std::path::PathBuf;

/// Input path used when none is given.
pub const DEFAULT_INPUT: &str = "query.txt";

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "query.csv";

/// Line ending written after each CSV row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    #[default]
    Lf,
    Crlf,
}

impl LineTerminator {
    pub fn as_str(self) -> &'static str {
        match self {
            LineTerminator::Lf => "\n",
            LineTerminator::Crlf => "\r\n",
        }
    }

    pub(crate) fn to_csv(self) -> csv::Terminator {
        match self {
            LineTerminator::Lf => csv::Terminator::Any(b'\n'),
            LineTerminator::Crlf => csv::Terminator::CRLF,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
    pub output: PathBuf,
    pub terminator: LineTerminator,
}

impl Config {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            terminator: LineTerminator::default(),
        }
    }

    pub fn with_terminator(mut self, terminator: LineTerminator) -> Self {
        self.terminator = terminator;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT, DEFAULT_OUTPUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = Config::default();
        assert_eq!(config.input, PathBuf::from("query.txt"));
        assert_eq!(config.output, PathBuf::from("query.csv"));
        assert_eq!(config.terminator, LineTerminator::Lf);
    }

    #[test]
    fn test_with_terminator() {
        let config = Config::new("in.txt", "out.csv").with_terminator(LineTerminator::Crlf);
        assert_eq!(config.terminator.as_str(), "\r\n");
        assert_eq!(config.input, PathBuf::from("in.txt"));
    }
}
