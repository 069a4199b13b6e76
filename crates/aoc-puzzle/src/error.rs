use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failures of a puzzle run.
#[derive(Debug)]
pub enum PuzzleError {
    /// The input file could not be opened.
    OpenInput { path: PathBuf, source: io::Error },
    /// The puzzle rejected its input.
    Parse(Box<dyn std::error::Error>),
    /// A part failed.
    Part {
        part: u8,
        source: Box<dyn std::error::Error>,
    },
    /// Writing results failed.
    Output(io::Error),
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenInput { path, source } => {
                write!(f, "failed to open input file {}: {source}", path.display())
            }
            Self::Parse(e) => write!(f, "failed to parse input: {e}"),
            Self::Part { part, source } => write!(f, "part {part} failed: {source}"),
            Self::Output(e) => write!(f, "failed to write result: {e}"),
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OpenInput { source, .. } => Some(source),
            Self::Parse(e) => Some(e.as_ref()),
            Self::Part { source, .. } => Some(source.as_ref()),
            Self::Output(e) => Some(e),
        }
    }
}

impl From<io::Error> for PuzzleError {
    fn from(e: io::Error) -> Self {
        Self::Output(e)
    }
}
