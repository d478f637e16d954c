//! Errors raised while acquiring statements.

use std::io;
use std::path::PathBuf;

/// Failure to obtain a well-formed statement sequence.
///
/// Both variants are fatal: the caller never sees a partial sequence.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The input file could not be opened or read.
    #[error("cannot read {}", path.display())]
    Read {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The input is not valid Turtle.
    #[error("malformed Turtle in {origin}: {message}")]
    Syntax {
        /// Where the document came from (a path or a caller-supplied name).
        origin: String,
        /// Parser message, including the position when the parser reports one.
        message: String,
    },
}
