use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    /// The first non-empty line of the source is not a `>` header.
    #[error("{origin} does not conform to FASTA format")]
    MalformedSource { origin: String },

    #[error("fasta source io error: {0}")]
    SourceIo(#[from] io::Error),
}

pub type BioResult<T> = Result<T, BioError>;
