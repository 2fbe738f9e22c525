#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The start arrangement is not a 3×3 permutation of 0-8.
    #[error("invalid board: {0}")]
    InvalidState(String),
    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),
    /// A depth-first probe needed more frames than `Limits::max_frames`.
    #[error("search needed more than {limit} stack frames")]
    ResourceExhausted { limit: usize },
}
