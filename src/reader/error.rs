use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReaderError {
    #[error("poem index {index} out of range, collection holds {len}")]
    OutOfRange { index: usize, len: usize },

    #[error("a page turn is still settling")]
    TransitionInProgress,
}
