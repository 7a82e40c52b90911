use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("a carousel needs at least one slide")]
    Empty,

    #[error("slide index {index} is out of range for {len} slides")]
    OutOfRange { index: usize, len: usize },

    #[error("'{0}' is not a slide index")]
    InvalidIndex(String),
}
