use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid deck: {source}")]
pub struct ParseError {
    #[from]
    source: serde_json::Error,
}

impl ParseError {
    /// 1-based line of the failure, or 0 when the payload was not text.
    pub fn line(&self) -> usize {
        self.source.line()
    }

    pub fn column(&self) -> usize {
        self.source.column()
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("card index {index} is out of range for a playlist of {len} cards")]
    OutOfRange { index: usize, len: usize },
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Parse(error.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
