use std::io;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Raised by [`crate::Response::set_status_code`] for codes outside
    /// the range 100..=599. The stored status is left unchanged.
    #[error("status code {0} not recognized")]
    InvalidStatusCode(u16),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
