#[derive(Debug, derive_more::Display)]
pub enum Error {
    #[display("Storage error: {_0}")]
    Storage(String),
    #[display("Navigation to {_0} failed: {_1}")]
    Navigation(String, String),
    #[display("Failed to bind control {_0}: {_1}")]
    Binding(String, String),
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
