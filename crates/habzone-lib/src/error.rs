use thiserror::Error;

/// Convenient result alias for the habzone library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a stellar or orbital input fails validation.
    #[error("invalid stellar input: {message}")]
    StellarInputValidation { message: String },

    /// Raised when a flux or distance calculation would leave its numeric domain.
    #[error("insolation calculation failed: {message}")]
    InsolationCalculation { message: String },
}
