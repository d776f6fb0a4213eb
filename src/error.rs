//! # Error Types
//!
//! Compiling a score never fails: the grammar skips what it does not
//! recognize and substitutes defaults. Errors only come from the surfaces
//! around it (reading files, loading configuration, serializing output).
//!
//! ## Error Types
//! - `Io` - A score or configuration file could not be read
//! - `Config` - Invalid YAML configuration or out-of-range values
//! - `Serialize` - JSON/YAML rendering of a note table failed

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmsError {
    /// A file could not be read.
    ///
    /// # Example
    /// ```
    /// # use ems::EmsError;
    /// let err = EmsError::Io {
    ///     path: "song.ems".to_string(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    /// };
    /// assert_eq!(err.to_string(), "Cannot read 'song.ems': not found");
    /// ```
    #[error("Cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration.
    ///
    /// # Example
    /// ```
    /// # use ems::EmsError;
    /// let err = EmsError::Config("reference-hz must be positive".to_string());
    /// assert_eq!(err.to_string(), "Invalid configuration: reference-hz must be positive");
    /// ```
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Serialization failed: {0}")]
    Serialize(String),
}
