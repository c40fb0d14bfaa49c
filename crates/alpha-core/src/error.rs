/// Errors that can occur across the Alpha Factory client.
///
/// Each variant wraps a specific error domain. Library crates use this type
/// directly; the binary crate converts to `miette` diagnostics at the boundary.
///
/// # Examples
///
/// ```
/// use alpha_core::AlphaError;
///
/// let err = AlphaError::Config("missing data directory".into());
/// assert!(err.to_string().contains("missing data directory"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum AlphaError {
    /// Filesystem I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or missing configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Key-value storage failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// JSON serialization / deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML deserialization failure.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AlphaError = io_err.into();
        assert!(err.to_string().contains("gone"));
    }

    #[test]
    fn config_error_displays_message() {
        let err = AlphaError::Config("bad value".into());
        assert_eq!(err.to_string(), "configuration error: bad value");
    }

    #[test]
    fn storage_error_displays_message() {
        let err = AlphaError::Storage("write failed".into());
        assert_eq!(err.to_string(), "storage error: write failed");
    }
}
