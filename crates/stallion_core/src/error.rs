use std::path::{Path, PathBuf};

/// Errors from reading or writing the portal's persistent store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error at {path:?}: {error}")]
    Io {
        error: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid store key {0:?} (keys may only contain letters, digits, '_', '-' and '.')")]
    InvalidKey(String),

    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("could not find a data directory for this user")]
    NoDataDir,
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Attaches the offending path to an [`std::io::Error`].
///
/// ```no_run
/// use stallion_core::IntoIoError;
/// # fn f(p: &std::path::Path) -> stallion_core::Result<String> {
/// let text = std::fs::read_to_string(p).path(p)?;
/// # Ok(text) }
/// ```
pub trait IntoIoError<T> {
    #[allow(clippy::missing_errors_doc)]
    fn path(self, p: impl AsRef<Path>) -> Result<T>;
}

impl<T> IntoIoError<T> for std::io::Result<T> {
    fn path(self, p: impl AsRef<Path>) -> Result<T> {
        self.map_err(|error| StoreError::Io {
            error,
            path: p.as_ref().to_owned(),
        })
    }
}

pub trait IntoJsonError<T> {
    #[allow(clippy::missing_errors_doc)]
    fn json_to(self) -> Result<T>;
}

impl<T> IntoJsonError<T> for std::result::Result<T, serde_json::Error> {
    fn json_to(self) -> Result<T> {
        self.map_err(StoreError::Json)
    }
}
