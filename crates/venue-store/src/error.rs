use std::fmt;
use std::path::PathBuf;

/// Result type for venue-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the storage layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Stored or bundled JSON did not parse
    Json(serde_json::Error),

    /// Configuration error
    Config(String),

    /// Program data file is missing
    ProgramNotInstalled(PathBuf),

    /// Entered access code did not match
    InvalidAccessCode,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::ProgramNotInstalled(path) => write!(
                f,
                "No program data at {}. Run 'venue init --program <file>' first.",
                path.display()
            ),
            Error::InvalidAccessCode => write!(f, "Invalid access code"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Config(_) | Error::ProgramNotInstalled(_) | Error::InvalidAccessCode => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
