use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Config(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

/// Resolve the workspace data directory path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. VENUE_PATH environment variable (with tilde expansion)
/// 3. System data directory (recommended default)
/// 4. ~/.venue (fallback for systems without standard data directory)
pub fn resolve_workspace_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    // Priority 2: VENUE_PATH environment variable
    if let Ok(env_path) = std::env::var("VENUE_PATH") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: System data directory (recommended default)
    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("venue"));
    }

    // Priority 4: Fallback to ~/.venue (last resort for systems without standard data directory)
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".venue"));
    }

    Err(Error::Config(
        "Could not determine workspace path: no HOME directory or system data directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let resolved = resolve_workspace_path(Some("/tmp/venue-data")).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/venue-data"));
    }

    #[test]
    fn test_expand_tilde_passthrough() {
        assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }

    #[test]
    fn test_expand_tilde_home() {
        if let Some(home) = std::env::var_os("HOME") {
            let expanded = expand_tilde("~/data");
            assert_eq!(expanded, PathBuf::from(home).join("data"));
        }
    }
}
