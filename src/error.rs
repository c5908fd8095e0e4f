use std::path::PathBuf;

/// Every error betcheck can produce. Displayed as user-facing messages.
///
/// Field validation failures are deliberately not here: they render
/// next to the grid as normal output and never abort a run.
#[derive(Debug)]
pub enum CheckError {
    RouteNotFound {
        path: String,
    },
    AccessDenied {
        path: String,
    },
    Config {
        path: PathBuf,
        reason: String,
    },
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl std::fmt::Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RouteNotFound { path } => {
                write!(f, "no such route: {path}")
            }
            Self::AccessDenied { path } => {
                write!(f, "{path} [access denied]")
            }
            Self::Config { path, reason } => {
                write!(f, "route table {}: {reason}", path.display())
            }
            Self::Io { path, source } => {
                write!(f, "{}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CheckError {}

impl CheckError {
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::RouteNotFound { .. } | Self::Io { .. } => 2,
            Self::Config { .. } => 3,
            Self::AccessDenied { .. } => 4,
        }
    }
}
