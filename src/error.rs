use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for scaffolding operations
pub type Result<T> = std::result::Result<T, ScaffoldError>;

/// Tagged failure kinds surfaced by a scaffold run.
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Required arguments are missing or unusable. Raised before any filesystem mutation.
    #[error("{0}")]
    Usage(String),

    /// A directory creation or file write failed.
    #[error("{action} {}: {source}", .path.display())]
    Filesystem {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project root already exists.
    #[error("Directory '{}' already exists. Choose a different name or remove it first.", .0.display())]
    AlreadyExists(PathBuf),

    /// An external command could not be started or exited unsuccessfully.
    #[error("`{command}` {reason}")]
    Process { command: String, reason: String },

    /// A built-in template failed to render.
    #[error("Failed to render template {name}: {message}")]
    Template { name: String, message: String },
}

impl ScaffoldError {
    pub fn filesystem(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Filesystem {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit code for this failure kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::Usage(_) => 2,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_exit_code() {
        assert_eq!(ScaffoldError::Usage("missing".into()).exit_code(), 2);
    }

    #[test]
    fn test_filesystem_message_names_path() {
        let err = ScaffoldError::filesystem(
            "Failed to write",
            "demo/package.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.exit_code(), 1);
        assert!(matches!(err, ScaffoldError::Filesystem { .. }));
        assert_eq!(err.to_string(), "Failed to write demo/package.json: denied");
    }

    #[test]
    fn test_process_message() {
        let err = ScaffoldError::Process {
            command: "npm install next".into(),
            reason: "exited with exit status: 1".into(),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "`npm install next` exited with exit status: 1");
    }
}
