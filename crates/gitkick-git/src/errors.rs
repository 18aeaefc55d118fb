#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("`git {command}` failed (exit {}): {output}", code.map_or_else(|| "signal".to_string(), |c| c.to_string()))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        output: String,
    },

    #[error("Failed to execute `git {command}`: {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("HEAD is detached; check out a branch first")]
    DetachedHead,

    #[error("Invalid {label}: {message}")]
    InvalidArgument { label: String, message: String },

    #[error("IO error during git operation: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}
