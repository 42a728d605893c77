use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A button carried an action name no screen understands.
    #[error("unknown action '{0}'")]
    UnknownAction(String),

    #[error("action '{action}' is missing argument '{key}'")]
    MissingArgument { action: String, key: String },

    #[error("failed to read config file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("line {line}: {message}")]
    Script { line: usize, message: String },

    #[error("no '{action}' button on {route}")]
    NoSuchButton { action: String, route: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
