use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuleStoreError {
    #[error("Failed to access rules file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid rules JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Rules file must be a JSON object of named rule sections")]
    NotAnObject,
}
