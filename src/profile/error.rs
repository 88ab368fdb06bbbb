use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Portfolio file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Invalid YAML in portfolio file: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid portfolio data at '{field}': {reason}")]
    Schema { field: String, reason: String },
}

impl ProfileError {
    pub fn schema(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
