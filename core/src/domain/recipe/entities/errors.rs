use thiserror::Error;

/// Reasons a recipe source could not be turned into a table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read recipe source: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed recipe source: {0}")]
    Csv(#[from] csv::Error),

    #[error("recipe source has no header line after {skip_rows} preamble lines")]
    MissingHeader { skip_rows: usize },

    #[error("recipe source is missing column '{0}'")]
    MissingColumn(String),
}
