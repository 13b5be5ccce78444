/// Alias for `Result<T, CatalogError>`.
pub type CoreResult<T> = Result<T, CatalogError>;

/// Errors that can occur when loading catalog or position data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The input was not valid JSON for the expected shape.
    #[error("invalid catalog data: {0}")]
    Json(#[from] serde_json::Error),

    /// Two cards in the catalog share the same name.
    #[error("duplicate card name: \"{0}\"")]
    DuplicateName(String),
}
