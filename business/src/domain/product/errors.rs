use crate::domain::category::errors::CategoryError;
use crate::domain::errors::RepositoryError;

/// Failures of the pure expiry/withdrawal computations.
#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    /// Missing or malformed argument; carries the argument name.
    #[error("calculation.invalid_input")]
    InvalidInput(&'static str),
    #[error("category.unknown")]
    UnknownCategory(#[from] CategoryError),
}

#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    #[error("product.unknown_filter")]
    UnknownFilter(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.article_empty")]
    ArticleEmpty,
    #[error("product.name_empty")]
    NameEmpty,
    #[error("product.expiry_date_in_past")]
    ExpiryDateInPast,
    #[error("product.duplicated")]
    Duplicated,
    #[error("product.not_found")]
    NotFound,
    #[error("product.forbidden")]
    Forbidden,
    #[error("product.conflict")]
    Conflict,
    #[error("category.unknown")]
    UnknownCategory(#[from] CategoryError),
    #[error("product.unknown_filter")]
    UnknownFilter(#[from] FilterError),
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}

impl ProductError {
    /// Maps repository outcomes that carry product meaning onto product errors,
    /// e.g. a missing record surfaces as `product.not_found`.
    pub fn from_repository(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => ProductError::NotFound,
            RepositoryError::Duplicated => ProductError::Duplicated,
            RepositoryError::Conflict => ProductError::Conflict,
            other => ProductError::Repository(other),
        }
    }
}
