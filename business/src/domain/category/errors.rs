#[derive(Debug, thiserror::Error)]
pub enum CategoryError {
    #[error("category.unknown")]
    Unknown(String),
    #[error("category.empty_registry")]
    EmptyRegistry,
    #[error("category.duplicated")]
    Duplicated(String),
    #[error("category.invalid_lead_time")]
    InvalidLeadTime(String),
    #[error("category.invalid_configuration")]
    InvalidConfiguration(#[from] serde_json::Error),
}
