use thiserror::Error;

/// Error for rejected `page` / `limit` query parameters.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid page parameter `{parameter}`: {value:?} ({reason})")]
    InvalidPageParameter {
        parameter: &'static str,
        value: String,
        reason: String,
    },
}

impl PaginationError {
    pub(crate) fn invalid(parameter: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPageParameter {
            parameter,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}
