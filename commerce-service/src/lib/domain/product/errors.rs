use thiserror::Error;

use crate::domain::pagination::PaginationError;

/// Error for ProductId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProductIdError {
    #[error("Invalid product id: {0}")]
    InvalidFormat(String),
}

/// Error for product attributes that violate catalog invariants
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductAttributeError {
    #[error("Product {field} must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("Product {field} must be a finite number")]
    NotFinite { field: &'static str },

    #[error("Product description must not be empty")]
    EmptyDescription,
}

/// Top-level error for catalog operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error(transparent)]
    InvalidId(#[from] ProductIdError),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error("Invalid product: {0}")]
    InvalidAttribute(#[from] ProductAttributeError),

    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
