pub mod errors;
pub mod models;

pub use errors::PaginationError;
pub use models::PageRequest;
pub use models::PageResult;
pub use models::PaginationPolicy;
