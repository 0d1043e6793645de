pub mod memory;
pub mod product;
pub mod user;

pub use memory::InMemoryProductRepository;
pub use memory::InMemoryUserCredentialStore;
pub use product::PostgresProductRepository;
pub use user::PostgresUserCredentialStore;
