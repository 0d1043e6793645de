pub mod argon2;
pub mod errors;

pub use self::argon2::HashedPassword;
pub use self::argon2::PasswordHasher;
pub use self::argon2::ALGORITHM;
pub use errors::PasswordError;
