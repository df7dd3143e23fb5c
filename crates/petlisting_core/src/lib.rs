//! Core domain logic for pet listings.
//! This crate owns the pet/owner persistence contracts and the business
//! rules applied before anything reaches storage.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::pet::{Pet, PetId, PetInput, Sex};
pub use model::user::{User, UserId};
pub use repo::pet_repo::{PetRepository, SqlitePetRepository};
pub use repo::user_repo::{SqliteUserRepository, UserRepository};
pub use repo::{RepoError, RepoResult};
pub use service::pet_service::{PetService, PetServiceError, PetServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
