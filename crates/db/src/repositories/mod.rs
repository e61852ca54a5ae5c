//! Read-modify-write operations over the storage backends.

pub mod project_repo;

pub use project_repo::ProjectRepo;
