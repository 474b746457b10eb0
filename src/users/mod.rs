pub mod error;
pub mod repo;
pub mod repo_types;

pub use error::UserStoreError;
pub use repo::UserStore;
pub use repo_types::User;
