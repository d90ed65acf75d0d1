//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod post_repo;
pub mod stats_repo;
pub mod todo_repo;
pub mod user_repo;

pub use post_repo::PostRepo;
pub use stats_repo::StatsRepo;
pub use todo_repo::TodoRepo;
pub use user_repo::UserRepo;
