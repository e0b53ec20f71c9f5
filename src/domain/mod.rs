mod metrics;
mod models;
mod page;
mod repository;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose persistence abstractions
pub use models::{NewPost, NewUser, Post, User};
pub use page::{PageData, PageParams, MAX_PAGE_SIZE};
pub use repository::{Repository, RepositoryPtr};
