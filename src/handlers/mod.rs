// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod context;
mod db_version;
mod health;
mod metrics;
mod root;
mod users;

pub use context::RequestContext;

// Core handlers
pub use health::health_check;
pub use metrics::metrics_handler;
pub use root::root_handler;

// Database info
pub use db_version::db_version;

// User and post handlers
pub use users::{create_user, example_user, list_user_posts, list_users, list_users_page};
