//! Application state management.
//!
//! Defines the shared state handed to every Axum handler. `AppState` holds
//! the repository and metrics backends behind `Arc`, so cloning it per
//! request is cheap.

use crate::domain::{MetricsPtr, RepositoryPtr};

/// Shared application state passed to all Axum handlers.
///
/// Serves as the dependency injection container: handlers depend on the
/// `Repository` and `Metrics` abstractions, never on concrete backends.
/// Built once at startup, attached with `.with_state(...)`, never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Persistent storage for users and posts.
    repository: RepositoryPtr,

    /// Prometheus-backed in production, no-op in tests and development.
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(repository: RepositoryPtr, metrics: MetricsPtr) -> Self {
        // ---
        AppState {
            repository,
            metrics,
        }
    }

    /// Get a reference to the metrics implementation.
    pub fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }

    /// Get a reference to the repository implementation.
    pub fn repository(&self) -> &RepositoryPtr {
        // ---
        &self.repository
    }
}
