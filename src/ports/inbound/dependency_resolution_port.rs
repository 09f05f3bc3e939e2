use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::shared::Result;

/// DependencyResolutionPort - Inbound port for the resolve use case
///
/// This port defines the interface that external adapters (CLI, tests, etc.)
/// use to trigger dependency resolution. It represents the application's public API.
pub trait DependencyResolutionPort {
    /// Loads the requested repository and resolves the package's graph
    ///
    /// # Errors
    /// Returns an error only if the repository descriptor cannot be acquired;
    /// graph construction itself never fails.
    fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse>;
}
