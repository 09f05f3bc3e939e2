use crate::dependency_resolution::domain::ReverseDependencySet;
use crate::dependency_resolution::services::ForwardResolution;

/// ResolveResponse - Internal response DTO from the resolve use case
///
/// Carries the domain results; formatting is left to the adapters.
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    /// Number of packages in the loaded repository descriptor
    pub repository_package_count: usize,
    /// Forward graph reachable from the requested package, plus its cycle edges
    pub resolution: ForwardResolution,
    /// Transitive consumers of the package (only present when requested)
    pub reverse_dependencies: Option<ReverseDependencySet>,
}

impl ResolveResponse {
    pub fn new(
        repository_package_count: usize,
        resolution: ForwardResolution,
        reverse_dependencies: Option<ReverseDependencySet>,
    ) -> Self {
        Self {
            repository_package_count,
            resolution,
            reverse_dependencies,
        }
    }
}
