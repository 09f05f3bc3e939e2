use crate::dependency_resolution::domain::PackageName;
use crate::ports::outbound::RepositorySource;
use crate::shared::error::DepVizError;
use crate::shared::Result;

/// ResolveRequest - Internal request DTO for the resolve use case
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    /// Package whose dependency graph is resolved
    pub package: PackageName,
    /// Where the repository descriptor comes from
    pub source: RepositorySource,
    /// Whether to also resolve transitive reverse dependencies
    pub include_reverse: bool,
}

impl ResolveRequest {
    pub fn new(package: PackageName, source: RepositorySource, include_reverse: bool) -> Self {
        Self {
            package,
            source,
            include_reverse,
        }
    }

    pub fn builder() -> ResolveRequestBuilder {
        ResolveRequestBuilder::default()
    }
}

/// Builder for [`ResolveRequest`] validating its inputs on `build()`
#[derive(Debug, Default)]
pub struct ResolveRequestBuilder {
    package: Option<String>,
    source: Option<RepositorySource>,
    include_reverse: bool,
}

impl ResolveRequestBuilder {
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn source(mut self, source: RepositorySource) -> Self {
        self.source = Some(source);
        self
    }

    pub fn include_reverse(mut self, include_reverse: bool) -> Self {
        self.include_reverse = include_reverse;
        self
    }

    pub fn build(self) -> Result<ResolveRequest> {
        let package = self.package.ok_or_else(|| DepVizError::Validation {
            message: "package is required".to_string(),
        })?;
        let package = PackageName::new(package).map_err(|e| DepVizError::Validation {
            message: e.to_string(),
        })?;

        let source = self.source.ok_or_else(|| DepVizError::Validation {
            message: "repository source is required".to_string(),
        })?;
        if source.location.trim().is_empty() {
            return Err(DepVizError::Validation {
                message: "repository location must not be empty".to_string(),
            }
            .into());
        }

        Ok(ResolveRequest::new(package, source, self.include_reverse))
    }
}
