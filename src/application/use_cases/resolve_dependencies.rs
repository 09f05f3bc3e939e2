use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::dependency_resolution::domain::PackageRecord;
use crate::dependency_resolution::services::{
    ForwardGraphBuilder, GraphInverter, ReverseDependencyResolver,
};
use crate::ports::inbound::DependencyResolutionPort;
use crate::ports::outbound::{ProgressReporter, RepositoryLoader};
use crate::shared::Result;

/// ResolveDependenciesUseCase - Core use case for dependency graph resolution
///
/// Loads the repository descriptor once, then runs the pure graph services
/// over that snapshot: forward graph and cycles, and optionally the reverse
/// graph and transitive consumers.
///
/// # Type Parameters
/// * `L` - RepositoryLoader implementation
/// * `PR` - ProgressReporter implementation
pub struct ResolveDependenciesUseCase<L, PR> {
    repository_loader: L,
    progress_reporter: PR,
}

impl<L, PR> ResolveDependenciesUseCase<L, PR>
where
    L: RepositoryLoader,
    PR: ProgressReporter,
{
    /// Creates a new ResolveDependenciesUseCase with injected dependencies
    pub fn new(repository_loader: L, progress_reporter: PR) -> Self {
        Self {
            repository_loader,
            progress_reporter,
        }
    }

    /// Executes the resolve use case
    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        // Step 1: Acquire the repository descriptor
        self.progress_reporter
            .report(&format!("📖 Loading repository from: {}", request.source));

        let repository = self.repository_loader.load(&request.source)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} package(s)",
            repository.len()
        ));

        for skipped in repository.skipped_entries() {
            self.progress_reporter
                .report_error(&format!("⚠️  Warning: Skipped {}", skipped));
        }

        match repository.get(&request.package) {
            Some(record) => self.progress_reporter.report(&format!(
                "📦 {}",
                Self::describe_package(record)
            )),
            None => self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Package '{}' is not defined in the repository; treating it as a leaf.",
                request.package
            )),
        }

        // Step 2: Forward graph and cycles
        self.progress_reporter.report(&format!(
            "📊 Resolving dependencies of '{}'...",
            request.package
        ));

        let resolution = ForwardGraphBuilder::build(&request.package, &repository);

        self.progress_reporter.report(&format!(
            "   - Reachable packages: {} ({} edge(s))",
            resolution.graph.package_count(),
            resolution.graph.edge_count()
        ));
        self.progress_reporter.report(&format!(
            "   - Unique transitive dependencies: {}",
            resolution.graph.unique_dependency_count()
        ));

        if resolution.has_cycles() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} dependency cycle edge(s) detected.",
                resolution.cycles.len()
            ));
        }

        // Step 3: Reverse dependencies if requested
        let reverse_dependencies = if request.include_reverse {
            self.progress_reporter.report(&format!(
                "🔁 Resolving reverse dependencies of '{}'...",
                request.package
            ));

            let reverse_graph = GraphInverter::invert(&repository);
            let consumers = ReverseDependencyResolver::resolve(&request.package, &reverse_graph);

            self.progress_reporter.report(&format!(
                "   - Packages depending on '{}': {}",
                request.package,
                consumers.len()
            ));

            Some(consumers)
        } else {
            None
        };

        self.progress_reporter
            .report_completion("✅ Dependency resolution complete.");

        Ok(ResolveResponse::new(
            repository.len(),
            resolution,
            reverse_dependencies,
        ))
    }
}

impl<L, PR> ResolveDependenciesUseCase<L, PR> {
    /// `name version - description`, omitting whatever the record lacks
    fn describe_package(record: &PackageRecord) -> String {
        let mut label = record.name().to_string();
        if let Some(version) = record.version() {
            label.push(' ');
            label.push_str(version);
        }
        if let Some(description) = record.description() {
            label.push_str(" - ");
            label.push_str(description);
        }
        label
    }
}

impl<L, PR> DependencyResolutionPort for ResolveDependenciesUseCase<L, PR>
where
    L: RepositoryLoader,
    PR: ProgressReporter,
{
    fn resolve(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        self.execute(request)
    }
}
