//! depviz - dependency graph resolver and visualizer
//!
//! This library resolves the transitive dependency graph of a package from a
//! repository descriptor (a JSON mapping of package name to direct
//! dependencies), detects dependency cycles, computes reverse dependencies and
//! renders the result as a flat list or an ASCII tree. It follows hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_resolution`): Graph value types and the pure graph services
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depviz::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let loader = FileSystemRepositoryLoader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = ResolveDependenciesUseCase::new(loader, progress_reporter);
//!
//! // Execute
//! let request = ResolveRequest::builder()
//!     .package("web")
//!     .source(RepositorySource::new("repo.json", RepoMode::Local))
//!     .include_reverse(true)
//!     .build()?;
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let report = DependencyReport::from_response(response, true);
//! let output = TreeFormatter::new().format(&report)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod dependency_resolution;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemRepositoryLoader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{ListFormatter, TreeFormatter};
    pub use crate::adapters::outbound::network::HttpRepositoryLoader;
    pub use crate::application::dto::{AsciiMode, ResolveRequest, ResolveResponse};
    pub use crate::application::read_models::DependencyReport;
    pub use crate::application::use_cases::ResolveDependenciesUseCase;
    pub use crate::dependency_resolution::domain::{
        CycleEdge, ForwardGraph, PackageName, PackageRecord, RepositoryDescriptor,
        ReverseDependencySet, ReverseGraph,
    };
    pub use crate::dependency_resolution::services::{
        ForwardGraphBuilder, ForwardResolution, GraphInverter, ReverseDependencyResolver,
    };
    pub use crate::ports::inbound::DependencyResolutionPort;
    pub use crate::ports::outbound::{
        GraphFormatter, OutputPresenter, ProgressReporter, RepoMode, RepositoryLoader,
        RepositorySource,
    };
    pub use crate::shared::Result;
}
