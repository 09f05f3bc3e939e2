pub mod cycle_edge;
pub mod forward_graph;
pub mod package;
pub mod repository;
pub mod reverse_graph;

pub use cycle_edge::CycleEdge;
pub use forward_graph::ForwardGraph;
pub use package::{PackageName, PackageRecord};
pub use repository::RepositoryDescriptor;
pub use reverse_graph::{ReverseDependencySet, ReverseGraph};
