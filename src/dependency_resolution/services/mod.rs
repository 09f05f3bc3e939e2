mod forward_graph_builder;
mod graph_inverter;
mod reverse_dependency_resolver;

pub use forward_graph_builder::{ForwardGraphBuilder, ForwardResolution};
pub use graph_inverter::GraphInverter;
pub use reverse_dependency_resolver::ReverseDependencyResolver;
