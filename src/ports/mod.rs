/// Ports module defining interfaces for hexagonal architecture
///
/// Inbound ports expose dependency resolution to drivers such as the CLI;
/// outbound ports are the seams for loading repositories, rendering graphs,
/// presenting output and reporting progress.
pub mod inbound;
pub mod outbound;
