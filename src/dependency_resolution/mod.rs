/// Dependency resolution core: domain model and pure graph services
pub mod domain;
pub mod services;
