/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_repository_loader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_repository_loader::MockRepositoryLoader;
