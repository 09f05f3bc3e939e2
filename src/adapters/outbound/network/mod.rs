/// Network adapters for remote repository access
mod http_client;

pub use http_client::HttpRepositoryLoader;
