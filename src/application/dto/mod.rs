/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod resolve_request;
mod resolve_response;

pub use output_format::AsciiMode;
pub use resolve_request::{ResolveRequest, ResolveRequestBuilder};
pub use resolve_response::ResolveResponse;
