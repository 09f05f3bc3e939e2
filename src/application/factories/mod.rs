mod formatter_factory;
mod loader_factory;
mod presenter_factory;

pub use formatter_factory::FormatterFactory;
pub use loader_factory::LoaderFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
