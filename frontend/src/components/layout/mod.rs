mod header;
mod loader;

pub use header::AppHeader;
pub use loader::Loader;
