mod cache;
mod session;

pub use cache::CacheTable;
pub use cache::ResultCache;
pub use session::Credential;
pub use session::Session;
