//! Store implementations.

#[cfg(feature = "file-store")]
pub mod file;
#[cfg(feature = "local-store")]
pub mod local;

#[cfg(feature = "file-store")]
pub use file::JsonFileStore;
#[cfg(feature = "local-store")]
pub use local::MemoryStore;
