//! Vector store provider implementations

#[cfg(feature = "vectorstore-filesystem")]
pub mod filesystem;
#[cfg(feature = "vectorstore-memory")]
pub mod in_memory;

#[cfg(any(feature = "vectorstore-memory", feature = "vectorstore-filesystem"))]
mod similarity;

#[cfg(feature = "vectorstore-filesystem")]
pub use filesystem::{FilesystemVectorStore, FilesystemVectorStoreConfig};
#[cfg(feature = "vectorstore-memory")]
pub use in_memory::InMemoryVectorStoreProvider;
