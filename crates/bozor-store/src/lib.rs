//! Durable key-value storage for Bozor.
//!
//! The storefront treats durable storage as a string-keyed store of JSON
//! documents, read once at startup and written after every mutation. This
//! crate expresses that contract as a [`KvStore`] trait with two
//! implementations:
//!
//! - [`MemoryStore`] — ephemeral, for tests and throwaway sessions
//! - [`FileStore`] — a single JSON file on disk, surviving restarts
//!
//! Values are JSON documents; typed access goes through
//! [`KvStore::get_json`] and [`KvStore::set_json`].

pub mod error;
pub mod file;
pub mod kv;

pub use error::StoreError;
pub use file::FileStore;
pub use kv::{KvStore, MemoryStore};
