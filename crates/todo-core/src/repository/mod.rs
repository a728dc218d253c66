//! Repository Layer
//!
//! Whole-collection persistence over a key-value store.

mod traits;
mod codec;
mod memory;
mod json_repo;


pub use traits::{KeyValueStore, Repository};
pub use codec::{decode, encode};
pub use memory::MemoryStore;
pub use json_repo::JsonRepository;
