//! Storage abstractions for the service layer
//!
//! Contains the generic in-memory ordered store that record types build on.

pub mod memory_store;

pub use memory_store::{MemoryStore, Page, Record};
