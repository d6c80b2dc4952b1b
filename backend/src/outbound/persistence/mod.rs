//! File-backed persistence adapters.
//!
//! The user collection is stored as one JSON document that is rewritten in
//! full on every save. Writes are atomic: a crash mid-save leaves the previous
//! document in place.

mod atomic_io;
mod json_file_user_store;

pub use json_file_user_store::JsonFileUserStore;
