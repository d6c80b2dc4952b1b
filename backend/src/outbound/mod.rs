//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: the JSON document store behind the `UserStore` port.
//!
//! Adapters translate between domain types and on-disk representations. They
//! contain no business logic.

pub mod persistence;
