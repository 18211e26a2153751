//! Catalog record types and the character store.

pub mod store;
pub mod types;

pub use store::{CharacterStore, SharedStore, lock_store, shared_store, snapshot};
pub use types::{Character, CharacterPage, Location, LocationPage, LocationRef, PageInfo, Status};
