//! Mapping between preference types and the tagged-value tree.
//!
//! - `global` - [`GlobalSettings`](crate::GlobalSettings) <-> dictionary
//! - `entry` - [`DocumentRecord`](crate::DocumentRecord) <-> dictionary
//! - `history` - [`DocumentHistory`](crate::DocumentHistory) <-> array
//! - `keys` - the on-disk key strings
//!
//! Decoding never fails on a per-field basis: absent or malformed values
//! leave the target as it was.

mod entry;
mod field;
mod global;
mod history;
pub mod keys;

pub use entry::{deserialize_entry, serialize_entry};
pub use global::{deserialize_global, serialize_global};
pub use history::{deserialize_history, serialize_history};
