#![warn(missing_docs)]
//! Get-or-insert for maps. Given a key, return the value already stored
//! under it or store a default first. The default can be a ready value, a
//! lazily invoked factory, or a factory fed with a context argument.
//!
//! ```
//! use get_or_insert::GetOrInsert;
//! use hashbrown::HashMap;
//!
//! let mut map = HashMap::from([("a", 1)]);
//! assert_eq!(*map.get_or_insert("a", 99), 1);
//! assert_eq!(*map.get_or_insert("b", 99), 99);
//! assert_eq!(*map.get_or_insert_with("c", || 7), 7);
//! assert_eq!(map.len(), 3);
//! ```
pub mod by_ref;
pub mod checked;
pub mod error;
mod get_or_insert;
pub mod logging;
mod mapping;

pub use error::{Argument, InvalidArgument};
pub use get_or_insert::GetOrInsert;
pub use mapping::{Mapping, Probe, Vacancy};
