//! Tagged-value tree and bencode codec.
//!
//! The tree is a closed sum type with four node kinds:
//!
//! - [`BencValue::Dict`] - string-keyed dictionary ([`BencDict`])
//! - [`BencValue::Array`] - ordered list of nodes
//! - [`BencValue::Int`] - 64-bit signed integer
//! - [`BencValue::Str`] - byte string
//!
//! It carries no domain meaning of its own; the preferences crate maps its
//! typed records onto it.
//!
//! # Example
//!
//! ```
//! use folio_benc::{BencDict, BencValue};
//!
//! let mut dict = BencDict::new();
//! dict.insert("Page", 12i64);
//! dict.insert("File", "report.pdf");
//!
//! let bytes = BencValue::Dict(dict).encode();
//! assert_eq!(bytes, b"d4:File10:report.pdf4:Pagei12ee");
//!
//! let decoded = BencValue::decode(&bytes).unwrap();
//! assert_eq!(decoded.as_dict().unwrap().get_int("Page"), Some(12));
//! ```

mod codec;
mod error;
mod value;

pub use codec::{MAX_DEPTH, decode, encode};
pub use error::{BencError, Result};
pub use value::{BencDict, BencValue, ValueKind};
