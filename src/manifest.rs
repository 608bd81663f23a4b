//! Manifest persistence
//!
//! A manifest is stored as a flat JSON object of relative path to
//! 64-character lowercase hex digest, keys sorted, four-space indent:
//!
//! ```json
//! {
//!     "a.txt": "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
//! }
//! ```
//!
//! No header or metadata is embedded; the digest algorithm is always SHA-256.

mod store;

pub use store::{from_json_slice, from_json_str, load, save, to_json_string};
