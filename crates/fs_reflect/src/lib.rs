//! Named field access for record-like types.
//!
//! - [`Value`]: the universal value produced by a field lookup.
//! - [`ToValue`]: read a field's current value without consuming it.
//! - [`Record`]: look up a field of a struct by its name at runtime.
//!
//! [`Record`] is usually implemented through `#[derive(Record)]`
//! (enabled by the `derive` feature), which generates the field map at
//! compile time.
//!
//! ```
//! # #[cfg(feature = "derive")] {
//! use fs_reflect::{Record, Value, derive::Record};
//!
//! #[derive(Record)]
//! pub struct User {
//!     pub name: String,
//!     pub age: u32,
//!     password: String,
//! }
//!
//! let user = User { name: "a".into(), age: 5, password: "secret".into() };
//!
//! assert_eq!(user.field("name"), Some(Value::from("a")));
//! assert_eq!(user.field("age"), Some(Value::from(5_u32)));
//! assert_eq!(user.field("password"), None);
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::fs_reflect` paths; this lets them resolve inside
// the crate's own tests.
extern crate self as fs_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod record;
mod to_value;
mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use record::Record;
pub use to_value::ToValue;
pub use value::Value;

#[cfg(feature = "derive")]
pub use fs_reflect_derive as derive;
