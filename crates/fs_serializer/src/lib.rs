//! Map an object to a set of named output fields.
//!
//! A [`FieldSerializer`] binds an object implementing
//! [`Record`](fs_reflect::Record), collects named field registrations and
//! resolves them into a [`FieldMap`] on demand.
//!
//! - [`FieldSerializer::register_field_name`]: read an attribute of the object.
//! - [`FieldSerializer::register_field_func`]: compute a value from the serializer.
//! - [`FieldSerializer::serialize`]: resolve every field.
//! - [`FieldSerializer::serialize_ignore_null`]: resolve, dropping null values.
//!
//! Binding a nil object is reported lazily: [`SerializeError::NilObject`] is
//! returned by every serialize call. Unknown attribute names are dropped
//! without error and listed by [`FieldSerializer::rejected_fields`].
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod rejected;
mod resolver;
mod serializer;
mod traits;

// -----------------------------------------------------------------------------
// Exports

pub use error::SerializeError;
pub use rejected::{RejectReason, RejectedField};
pub use serializer::{FieldMap, FieldSerializer};
pub use traits::SerializeFields;
