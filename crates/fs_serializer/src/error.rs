use thiserror::Error;

// -----------------------------------------------------------------------------
// Error

/// Errors returned by [`FieldSerializer::serialize`] and
/// [`FieldSerializer::serialize_ignore_null`].
///
/// The error is sticky: once recorded by [`FieldSerializer::init`] it is
/// returned by every later serialize call until the serializer is
/// re-initialized with an object.
///
/// [`FieldSerializer::serialize`]: crate::FieldSerializer::serialize
/// [`FieldSerializer::serialize_ignore_null`]: crate::FieldSerializer::serialize_ignore_null
/// [`FieldSerializer::init`]: crate::FieldSerializer::init
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum SerializeError {
    #[error("object is nil")]
    NilObject,

    #[error("serializer used before `init`")]
    Uninitialized,
}
