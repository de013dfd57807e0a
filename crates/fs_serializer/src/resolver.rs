use alloc::boxed::Box;
use alloc::string::String;

use fs_reflect::{Record, Value};

use crate::FieldSerializer;

/// A computed field handler.
pub(crate) type Handler<T> = Box<dyn Fn(&FieldSerializer<T>) -> Value>;

/// Produces the value of one output field at serialize time.
pub(crate) enum Resolver<T> {
    /// Reads the named attribute of the bound object.
    Attribute(String),
    /// Calls a caller-supplied handler.
    Computed(Handler<T>),
}

impl<T: Record> Resolver<T> {
    #[inline]
    pub(crate) fn resolve(&self, serializer: &FieldSerializer<T>) -> Value {
        match self {
            Self::Attribute(attribute) => serializer
                .object()
                .and_then(|object| object.field(attribute))
                .unwrap_or_default(),
            Self::Computed(handler) => handler(serializer),
        }
    }
}
