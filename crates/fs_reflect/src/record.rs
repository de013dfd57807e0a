use alloc::boxed::Box;
use alloc::rc::Rc;

use crate::Value;

// -----------------------------------------------------------------------------
// Record

/// Runtime access to the named fields of a struct.
///
/// Only *readable* fields are visible through this trait. With
/// `#[derive(Record)]` these are the `pub` fields not marked
/// `#[record(skip)]`, plus private fields marked `#[record(expose)]`.
/// Any other name behaves as if the field did not exist.
///
/// The trait is object safe and forwarded through `&R`, `&mut R`, `Box<R>`
/// and `Rc<R>`, so a reference can be handed out wherever a record is
/// expected.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "derive")] {
/// use fs_reflect::{Record, Value, derive::Record};
///
/// #[derive(Record)]
/// pub struct Foo {
///     pub id: u32,
///     #[record(rename = "label")]
///     pub name: String,
/// }
///
/// let foo = Foo { id: 1, name: "x".into() };
/// let record: &dyn Record = &foo;
///
/// assert_eq!(record.field_names(), &["id", "label"]);
/// assert_eq!(record.field("label"), Some(Value::from("x")));
/// assert!(!record.has_field("name"));
/// # }
/// ```
pub trait Record {
    /// Returns the current value of the field named `name`.
    ///
    /// Returns `None` if the field does not exist or is not readable.
    fn field(&self, name: &str) -> Option<Value>;

    /// Names of every readable field, in declaration order.
    fn field_names(&self) -> &'static [&'static str];

    #[inline]
    fn has_field(&self, name: &str) -> bool {
        self.field_names().contains(&name)
    }

    #[inline]
    fn field_len(&self) -> usize {
        self.field_names().len()
    }
}

macro_rules! impl_forward {
    ($($ptr:ty),+ $(,)?) => {
        $(
            impl<R: Record + ?Sized> Record for $ptr {
                #[inline]
                fn field(&self, name: &str) -> Option<Value> {
                    (**self).field(name)
                }

                #[inline]
                fn field_names(&self) -> &'static [&'static str] {
                    (**self).field_names()
                }

                #[inline]
                fn has_field(&self, name: &str) -> bool {
                    (**self).has_field(name)
                }
            }
        )+
    };
}

impl_forward!(&R, &mut R, Box<R>, Rc<R>);

// -----------------------------------------------------------------------------
// Tests
