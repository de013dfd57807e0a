use fs_reflect::Record;

use crate::{FieldMap, FieldSerializer, SerializeError};

/// Common interface of serializers producing a [`FieldMap`].
///
/// A domain serializer usually owns a [`FieldSerializer`], registers its
/// fields once, and forwards to it. The trait is object safe, so different
/// serializers can be driven through `&dyn SerializeFields`.
///
/// # Examples
///
/// ```
/// use fs_reflect::derive::Record;
/// use fs_serializer::{FieldMap, FieldSerializer, SerializeError, SerializeFields};
///
/// #[derive(Record)]
/// pub struct Book {
///     pub title: String,
///     pub pages: u32,
/// }
///
/// struct BookSerializer<'a>(FieldSerializer<&'a Book>);
///
/// impl<'a> BookSerializer<'a> {
///     fn new(book: Option<&'a Book>) -> Self {
///         let mut inner = FieldSerializer::with_object(book);
///         inner
///             .register_field_name("title", "title")
///             .register_field_func("long", |s| s.object().map(|b| b.pages > 300));
///         Self(inner)
///     }
/// }
///
/// impl SerializeFields for BookSerializer<'_> {
///     fn serialize(&self) -> Result<FieldMap, SerializeError> {
///         self.0.serialize()
///     }
/// }
///
/// let book = Book { title: "t".into(), pages: 500 };
/// let ser: &dyn SerializeFields = &BookSerializer::new(Some(&book));
/// assert_eq!(ser.serialize().unwrap().len(), 2);
///
/// let nil: &dyn SerializeFields = &BookSerializer::new(None);
/// assert_eq!(nil.serialize_ignore_null(), Err(SerializeError::NilObject));
/// ```
pub trait SerializeFields {
    /// Resolves every field. See [`FieldSerializer::serialize`].
    fn serialize(&self) -> Result<FieldMap, SerializeError>;

    /// Resolves every field and drops null values.
    /// See [`FieldSerializer::serialize_ignore_null`].
    fn serialize_ignore_null(&self) -> Result<FieldMap, SerializeError> {
        let mut map = self.serialize()?;
        map.retain(|_, value| !value.is_null());
        Ok(map)
    }
}

impl<T: Record> SerializeFields for FieldSerializer<T> {
    #[inline]
    fn serialize(&self) -> Result<FieldMap, SerializeError> {
        FieldSerializer::serialize(self)
    }

    #[inline]
    fn serialize_ignore_null(&self) -> Result<FieldMap, SerializeError> {
        FieldSerializer::serialize_ignore_null(self)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;
    use alloc::vec::Vec;

    use fs_reflect::Value;
    use fs_reflect::derive::Record;

    use crate::{FieldSerializer, SerializeError, SerializeFields};

    #[derive(Record)]
    pub struct Point {
        pub x: i32,
        pub y: i32,
    }

    #[derive(Record)]
    pub struct Label {
        pub text: Option<String>,
    }

    #[test]
    fn heterogeneous_serializers() {
        let mut point = FieldSerializer::with_object(Some(Point { x: 1, y: -1 }));
        point
            .register_field_name("x", "x")
            .register_field_func("sum", |s| s.object().map(|p| p.x + p.y));

        let mut label = FieldSerializer::with_object(Some(Label { text: None }));
        label.register_field_name("text", "text");

        let nil: FieldSerializer<Label> = FieldSerializer::with_object(None);

        let serializers: Vec<Box<dyn SerializeFields>> =
            alloc::vec![Box::new(point), Box::new(label), Box::new(nil)];

        let first = serializers[0].serialize().unwrap();
        assert_eq!(first["sum"], Value::from(0));

        assert_eq!(serializers[1].serialize().unwrap().len(), 1);
        assert!(serializers[1].serialize_ignore_null().unwrap().is_empty());

        assert_eq!(serializers[2].serialize(), Err(SerializeError::NilObject));
    }
}
