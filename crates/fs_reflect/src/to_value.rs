use alloc::borrow::Cow;
use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::string::String;

use crate::Value;

/// Produce a [`Value`] from a borrowed field.
///
/// This is what `#[derive(Record)]` calls for every readable field, so each
/// lookup sees the field's current content.
///
/// Types that cannot be represented by [`Value`] (collections, nested
/// structs) do not implement this trait; such fields must be marked
/// `#[record(skip)]`.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

macro_rules! impl_copy {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ToValue for $ty {
                #[inline]
                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )+
    };
}

impl_copy!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64
);

impl ToValue for str {
    #[inline]
    fn to_value(&self) -> Value {
        Value::from(self)
    }
}

impl ToValue for String {
    #[inline]
    fn to_value(&self) -> Value {
        Value::from(self.as_str())
    }
}

impl ToValue for Cow<'_, str> {
    #[inline]
    fn to_value(&self) -> Value {
        Value::from(&**self)
    }
}

impl ToValue for Value {
    #[inline]
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    #[inline]
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Null, ToValue::to_value)
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;
    use alloc::string::String;

    use crate::{ToValue, Value};

    #[test]
    fn borrowed_fields() {
        let name = String::from("a");
        assert_eq!(name.to_value(), Value::from("a"));
        assert_eq!((&&name).to_value(), Value::from("a"));
        assert_eq!(Box::new(5_u16).to_value(), Value::UInt(5));
    }

    #[test]
    fn nested_option() {
        let nick: Option<Option<&str>> = Some(None);
        assert!(nick.to_value().is_null());

        let nick: Option<&str> = Some("b");
        assert_eq!(nick.to_value(), Value::from("b"));
    }
}
