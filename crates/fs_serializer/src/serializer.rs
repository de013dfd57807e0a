use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use fs_reflect::{Record, Value};
use fs_utils::hash::HashMap;

use crate::resolver::Resolver;
use crate::{RejectReason, RejectedField, SerializeError};

/// The output of a serialize call: output field name to value.
///
/// Iteration order is unspecified.
pub type FieldMap = HashMap<String, Value>;

// -----------------------------------------------------------------------------
// FieldSerializer

/// Builds a [`FieldMap`] from a bound object and a set of named fields.
///
/// Each output field is either read from an attribute of the object
/// ([`register_field_name`]) or computed by a handler
/// ([`register_field_func`]). Fields are resolved again on every
/// [`serialize`] call, so changes made to the object through
/// [`object_mut`] show up in the next output.
///
/// # Errors
///
/// Binding a nil object does not fail at [`init`]. The error is kept and
/// returned by every [`serialize`] and [`serialize_ignore_null`] call.
/// Serializing before [`init`] returns [`SerializeError::Uninitialized`].
///
/// # Examples
///
/// ```
/// use fs_reflect::{Value, derive::Record};
/// use fs_serializer::FieldSerializer;
///
/// #[derive(Record)]
/// pub struct User {
///     pub name: String,
///     pub age: u32,
///     pub nickname: Option<String>,
/// }
///
/// let user = User { name: "a".into(), age: 5, nickname: None };
///
/// let mut ser = FieldSerializer::new();
/// ser.init(Some(&user))
///     .register_field_name("n", "name")
///     .register_field_name("nick", "nickname")
///     .register_field_func("doubled", |s| s.object().map(|u| u.age * 2));
///
/// let map = ser.serialize().unwrap();
/// assert_eq!(map["n"], Value::from("a"));
/// assert_eq!(map["doubled"], Value::from(10));
/// assert!(map["nick"].is_null());
///
/// let map = ser.serialize_ignore_null().unwrap();
/// assert!(!map.contains_key("nick"));
/// ```
///
/// [`register_field_name`]: FieldSerializer::register_field_name
/// [`register_field_func`]: FieldSerializer::register_field_func
/// [`serialize`]: FieldSerializer::serialize
/// [`serialize_ignore_null`]: FieldSerializer::serialize_ignore_null
/// [`object_mut`]: FieldSerializer::object_mut
/// [`init`]: FieldSerializer::init
pub struct FieldSerializer<T> {
    object: Option<T>,
    fields: HashMap<String, Resolver<T>>,
    rejected: Vec<RejectedField>,
    error: Option<SerializeError>,
}

impl<T> Default for FieldSerializer<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FieldSerializer<T> {
    /// Creates an uninitialized serializer.
    ///
    /// Serializing it fails with [`SerializeError::Uninitialized`] until
    /// [`init`](Self::init) is called.
    #[inline]
    pub const fn new() -> Self {
        Self {
            object: None,
            fields: HashMap::with_hasher(fs_utils::hash::FixedHashState),
            rejected: Vec::new(),
            error: Some(SerializeError::Uninitialized),
        }
    }

    /// Creates a serializer and binds `object`, see [`init`](Self::init).
    #[inline]
    pub fn with_object(object: Option<T>) -> Self {
        let mut serializer = Self::new();
        serializer.init(object);
        serializer
    }

    /// Binds `object` and clears every registration.
    ///
    /// A `None` object is recorded as [`SerializeError::NilObject`], which
    /// every later serialize call returns. Returns `self` for chaining.
    pub fn init(&mut self, object: Option<T>) -> &mut Self {
        if object.is_none() {
            log::warn!("FieldSerializer::init -> {}", SerializeError::NilObject);
        }
        self.error = object.is_none().then_some(SerializeError::NilObject);
        self.object = object;
        self.fields.clear();
        self.rejected.clear();
        self
    }

    /// Returns `true` once [`init`](Self::init) has been called.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.error != Some(SerializeError::Uninitialized)
    }

    /// The sticky error returned by serialize calls, if any.
    #[inline]
    pub fn error(&self) -> Option<SerializeError> {
        self.error
    }

    /// The bound object.
    #[inline]
    pub fn object(&self) -> Option<&T> {
        self.object.as_ref()
    }

    /// Mutable access to the bound object.
    ///
    /// Attribute fields always read the current state, so changes made here
    /// are visible in the next serialize call.
    #[inline]
    pub fn object_mut(&mut self) -> Option<&mut T> {
        self.object.as_mut()
    }

    /// Consumes the serializer and returns the bound object.
    #[inline]
    pub fn into_object(self) -> Option<T> {
        self.object
    }

    /// Registers an output field computed by `handler`.
    ///
    /// Always succeeds. A field with the same name is replaced. The handler
    /// receives the serializer, so it can read the bound object through
    /// [`object`](Self::object). Returning `None` yields [`Value::Null`].
    ///
    /// Handlers are stored for the life of the serializer and must be
    /// `'static`: they cannot borrow locals. Move owned data into the
    /// closure, or share it through an `Rc`.
    ///
    /// ```
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// use fs_reflect::{Value, derive::Record};
    /// use fs_serializer::FieldSerializer;
    ///
    /// #[derive(Record)]
    /// pub struct Item {
    ///     pub price: u32,
    /// }
    ///
    /// let rate = Rc::new(Cell::new(2_u32));
    /// let mut ser = FieldSerializer::with_object(Some(Item { price: 5 }));
    /// let shared = Rc::clone(&rate);
    /// ser.register_field_func("total", move |s| s.object().map(|i| i.price * shared.get()));
    ///
    /// assert_eq!(ser.serialize().unwrap()["total"], Value::from(10));
    /// rate.set(3);
    /// assert_eq!(ser.serialize().unwrap()["total"], Value::from(15));
    /// ```
    pub fn register_field_func<V, F>(&mut self, name: impl Into<String>, handler: F) -> &mut Self
    where
        V: Into<Value>,
        F: Fn(&Self) -> V + 'static,
    {
        let handler = Box::new(move |serializer: &Self| handler(serializer).into());
        self.insert(name.into(), Resolver::Computed(handler));
        self
    }

    /// Removes an output field, returns `true` if it was registered.
    #[inline]
    pub fn unregister_field(&mut self, name: &str) -> bool {
        self.fields.remove(name).is_some()
    }

    #[inline]
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Names of the registered output fields, in no particular order.
    #[inline]
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of registered output fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Attribute registrations dropped since the last [`init`](Self::init).
    #[inline]
    pub fn rejected_fields(&self) -> &[RejectedField] {
        &self.rejected
    }

    fn insert(&mut self, name: String, resolver: Resolver<T>) {
        if self.fields.contains_key(&name) {
            log::debug!("FieldSerializer: replacing the resolver of field `{name}`");
        }
        self.fields.insert(name, resolver);
    }
}

impl<T: Record> FieldSerializer<T> {
    /// Registers an output field `name` read from the object's `attribute`.
    ///
    /// The attribute is read on every serialize call. If the object has no
    /// readable attribute with that name, or no object is bound, the
    /// registration is dropped without error: the output will not contain
    /// `name`. Dropped registrations are listed by
    /// [`rejected_fields`](Self::rejected_fields).
    pub fn register_field_name(&mut self, name: impl Into<String>, attribute: &str) -> &mut Self {
        let name = name.into();

        let reason = match &self.object {
            None => Some(RejectReason::NoObject),
            Some(object) if !object.has_field(attribute) => Some(RejectReason::UnknownAttribute),
            Some(_) => None,
        };

        match reason {
            None => self.insert(name, Resolver::Attribute(attribute.into())),
            Some(reason) => {
                let rejected = RejectedField {
                    name,
                    attribute: attribute.into(),
                    reason,
                };
                log::warn!("FieldSerializer::register_field_name -> {rejected}");
                self.rejected.push(rejected);
            }
        }
        self
    }

    /// Resolves every registered field against the current object.
    ///
    /// # Errors
    ///
    /// Returns the sticky [`SerializeError`] recorded by
    /// [`init`](Self::init), or [`SerializeError::Uninitialized`].
    #[inline]
    pub fn serialize(&self) -> Result<FieldMap, SerializeError> {
        self.resolve_fields(false)
    }

    /// Same as [`serialize`](Self::serialize), without entries whose value is
    /// [`Value::Null`].
    ///
    /// # Errors
    ///
    /// See [`serialize`](Self::serialize).
    #[inline]
    pub fn serialize_ignore_null(&self) -> Result<FieldMap, SerializeError> {
        self.resolve_fields(true)
    }

    fn resolve_fields(&self, ignore_null: bool) -> Result<FieldMap, SerializeError> {
        if let Some(error) = self.error {
            return Err(error);
        }

        let mut map = FieldMap::with_capacity_and_hasher(self.fields.len(), Default::default());
        for (name, resolver) in &self.fields {
            let value = resolver.resolve(self);
            if ignore_null && value.is_null() {
                continue;
            }
            map.insert(name.clone(), value);
        }

        log::trace!(
            "FieldSerializer: resolved {} of {} fields",
            map.len(),
            self.fields.len()
        );
        Ok(map)
    }
}

impl<T: fmt::Debug> fmt::Debug for FieldSerializer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSerializer")
            .field("object", &self.object)
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("rejected", &self.rejected)
            .field("error", &self.error)
            .finish()
    }
}

// -----------------------------------------------------------------------------
// Tests

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec::Vec;

    use fs_reflect::Value;
    use fs_reflect::derive::Record;

    use super::FieldSerializer;
    use crate::{RejectReason, SerializeError};

    #[derive(Record, Debug)]
    #[allow(dead_code, reason = "hidden fields are never read")]
    pub struct Person {
        pub name: String,
        pub age: u32,
        pub nickname: Option<String>,
        secret: String,
    }

    fn person() -> Person {
        Person {
            name: "a".into(),
            age: 5,
            nickname: None,
            secret: "s".into(),
        }
    }

    #[test]
    fn attribute_fields() {
        let person = person();
        let mut ser = FieldSerializer::new();
        ser.init(Some(&person))
            .register_field_name("n", "name")
            .register_field_name("age", "age");

        let map = ser.serialize().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["n"], Value::from("a"));
        assert_eq!(map["age"], Value::from(5));
    }

    #[test]
    fn computed_field() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_func("doubled", |s| s.object().map(|p| p.age * 2));

        let map = ser.serialize().unwrap();
        assert_eq!(map["doubled"], Value::from(10));
    }

    #[test]
    fn computed_field_owns_its_state() {
        let suffix = String::from("!");
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_func("shout", move |s| {
            s.object().map(|p| alloc::format!("{}{suffix}", p.name))
        });

        assert_eq!(ser.serialize().unwrap()["shout"], Value::from("a!"));
    }

    #[derive(Record)]
    pub struct Token {
        pub r#type: String,
    }

    #[test]
    fn raw_identifier_attribute() {
        let mut ser = FieldSerializer::with_object(Some(Token { r#type: "t".into() }));
        ser.register_field_name("type", "type");

        assert!(ser.rejected_fields().is_empty());
        assert_eq!(ser.serialize().unwrap()["type"], Value::from("t"));
    }

    #[test]
    fn null_fields() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_name("nick", "nickname")
            .register_field_name("n", "name")
            .register_field_func("none", |_| ());

        let map = ser.serialize().unwrap();
        assert_eq!(map.len(), 3);
        assert!(map["nick"].is_null());
        assert!(map["none"].is_null());

        let map = ser.serialize_ignore_null().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["n"], Value::from("a"));
    }

    #[test]
    fn ignore_null_is_serialize_without_nulls() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_name("n", "name")
            .register_field_name("age", "age")
            .register_field_name("nick", "nickname");

        let mut full = ser.serialize().unwrap();
        full.retain(|_, value| !value.is_null());
        assert_eq!(full, ser.serialize_ignore_null().unwrap());
    }

    #[test]
    fn unknown_attribute_is_dropped() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_name("x", "missing")
            .register_field_name("s", "secret")
            .register_field_name("n", "Name");

        let map = ser.serialize().unwrap();
        assert!(map.is_empty());
        assert!(ser.is_empty());

        let rejected = ser.rejected_fields();
        assert_eq!(rejected.len(), 3);
        assert!(rejected.iter().all(|r| r.reason == RejectReason::UnknownAttribute));
        assert_eq!(rejected[1].attribute, "secret");
    }

    #[test]
    fn re_registration_replaces() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_name("v", "name")
            .register_field_func("v", |_| 42_i32);
        assert_eq!(ser.serialize().unwrap()["v"], Value::from(42));

        ser.register_field_name("v", "age");
        let map = ser.serialize().unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["v"], Value::from(5));
    }

    #[test]
    fn mutations_are_visible() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_name("age", "age")
            .register_field_name("nick", "nickname");
        assert_eq!(ser.serialize().unwrap()["age"], Value::from(5));

        let person = ser.object_mut().unwrap();
        person.age = 6;
        person.nickname = Some("b".into());

        let map = ser.serialize().unwrap();
        assert_eq!(map["age"], Value::from(6));
        assert_eq!(map["nick"], Value::from("b"));
        assert_eq!(ser.serialize_ignore_null().unwrap().len(), 2);

        assert_eq!(ser.into_object().map(|p| p.age), Some(6));
    }

    #[test]
    fn nil_object_is_sticky() {
        let mut ser: FieldSerializer<&Person> = FieldSerializer::new();
        ser.init(None)
            .register_field_name("n", "name")
            .register_field_func("c", |_| 1_i32);

        assert!(ser.is_initialized());
        assert_eq!(ser.error(), Some(SerializeError::NilObject));
        assert_eq!(ser.serialize(), Err(SerializeError::NilObject));
        assert_eq!(ser.serialize(), Err(SerializeError::NilObject));
        assert_eq!(ser.serialize_ignore_null(), Err(SerializeError::NilObject));
        assert_eq!(ser.rejected_fields()[0].reason, RejectReason::NoObject);
    }

    #[test]
    fn uninitialized_is_an_error() {
        let ser: FieldSerializer<Person> = FieldSerializer::default();
        assert!(!ser.is_initialized());
        assert_eq!(ser.serialize(), Err(SerializeError::Uninitialized));
        assert_eq!(ser.serialize_ignore_null(), Err(SerializeError::Uninitialized));
    }

    #[test]
    fn init_resets_registrations() {
        let first = person();
        let mut second = person();
        second.name = "z".into();

        let mut ser = FieldSerializer::with_object(Some(&first));
        ser.register_field_name("n", "name")
            .register_field_name("x", "missing");

        ser.init(Some(&second)).register_field_name("name", "name");
        assert!(ser.rejected_fields().is_empty());

        let names: Vec<&str> = ser.field_names().collect();
        assert_eq!(names, ["name"]);
        assert_eq!(ser.serialize().unwrap()["name"], Value::from("z"));

        ser.init(None);
        assert_eq!(ser.serialize(), Err(SerializeError::NilObject));
        ser.init(Some(&first));
        assert!(ser.serialize().unwrap().is_empty());
    }

    #[test]
    fn unregister_field() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_name("n", "name");
        assert!(ser.contains_field("n"));
        assert!(ser.unregister_field("n"));
        assert!(!ser.unregister_field("n"));
        assert!(ser.serialize().unwrap().is_empty());
    }

    #[test]
    fn output_is_json_serializable() {
        let mut ser = FieldSerializer::with_object(Some(person()));
        ser.register_field_name("age", "age");

        let json = serde_json::to_string(&ser.serialize().unwrap()).unwrap();
        assert_eq!(json, r#"{"age":5}"#);
    }
}
