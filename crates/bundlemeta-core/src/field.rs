//! Typed record field keys and values

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// A value stored in a [`Record`](crate::Record) field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(i64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Name of the stored type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::Flag(_) => bool::NAME,
            FieldValue::Number(_) => i64::NAME,
            FieldValue::Text(_) => String::NAME,
            FieldValue::List(_) => Vec::<String>::NAME,
        }
    }

    /// Borrow the value as a string, if it is one
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Types that can be stored in a record field
pub trait FieldType: Sized {
    /// Human readable type name
    const NAME: &'static str;

    fn into_value(self) -> FieldValue;

    fn from_value(value: &FieldValue) -> Option<Self>;
}

impl FieldType for String {
    const NAME: &'static str = "string";

    fn into_value(self) -> FieldValue {
        FieldValue::Text(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FieldType for bool {
    const NAME: &'static str = "bool";

    fn into_value(self) -> FieldValue {
        FieldValue::Flag(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Flag(b) => Some(*b),
            _ => None,
        }
    }
}

impl FieldType for i64 {
    const NAME: &'static str = "number";

    fn into_value(self) -> FieldValue {
        FieldValue::Number(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl FieldType for Vec<String> {
    const NAME: &'static str = "list";

    fn into_value(self) -> FieldValue {
        FieldValue::List(self)
    }

    fn from_value(value: &FieldValue) -> Option<Self> {
        match value {
            FieldValue::List(items) => Some(items.clone()),
            _ => None,
        }
    }
}

/// A named record field carrying values of type `T`
///
/// Two keys address the same field when their names are equal; the type
/// parameter only governs what [`Record::put`](crate::Record::put) accepts and
/// [`Record::get`](crate::Record::get) returns.
pub struct EntryKey<T> {
    name: Cow<'static, str>,
    _type: PhantomData<fn() -> T>,
}

impl<T> EntryKey<T> {
    /// Key with a static name, usable in `const` items
    pub const fn of(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _type: PhantomData,
        }
    }

    /// Key with a runtime name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            _type: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Clone for EntryKey<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _type: PhantomData,
        }
    }
}

impl<T> PartialEq for EntryKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<T> Eq for EntryKey<T> {}

impl<T> Hash for EntryKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<T: FieldType> fmt::Debug for EntryKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntryKey<{}>({:?})", T::NAME, self.name)
    }
}

impl<T> fmt::Display for EntryKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
