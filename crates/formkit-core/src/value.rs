use crate::traits::FormModel;
use std::fmt;

///
/// PropertyValue
///
/// The current value of a property, as reported by
/// [`PropertyAccess`](crate::traits::PropertyAccess).
///
/// Metadata resolution only cares whether a value is a nested form model;
/// scalars are kept so callers can reuse the same accessor elsewhere.
///

#[derive(Clone, Copy)]
pub enum PropertyValue<'a> {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(&'a str),
    Model(&'a dyn FormModel),
    Other,
}

impl<'a> PropertyValue<'a> {
    /// The nested model, if this value is one.
    #[must_use]
    pub fn as_model(self) -> Option<&'a dyn FormModel> {
        match self {
            Self::Model(model) => Some(model),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_model(&self) -> bool {
        matches!(self, Self::Model(_))
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl fmt::Debug for PropertyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("Null"),
            Self::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            Self::Int(v) => f.debug_tuple("Int").field(v).finish(),
            Self::Float(v) => f.debug_tuple("Float").field(v).finish(),
            Self::Text(v) => f.debug_tuple("Text").field(v).finish(),
            Self::Model(_) => f.write_str("Model(..)"),
            Self::Other => f.write_str("Other"),
        }
    }
}

impl From<bool> for PropertyValue<'_> {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for PropertyValue<'_> {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for PropertyValue<'_> {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl<'a> From<&'a str> for PropertyValue<'a> {
    fn from(v: &'a str) -> Self {
        Self::Text(v)
    }
}

impl<'a> From<&'a String> for PropertyValue<'a> {
    fn from(v: &'a String) -> Self {
        Self::Text(v)
    }
}

impl<'a, T> From<Option<T>> for PropertyValue<'a>
where
    T: Into<Self>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<'a, M: FormModel> From<&'a M> for PropertyValue<'a> {
    fn from(model: &'a M) -> Self {
        Self::Model(model)
    }
}
