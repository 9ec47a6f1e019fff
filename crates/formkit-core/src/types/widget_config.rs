use derive_more::{Deref, DerefMut, IntoIterator};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

///
/// WidgetConfig
///
/// Widget setter name → arguments to call it with, e.g.
/// `class` → `["text-gray-100 dark:text-gray-100"]`.
///

#[derive(
    Clone, Debug, Default, Deref, DerefMut, Deserialize, Eq, IntoIterator, PartialEq, Serialize,
)]
#[into_iterator(owned, ref)]
#[serde(transparent)]
pub struct WidgetConfig(BTreeMap<String, Vec<Value>>);

impl WidgetConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add (or replace) one setter call.
    #[must_use]
    pub fn with<A>(mut self, setter: impl Into<String>, args: impl IntoIterator<Item = A>) -> Self
    where
        A: Into<Value>,
    {
        self.0
            .insert(setter.into(), args.into_iter().map(Into::into).collect());

        self
    }

    /// Arguments recorded for a setter.
    #[must_use]
    pub fn args(&self, setter: &str) -> Option<&[Value]> {
        self.0.get(setter).map(Vec::as_slice)
    }
}

///
/// TESTS
///
