#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

///
/// ErrorMap
///
/// Ordered `(property, messages)` pairs, the bulk shape used to read and
/// replace the whole store.
///

pub type ErrorMap = Vec<(String, Vec<String>)>;

///
/// ErrorEntry
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ErrorEntry {
    pub property: String,
    pub messages: Vec<String>,
}

impl ErrorEntry {
    fn new(property: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            messages: Vec::new(),
        }
    }
}

///
/// ErrorStore
///
/// Per-property validation messages for one model instance.
///
/// Properties keep the order in which the store first saw them and messages
/// keep insertion order. A property mapped to an empty list was validated
/// successfully; a property missing from the store was never validated.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(from = "Vec<ErrorEntry>", into = "Vec<ErrorEntry>")]
pub struct ErrorStore {
    entries: Vec<ErrorEntry>,
}

impl ErrorStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append a message to a property, creating the property if needed.
    pub fn add(&mut self, property: &str, message: impl Into<String>) {
        self.entry_mut(property).messages.push(message.into());
    }

    ///
    /// clear
    ///
    /// With a property, mark it validated with no errors (it stays present).
    /// Without one, drop everything.
    ///
    pub fn clear(&mut self, property: Option<&str>) {
        match property {
            Some(property) => self.entry_mut(property).messages.clear(),
            None => {
                tracing::debug!(properties = self.entries.len(), "error store cleared");
                self.entries.clear();
            }
        }
    }

    ///
    /// set
    ///
    /// Replace the whole store. A property listed twice keeps its first
    /// position and its last message list.
    ///
    pub fn set<I, K, V, M>(&mut self, values: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: IntoIterator<Item = M>,
        M: Into<String>,
    {
        self.entries.clear();

        for (property, messages) in values {
            let property = property.into();
            let messages = messages.into_iter().map(Into::into).collect();

            self.entry_mut(&property).messages = messages;
        }

        tracing::debug!(properties = self.entries.len(), "error store replaced");
    }

    /// Every property with at least one message, with all of its messages.
    #[must_use]
    pub fn get(&self) -> ErrorMap {
        self.failing()
            .map(|entry| (entry.property.clone(), entry.messages.clone()))
            .collect()
    }

    /// Every property with at least one message, with its first message.
    #[must_use]
    pub fn get_first(&self) -> Vec<(String, String)> {
        self.failing()
            .filter_map(|entry| {
                entry
                    .messages
                    .first()
                    .map(|first| (entry.property.clone(), first.clone()))
            })
            .collect()
    }

    /// All messages of one property; empty when absent or validated.
    #[must_use]
    pub fn property(&self, property: &str) -> &[String] {
        self.find(property)
            .map(|entry| entry.messages.as_slice())
            .unwrap_or_default()
    }

    /// First message of one property, or `""`.
    #[must_use]
    pub fn property_first(&self, property: &str) -> &str {
        self.property(property).first().map_or("", String::as_str)
    }

    ///
    /// summary
    ///
    /// Flatten messages into one list, property by property. A non-empty
    /// `only` restricts the summary to those properties.
    ///
    #[must_use]
    pub fn summary(&self, only: &[&str]) -> Vec<String> {
        self.selected(only)
            .flat_map(|entry| entry.messages.iter().cloned())
            .collect()
    }

    ///
    /// summary_first
    ///
    /// Like [`summary`](Self::summary) but with at most one message per
    /// property: the `only` filter applies first, then each property is
    /// reduced to its first message.
    ///
    #[must_use]
    pub fn summary_first(&self, only: &[&str]) -> Vec<String> {
        self.selected(only)
            .filter_map(|entry| entry.messages.first().cloned())
            .collect()
    }

    /// Whether the property (or any property, for `None`) has a message.
    #[must_use]
    pub fn has(&self, property: Option<&str>) -> bool {
        match property {
            Some(property) => !self.property(property).is_empty(),
            None => self.failing().next().is_some(),
        }
    }

    /// Whether the property was validated and came out clean.
    #[must_use]
    pub fn has_validated(&self, property: &str) -> bool {
        self.find(property)
            .is_some_and(|entry| entry.messages.is_empty())
    }

    /// Iterate every property the store knows about, validated ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|entry| (entry.property.as_str(), entry.messages.as_slice()))
    }

    /// Number of properties present, validated ones included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // find
    fn find(&self, property: &str) -> Option<&ErrorEntry> {
        self.entries.iter().find(|entry| entry.property == property)
    }

    // entry_mut
    // get or append the entry for a property
    fn entry_mut(&mut self, property: &str) -> &mut ErrorEntry {
        let index = match self
            .entries
            .iter()
            .position(|entry| entry.property == property)
        {
            Some(index) => index,
            None => {
                self.entries.push(ErrorEntry::new(property));
                self.entries.len() - 1
            }
        };

        &mut self.entries[index]
    }

    // failing
    fn failing(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries
            .iter()
            .filter(|entry| !entry.messages.is_empty())
    }

    // selected
    fn selected<'a>(&'a self, only: &'a [&str]) -> impl Iterator<Item = &'a ErrorEntry> {
        self.failing()
            .filter(move |entry| only.is_empty() || only.contains(&entry.property.as_str()))
    }
}

impl<K, V, M> FromIterator<(K, V)> for ErrorStore
where
    K: Into<String>,
    V: IntoIterator<Item = M>,
    M: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = Self::new();
        store.set(iter);

        store
    }
}

impl From<Vec<ErrorEntry>> for ErrorStore {
    fn from(entries: Vec<ErrorEntry>) -> Self {
        entries
            .into_iter()
            .map(|entry| (entry.property, entry.messages))
            .collect()
    }
}

impl From<ErrorStore> for Vec<ErrorEntry> {
    fn from(store: ErrorStore) -> Self {
        store.entries
    }
}
