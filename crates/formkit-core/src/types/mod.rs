mod rule;
mod widget_config;

pub use rule::Rule;
pub use widget_config::WidgetConfig;

use std::collections::BTreeMap;

///
/// FieldMap
///
/// Author-declared metadata keyed by property name, the shape every bulk
/// accessor on a form model returns.
///

pub type FieldMap<T> = BTreeMap<&'static str, T>;
