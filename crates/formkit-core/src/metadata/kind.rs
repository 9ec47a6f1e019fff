use crate::{
    Error,
    traits::FormModel,
    types::{FieldMap, Rule, WidgetConfig},
};
use std::fmt;

///
/// MetadataKind
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MetadataKind {
    Hints,
    Labels,
    Placeholders,
    Rules,
    WidgetConfig,
}

impl MetadataKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hints => "hints",
            Self::Labels => "labels",
            Self::Placeholders => "placeholders",
            Self::Rules => "rules",
            Self::WidgetConfig => "widget_config",
        }
    }
}

impl fmt::Display for MetadataKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

///
/// Metadata
///
/// Selects one pair of accessors on [`FormModel`]: the bulk map declared on
/// a model, and the by-property accessor re-entered on a nested model.
///
/// `Declared` is what a model lists in its bulk map; `Value` is what a
/// by-property lookup hands back (they differ for rules, where absence is
/// `None` rather than an empty list).
///

pub trait Metadata {
    const KIND: MetadataKind;

    type Declared;
    type Value: From<Self::Declared>;

    fn declared<M: FormModel + ?Sized>(model: &M) -> FieldMap<Self::Declared>;

    fn by_property(model: &dyn FormModel, path: &str) -> Result<Self::Value, Error>;
}

///
/// Labels
///

pub struct Labels;

impl Metadata for Labels {
    const KIND: MetadataKind = MetadataKind::Labels;

    type Declared = String;
    type Value = String;

    fn declared<M: FormModel + ?Sized>(model: &M) -> FieldMap<String> {
        model.labels()
    }

    fn by_property(model: &dyn FormModel, path: &str) -> Result<String, Error> {
        model.label_by_property(path)
    }
}

///
/// Hints
///

pub struct Hints;

impl Metadata for Hints {
    const KIND: MetadataKind = MetadataKind::Hints;

    type Declared = String;
    type Value = String;

    fn declared<M: FormModel + ?Sized>(model: &M) -> FieldMap<String> {
        model.hints()
    }

    fn by_property(model: &dyn FormModel, path: &str) -> Result<String, Error> {
        model.hint_by_property(path)
    }
}

///
/// Placeholders
///

pub struct Placeholders;

impl Metadata for Placeholders {
    const KIND: MetadataKind = MetadataKind::Placeholders;

    type Declared = String;
    type Value = String;

    fn declared<M: FormModel + ?Sized>(model: &M) -> FieldMap<String> {
        model.placeholders()
    }

    fn by_property(model: &dyn FormModel, path: &str) -> Result<String, Error> {
        model.placeholder_by_property(path)
    }
}

///
/// Rules
///

pub struct Rules;

impl Metadata for Rules {
    const KIND: MetadataKind = MetadataKind::Rules;

    type Declared = Vec<Rule>;
    type Value = Option<Vec<Rule>>;

    fn declared<M: FormModel + ?Sized>(model: &M) -> FieldMap<Vec<Rule>> {
        model.rules()
    }

    fn by_property(model: &dyn FormModel, path: &str) -> Result<Option<Vec<Rule>>, Error> {
        model.rules_by_property(path)
    }
}

///
/// WidgetConfigByProperty
///

pub struct WidgetConfigByProperty;

impl Metadata for WidgetConfigByProperty {
    const KIND: MetadataKind = MetadataKind::WidgetConfig;

    type Declared = WidgetConfig;
    type Value = WidgetConfig;

    fn declared<M: FormModel + ?Sized>(model: &M) -> FieldMap<WidgetConfig> {
        model.widget_config_by_properties()
    }

    fn by_property(model: &dyn FormModel, path: &str) -> Result<WidgetConfig, Error> {
        model.widget_config_by_property(path)
    }
}
