mod widget;

pub use widget::{InputWidget, apply_declared_rules};

use crate::{
    Error,
    error_store::{ErrorMap, ErrorStore},
    metadata::{Hints, Labels, MetadataResolver, Placeholders, Rules, WidgetConfigByProperty},
    types::{FieldMap, Rule, WidgetConfig},
    value::PropertyValue,
};
use formkit_utils::case::humanize;

///
/// PropertyAccess
///
/// Generic read access to a model's properties. This is the only way the
/// resolver looks inside a model, so it must report child form models as
/// [`PropertyValue::Model`] for nested paths to resolve through them.
///

pub trait PropertyAccess {
    /// Current value of a property; unknown properties report `Other`.
    fn property_value(&self, property: &str) -> PropertyValue<'_>;
}

///
/// FormModel
///
/// A data model backing a UI form.
///
/// Implementors supply property access and own an [`ErrorStore`]; every
/// metadata map is optional and defaults to empty. The `*_by_property`
/// accessors accept dotted paths (`profile.address.street`) and resolve them
/// on the innermost model, so a parent never has to repeat its children's
/// declarations.
///

pub trait FormModel: PropertyAccess {
    fn error_store(&self) -> &ErrorStore;

    fn error_store_mut(&mut self) -> &mut ErrorStore;

    //
    // declared metadata
    //

    /// Labels keyed by property.
    fn labels(&self) -> FieldMap<String> {
        FieldMap::new()
    }

    /// Hints keyed by property.
    fn hints(&self) -> FieldMap<String> {
        FieldMap::new()
    }

    /// Placeholders keyed by property.
    fn placeholders(&self) -> FieldMap<String> {
        FieldMap::new()
    }

    /// Validation rules keyed by property.
    fn rules(&self) -> FieldMap<Vec<Rule>> {
        FieldMap::new()
    }

    /// Widget configuration keyed by widget type identifier.
    fn widget_config(&self) -> FieldMap<WidgetConfig> {
        FieldMap::new()
    }

    /// Widget configuration keyed by property.
    fn widget_config_by_properties(&self) -> FieldMap<WidgetConfig> {
        FieldMap::new()
    }

    //
    // resolved metadata
    //

    /// Label for a property path; generated from the path when undeclared.
    fn label_by_property(&self, property: &str) -> Result<String, Error> {
        MetadataResolver::new(self).resolve_or_else::<Labels>(property, || humanize(property))
    }

    fn hint_by_property(&self, property: &str) -> Result<String, Error> {
        MetadataResolver::new(self).resolve::<Hints>(property, String::new())
    }

    fn placeholder_by_property(&self, property: &str) -> Result<String, Error> {
        MetadataResolver::new(self).resolve::<Placeholders>(property, String::new())
    }

    /// Rules for a property path; `None` when nothing is declared.
    fn rules_by_property(&self, property: &str) -> Result<Option<Vec<Rule>>, Error> {
        MetadataResolver::new(self).resolve::<Rules>(property, None)
    }

    fn widget_config_by_property(&self, property: &str) -> Result<WidgetConfig, Error> {
        MetadataResolver::new(self).resolve::<WidgetConfigByProperty>(property, WidgetConfig::new())
    }

    /// Widget configuration for a widget type. Not path-resolved.
    fn widget_config_by_class(&self, class: &str) -> WidgetConfig {
        self.widget_config().remove(class).unwrap_or_default()
    }

    ///
    /// apply_rules_by_property
    ///
    /// Hook for pushing a property's constraints into an input widget before
    /// it renders. Returns the widget untouched unless overridden; see
    /// [`apply_declared_rules`] for the usual override.
    ///
    fn apply_rules_by_property<W: InputWidget>(&self, input: W, _property: &str) -> Result<W, Error>
    where
        Self: Sized,
    {
        Ok(input)
    }

    //
    // errors
    //

    fn add_property_error(&mut self, property: &str, message: &str) {
        self.error_store_mut().add(property, message);
    }

    fn clear_error(&mut self, property: Option<&str>) {
        self.error_store_mut().clear(property);
    }

    fn set_errors(&mut self, values: ErrorMap) {
        self.error_store_mut().set(values);
    }

    fn errors(&self) -> ErrorMap {
        self.error_store().get()
    }

    fn errors_first(&self) -> Vec<(String, String)> {
        self.error_store().get_first()
    }

    fn error_summary(&self, only: &[&str]) -> Vec<String> {
        self.error_store().summary(only)
    }

    fn error_summary_first(&self, only: &[&str]) -> Vec<String> {
        self.error_store().summary_first(only)
    }

    fn property_error(&self, property: &str) -> &[String] {
        self.error_store().property(property)
    }

    fn property_error_first(&self, property: &str) -> &str {
        self.error_store().property_first(property)
    }

    fn has_property_error(&self, property: Option<&str>) -> bool {
        self.error_store().has(property)
    }

    fn has_property_validated(&self, property: &str) -> bool {
        self.error_store().has_validated(property)
    }
}
