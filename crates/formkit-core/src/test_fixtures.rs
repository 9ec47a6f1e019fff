use crate::{
    Error,
    error_store::ErrorStore,
    field_map,
    metadata::{Labels, MetadataResolver},
    traits::{FormModel, InputWidget, PropertyAccess},
    types::{FieldMap, Rule, WidgetConfig},
    value::PropertyValue,
};
use formkit_utils::case::humanize;

///
/// Invoice
/// Top of a three-level tree: Invoice → Customer → Address.
///

#[derive(Default)]
pub struct Invoice {
    pub number: String,
    pub note: Option<String>,
    pub customer: Customer,
    errors: ErrorStore,
}

impl PropertyAccess for Invoice {
    fn property_value(&self, property: &str) -> PropertyValue<'_> {
        match property {
            "number" => (&self.number).into(),
            "note" => self.note.as_deref().into(),
            "customer" => (&self.customer).into(),
            _ => PropertyValue::Other,
        }
    }
}

impl FormModel for Invoice {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }

    fn labels(&self) -> FieldMap<String> {
        field_map! { "number" => "Invoice number", "street" => "Invoice street" }
    }

    fn hints(&self) -> FieldMap<String> {
        field_map! { "number" => "Printed on the invoice" }
    }

    fn rules(&self) -> FieldMap<Vec<Rule>> {
        field_map! { "number" => vec![Rule::Required, Rule::pattern("^INV-[0-9]+$")] }
    }

    fn widget_config(&self) -> FieldMap<WidgetConfig> {
        field_map! { "text_input" => WidgetConfig::new().with("class", ["input"]) }
    }
}

///
/// Customer
///

#[derive(Default)]
pub struct Customer {
    pub name: String,
    pub billing: Address,
    errors: ErrorStore,
}

impl PropertyAccess for Customer {
    fn property_value(&self, property: &str) -> PropertyValue<'_> {
        match property {
            "name" => (&self.name).into(),
            "billing" => (&self.billing).into(),
            _ => PropertyValue::Other,
        }
    }
}

impl FormModel for Customer {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }

    fn labels(&self) -> FieldMap<String> {
        field_map! { "name" => "Customer name" }
    }

    fn placeholders(&self) -> FieldMap<String> {
        field_map! { "name" => "Jane Doe" }
    }
}

///
/// Address
/// Leaf model. Overrides `label_by_property` for `city` only.
///

#[derive(Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    errors: ErrorStore,
}

impl PropertyAccess for Address {
    fn property_value(&self, property: &str) -> PropertyValue<'_> {
        match property {
            "street" => (&self.street).into(),
            "city" => (&self.city).into(),
            "postal_code" => (&self.postal_code).into(),
            _ => PropertyValue::Other,
        }
    }
}

impl FormModel for Address {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }

    fn labels(&self) -> FieldMap<String> {
        field_map! { "street" => "Street" }
    }

    fn rules(&self) -> FieldMap<Vec<Rule>> {
        field_map! { "street" => vec![Rule::Required, Rule::length(None, Some(120))] }
    }

    fn widget_config_by_properties(&self) -> FieldMap<WidgetConfig> {
        field_map! { "city" => WidgetConfig::new().with("class", ["text-red-100"]) }
    }

    fn label_by_property(&self, property: &str) -> Result<String, Error> {
        if property == "city" {
            return Ok("Town".to_string());
        }

        MetadataResolver::new(self).resolve_or_else::<Labels>(property, || humanize(property))
    }
}

///
/// Blank
/// Declares nothing.
///

#[derive(Default)]
pub struct Blank {
    errors: ErrorStore,
}

impl PropertyAccess for Blank {
    fn property_value(&self, _: &str) -> PropertyValue<'_> {
        PropertyValue::Other
    }
}

impl FormModel for Blank {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }
}

///
/// TextInput
/// Records every constraint pushed into it.
///

#[derive(Debug, Default)]
pub struct TextInput {
    pub applied: Vec<Rule>,
}

impl InputWidget for TextInput {
    fn kind(&self) -> &str {
        "text_input"
    }

    fn constrain(&mut self, rule: &Rule) {
        self.applied.push(rule.clone());
    }
}
