//! Nested form models shared by formkit's integration tests.
//!
//! The tree is `User → Profile → Address → Country`. Each level declares its
//! own labels, hints, placeholders and widget config, so a dotted path can be
//! checked against the level that should answer it.

use formkit::{Error, prelude::*};

/// Widget type identifier [`User`] declares widget config for.
pub const TEXT_INPUT: &str = "text_input";

fn rule_map(property: &'static str, rule: Option<&Rule>) -> FieldMap<Vec<Rule>> {
    rule.map_or_else(FieldMap::new, |rule| field_map! { property => vec![rule.clone()] })
}

fn class_config(class: &str) -> WidgetConfig {
    WidgetConfig::new().with("class", [class])
}

///
/// User
///

#[derive(Debug, Default)]
pub struct User {
    pub name: String,
    pub profile: Profile,
    rule: Option<Rule>,
    errors: ErrorStore,
}

impl User {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every level declares `rule` for its first scalar property.
    #[must_use]
    pub fn with_rule(rule: Rule) -> Self {
        Self {
            profile: Profile::with_rule(rule.clone()),
            rule: Some(rule),
            ..Self::default()
        }
    }
}

impl PropertyAccess for User {
    fn property_value(&self, property: &str) -> PropertyValue<'_> {
        match property {
            "name" => (&self.name).into(),
            "profile" => (&self.profile).into(),
            _ => PropertyValue::Other,
        }
    }
}

impl FormModel for User {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }

    fn labels(&self) -> FieldMap<String> {
        field_map! { "name" => "Name" }
    }

    fn hints(&self) -> FieldMap<String> {
        field_map! { "name" => "Enter your name" }
    }

    fn placeholders(&self) -> FieldMap<String> {
        field_map! { "name" => "Enter your name" }
    }

    fn rules(&self) -> FieldMap<Vec<Rule>> {
        rule_map("name", self.rule.as_ref())
    }

    fn widget_config(&self) -> FieldMap<WidgetConfig> {
        field_map! { TEXT_INPUT => class_config("text-gray-100 dark:text-gray-100") }
    }

    fn widget_config_by_properties(&self) -> FieldMap<WidgetConfig> {
        field_map! { "name" => class_config("text-gray-100 dark:text-gray-100") }
    }

    fn apply_rules_by_property<W: InputWidget>(&self, mut input: W, property: &str) -> Result<W, Error> {
        apply_declared_rules(self, &mut input, property)?;

        Ok(input)
    }
}

///
/// Profile
///

#[derive(Debug, Default)]
pub struct Profile {
    pub bio: String,
    pub address: Address,
    rule: Option<Rule>,
    errors: ErrorStore,
}

impl Profile {
    #[must_use]
    pub fn with_rule(rule: Rule) -> Self {
        Self {
            address: Address::with_rule(rule.clone()),
            rule: Some(rule),
            ..Self::default()
        }
    }
}

impl PropertyAccess for Profile {
    fn property_value(&self, property: &str) -> PropertyValue<'_> {
        match property {
            "bio" => (&self.bio).into(),
            "address" => (&self.address).into(),
            _ => PropertyValue::Other,
        }
    }
}

impl FormModel for Profile {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }

    fn labels(&self) -> FieldMap<String> {
        field_map! { "bio" => "Bio" }
    }

    fn hints(&self) -> FieldMap<String> {
        field_map! { "bio" => "Enter your bio" }
    }

    fn placeholders(&self) -> FieldMap<String> {
        field_map! { "bio" => "Enter your bio" }
    }

    fn rules(&self) -> FieldMap<Vec<Rule>> {
        rule_map("bio", self.rule.as_ref())
    }

    fn widget_config_by_properties(&self) -> FieldMap<WidgetConfig> {
        field_map! { "bio" => class_config("text-green-100 dark:text-green-100") }
    }
}

///
/// Address
///

#[derive(Debug, Default)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub country: Country,
    rule: Option<Rule>,
    errors: ErrorStore,
}

impl Address {
    #[must_use]
    pub fn with_rule(rule: Rule) -> Self {
        Self {
            country: Country::with_rule(rule.clone()),
            rule: Some(rule),
            ..Self::default()
        }
    }
}

impl PropertyAccess for Address {
    fn property_value(&self, property: &str) -> PropertyValue<'_> {
        match property {
            "street" => (&self.street).into(),
            "city" => (&self.city).into(),
            "country" => (&self.country).into(),
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
        field_map! { "street" => "Street", "city" => "City" }
    }

    fn hints(&self) -> FieldMap<String> {
        field_map! { "street" => "Enter street name", "city" => "Enter city name" }
    }

    fn placeholders(&self) -> FieldMap<String> {
        field_map! { "street" => "Enter street name", "city" => "Enter city name" }
    }

    fn rules(&self) -> FieldMap<Vec<Rule>> {
        rule_map("street", self.rule.as_ref())
    }

    fn widget_config_by_properties(&self) -> FieldMap<WidgetConfig> {
        field_map! {
            "street" => class_config("text-blue-100 dark:text-blue-100"),
            "city" => class_config("text-red-100 dark:text-red-100"),
        }
    }
}

///
/// Country
/// Leaf of the tree. `postal_code` has no declared metadata.
///

#[derive(Debug, Default)]
pub struct Country {
    pub name: String,
    pub postal_code: String,
    rule: Option<Rule>,
    errors: ErrorStore,
}

impl Country {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rule(rule: Rule) -> Self {
        Self {
            rule: Some(rule),
            ..Self::default()
        }
    }
}

impl PropertyAccess for Country {
    fn property_value(&self, property: &str) -> PropertyValue<'_> {
        match property {
            "name" => (&self.name).into(),
            "postal_code" => (&self.postal_code).into(),
            _ => PropertyValue::Other,
        }
    }
}

impl FormModel for Country {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }

    fn labels(&self) -> FieldMap<String> {
        field_map! { "name" => "Country" }
    }

    fn hints(&self) -> FieldMap<String> {
        field_map! { "name" => "Enter country name" }
    }

    fn placeholders(&self) -> FieldMap<String> {
        field_map! { "name" => "Enter country name" }
    }

    fn rules(&self) -> FieldMap<Vec<Rule>> {
        rule_map("name", self.rule.as_ref())
    }

    fn widget_config_by_properties(&self) -> FieldMap<WidgetConfig> {
        field_map! { "name" => class_config("text-yellow-100 dark:text-yellow-100") }
    }
}

///
/// Anonymous
/// Declares nothing; every lookup falls back to its default.
///

#[derive(Debug, Default)]
pub struct Anonymous {
    errors: ErrorStore,
}

impl PropertyAccess for Anonymous {
    fn property_value(&self, _: &str) -> PropertyValue<'_> {
        PropertyValue::Other
    }
}

impl FormModel for Anonymous {
    fn error_store(&self) -> &ErrorStore {
        &self.errors
    }

    fn error_store_mut(&mut self) -> &mut ErrorStore {
        &mut self.errors
    }
}

///
/// TextInput
/// Input widget that records the constraints pushed into it.
///

#[derive(Debug, Default)]
pub struct TextInput {
    pub constraints: Vec<Rule>,
}

impl InputWidget for TextInput {
    fn kind(&self) -> &str {
        TEXT_INPUT
    }

    fn constrain(&mut self, rule: &Rule) {
        self.constraints.push(rule.clone());
    }
}
