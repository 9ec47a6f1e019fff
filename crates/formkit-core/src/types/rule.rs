use serde::{Deserialize, Serialize};

///
/// Rule
///
/// A declarative validation constraint attached to a property.
/// Rules are data: widgets read them to mirror constraints in the rendered
/// input, and validators elsewhere decide what they mean.
///

#[remain::sorted]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    Custom {
        name: String,
    },
    Email,
    Length {
        min: Option<usize>,
        max: Option<usize>,
    },
    Number {
        min: Option<i64>,
        max: Option<i64>,
    },
    Pattern {
        pattern: String,
    },
    Required,
    Url,
}

impl Rule {
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self::Custom { name: name.into() }
    }

    #[must_use]
    pub const fn length(min: Option<usize>, max: Option<usize>) -> Self {
        Self::Length { min, max }
    }

    #[must_use]
    pub const fn number(min: Option<i64>, max: Option<i64>) -> Self {
        Self::Number { min, max }
    }

    #[must_use]
    pub fn pattern(pattern: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
        }
    }

    /// Constraint name. Custom rules report their own name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Custom { name } => name,
            Self::Email => "email",
            Self::Length { .. } => "length",
            Self::Number { .. } => "number",
            Self::Pattern { .. } => "pattern",
            Self::Required => "required",
            Self::Url => "url",
        }
    }
}

///
/// TESTS
///
