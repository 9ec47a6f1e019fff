//! Core runtime for formkit: the form model capability traits, nested-path
//! metadata resolution, and the per-property error store.
#![warn(unreachable_pub)]

mod macros;

// public exports are one module level down
pub mod error;
pub mod error_store;
pub mod metadata;
pub mod path;
pub mod traits;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_fixtures;

pub use error::Error;

///
/// CONSTANTS
///

/// Separator between nesting levels in a field path.
pub const PATH_SEPARATOR: char = '.';

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or resolver internals are re-exported here.
///

pub mod prelude {
    pub use crate::{
        error_store::ErrorStore,
        field_map,
        traits::{FormModel, InputWidget, PropertyAccess},
        types::{FieldMap, Rule, WidgetConfig},
        value::PropertyValue,
    };
}
