//! ## Crate layout
//! - `core`: form model traits, nested-path metadata resolution, and the
//!   per-property error store.
//! - `utils`: label generation and case helpers.
//!
//! The `prelude` module covers what a form model implementation needs.

pub use formkit_core as core;
pub use formkit_utils as utils;

/// re-exports
///
/// the `field_map!` macro expands to paths under `formkit_core`, so it is
/// re-exported here at the crate root
pub use formkit_core::field_map;

//
// Consts
//

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use crate::core::{Error, PATH_SEPARATOR};

///
/// Prelude
/// everything a form model implementation needs in scope
///

pub mod prelude {
    pub use crate::core::{
        error_store::ErrorStore,
        field_map,
        metadata::MetadataResolver,
        path::PathError,
        traits::{FormModel, InputWidget, PropertyAccess, apply_declared_rules},
        types::{FieldMap, Rule, WidgetConfig},
        value::PropertyValue,
    };
    pub use serde::{Deserialize, Serialize};
}
