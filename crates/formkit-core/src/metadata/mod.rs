mod kind;


pub use kind::{
    Hints, Labels, Metadata, MetadataKind, Placeholders, Rules, WidgetConfigByProperty,
};

use crate::{Error, path, traits::FormModel, value::PropertyValue};

///
/// MetadataResolver
///
/// Resolves one (possibly dotted) field path against a model.
///
/// For `head.tail`, if `head` holds a nested form model the lookup is handed
/// to that model's own by-property accessor with `tail`, so the innermost
/// model decides both the value and the default. Otherwise `head` is looked
/// up in the model's declared map, falling back to the default.
///

pub struct MetadataResolver<'a, M: ?Sized> {
    model: &'a M,
}

impl<'a, M> MetadataResolver<'a, M>
where
    M: FormModel + ?Sized,
{
    #[must_use]
    pub const fn new(model: &'a M) -> Self {
        Self { model }
    }

    pub fn resolve<K: Metadata>(&self, path: &str, default: K::Value) -> Result<K::Value, Error> {
        self.resolve_or_else::<K>(path, || default)
    }

    /// As [`resolve`](Self::resolve), building the default only when needed.
    pub fn resolve_or_else<K: Metadata>(
        &self,
        path: &str,
        default: impl FnOnce() -> K::Value,
    ) -> Result<K::Value, Error> {
        path::validate(path)?;

        let (head, tail) = path::split(path);

        if let Some(tail) = tail {
            match self.model.property_value(head) {
                PropertyValue::Model(nested) => {
                    tracing::trace!(kind = %K::KIND, head, tail, "resolving in nested model");

                    return K::by_property(nested, tail);
                }
                value => {
                    tracing::debug!(
                        kind = %K::KIND,
                        head,
                        ?value,
                        "segment is not a nested model, resolving locally"
                    );
                }
            }
        }

        Ok(K::declared(self.model)
            .remove(head)
            .map_or_else(default, Into::into))
    }
}
