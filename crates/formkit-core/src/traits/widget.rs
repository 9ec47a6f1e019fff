use crate::{Error, traits::FormModel, types::Rule};

///
/// InputWidget
///
/// A rendered form input that can mirror validation constraints
/// (`required`, `maxlength`, `pattern`, ...) in its own markup.
///

pub trait InputWidget {
    /// Widget type identifier; keys [`FormModel::widget_config`].
    fn kind(&self) -> &str;

    /// Apply one constraint. Widgets ignore rules they cannot express.
    fn constrain(&mut self, rule: &Rule);
}

///
/// apply_declared_rules
///
/// Resolve the rules declared for `property` (nested paths included) and
/// push each one into `input`. Returns how many rules were applied.
///
pub fn apply_declared_rules<M, W>(model: &M, input: &mut W, property: &str) -> Result<usize, Error>
where
    M: FormModel + ?Sized,
    W: InputWidget + ?Sized,
{
    let rules = model.rules_by_property(property)?.unwrap_or_default();

    for rule in &rules {
        input.constrain(rule);
    }

    tracing::trace!(
        property,
        widget = input.kind(),
        applied = rules.len(),
        "rules applied to input"
    );

    Ok(rules.len())
}
