//! Variable name validation and resolution

use crate::template::context::Context;
use crate::template::error::TemplateError;
use crate::template::value::Value;

/// Whether `.` is accepted in a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dots {
    Allowed,
    /// Loop binding names are single top-level keys
    Forbidden,
}

/// Check a variable name against `[a-z0-9_]` (case-insensitive), plus `.` when allowed
pub(crate) fn check_var_name(name: &str, dots: Dots) -> Result<(), TemplateError> {
    let legal = name.to_lowercase().chars().all(|c| {
        c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || (c == '.' && dots == Dots::Allowed)
    });

    if legal {
        Ok(())
    } else {
        Err(TemplateError::IllegalVariableName {
            name: name.to_string(),
        })
    }
}

/// Resolve a dotted name against the context
///
/// Every segment must exist; the first missing intermediate ends the walk.
pub(crate) fn resolve<'c>(name: &str, context: &'c Context) -> Result<&'c Value, TemplateError> {
    check_var_name(name, Dots::Allowed)?;

    context
        .lookup(name)
        .ok_or_else(|| TemplateError::UndefinedVariable {
            name: name.to_string(),
        })
}
