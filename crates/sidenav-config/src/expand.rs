//! `${VAR}` expansion for site strings.
//!
//! Only the braced form is a reference. Titles and descriptions are prose and
//! may contain dollar amounts (`$5`, `$USD`), so a `$` not followed by `{` is
//! always literal text.

use std::borrow::Cow;

use crate::ConfigError;

/// Expand `${VAR}` and `${VAR:-default}` references in `value`.
///
/// `field` names the config key in the error raised for an unset variable
/// without a default.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    let escaped = escape_bare_dollars(value);
    shellexpand::env_with_context(&*escaped, lookup)
        .map(Cow::into_owned)
        .map_err(|e| ConfigError::EnvVar {
            field: field.to_owned(),
            message: format!("${{{}}} not set", e.cause),
        })
}

/// Resolve one variable; unset variables are reported by name.
fn lookup(var: &str) -> Result<Option<String>, String> {
    std::env::var(var).map(Some).map_err(|_| var.to_owned())
}

/// Double every `$` that does not open a `${` reference.
///
/// shellexpand reads `$$` as a literal `$`, so after escaping it only ever
/// sees the braced form as a variable.
fn escape_bare_dollars(value: &str) -> Cow<'_, str> {
    let mut out = String::with_capacity(value.len() + 4);
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '$' && chars.peek() != Some(&'{') {
            out.push('$');
        }
    }
    if out.len() == value.len() {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(out)
    }
}
