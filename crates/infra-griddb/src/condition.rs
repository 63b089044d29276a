// Row-acquisition condition grammar (TQL-style `col == 'literal'`)

use std::fmt;

/// Double every single quote so the value stays inside one literal
pub fn escape_literal(value: &str) -> String {
    value.replace('\'', "''")
}

/// Filter for `POST /containers/{name}/rows`
///
/// The only way adapters build conditions, so user text never reaches the
/// grammar unescaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition(String);

impl Condition {
    /// `column == 'value'`
    pub fn eq(column: &str, value: &str) -> Self {
        Self(format!("{} == '{}'", column, escape_literal(value)))
    }

    /// `column LIKE '%fragment%'`
    ///
    /// `%` and `_` inside the fragment keep their wildcard meaning.
    pub fn contains(column: &str, fragment: &str) -> Self {
        Self(format!("{} LIKE '%{}%'", column, escape_literal(fragment)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Condition> for String {
    fn from(condition: Condition) -> Self {
        condition.0
    }
}
