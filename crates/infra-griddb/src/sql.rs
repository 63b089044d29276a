// SQL grammar literals for `/sql/dml/*` statements

/// `'value'` with embedded single quotes doubled
pub fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

/// `('a', 'b')`, for use after `IN`. Callers must not pass an empty list.
pub fn in_list<I, S>(values: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let quoted: Vec<String> = values.into_iter().map(|v| quote(v.as_ref())).collect();
    format!("({})", quoted.join(", "))
}
