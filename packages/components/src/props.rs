use puckblocks_core::Props;
use serde_json::Value;

/// String prop, if present and a string
pub(crate) fn str_prop<'a>(props: &'a Props, key: &str) -> Option<&'a str> {
    props.get(key).and_then(Value::as_str)
}

/// CSS length from a prop: numbers are pixels, strings are used as given.
pub(crate) fn css_length(props: &Props, key: &str) -> Option<String> {
    match props.get(key)? {
        Value::Number(n) => Some(format!("{}px", n)),
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
