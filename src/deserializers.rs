use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Separator and terminator of the `footnotes` field.
const FOOTNOTE_DELIMITER: char = '#';

/// `"Y"` is true, `"N"` is false, any other value is unknown.
pub fn flag_from_yes_no<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::String(s) if s == "Y" => Some(true),
        Value::String(s) if s == "N" => Some(false),
        _ => None,
    };
    Ok(flag)
}

/// Only a JSON `true` is kept, `false` reads as unknown.
pub fn flag_from_true<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(true) => Some(true),
        _ => None,
    };
    Ok(flag)
}

/// JSON booleans pass through, any other value is unknown.
pub fn flag_from_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let flag = match Value::deserialize(deserializer)? {
        Value::Bool(b) => Some(b),
        _ => None,
    };
    Ok(flag)
}

pub fn footnotes_from_str<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let footnotes = match Value::deserialize(deserializer)? {
        Value::String(s) => split_footnotes(&s),
        _ => vec![],
    };
    Ok(footnotes)
}

/// Splits `"L#M#"` into `["L#", "M#"]`, dropping empty segments.
pub(crate) fn split_footnotes(s: &str) -> Vec<String> {
    s.split(FOOTNOTE_DELIMITER)
        .filter(|footnote| !footnote.is_empty())
        .map(|footnote| format!("{}{}", footnote, FOOTNOTE_DELIMITER))
        .collect()
}

/// A value of the expected type decodes to `Some`, anything else to `None`.
pub fn lenient_option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        value => Ok(T::deserialize(value).ok()),
    }
}

/// A non-empty object decodes to `Some`, anything else to `None`.
pub fn non_empty_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) if !map.is_empty() => Ok(T::deserialize(Value::Object(map)).ok()),
        _ => Ok(None),
    }
}

/// Anything but an object of the expected shape decodes to the default value.
pub fn default_on_mismatch<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => Ok(T::deserialize(value).unwrap_or_default()),
        _ => Ok(T::default()),
    }
}
