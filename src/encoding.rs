//! `application/x-www-form-urlencoded` serialization
//!
//! Query strings and form bodies go through one encoder so that order
//! filters, the token exchange body, and document uploads all agree on
//! the same escaping rules: space becomes `+`, reserved characters are
//! percent-encoded, fields keep their insertion order, and absent fields
//! are omitted entirely.

use serde::Serialize;
use serde_json::Value;
use url::form_urlencoded::Serializer;

use crate::error::{Error, Result};

/// Encode key/value pairs as a form-urlencoded string.
///
/// An empty input yields the empty string.
pub fn encode_pairs<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut serializer = Serializer::new(String::new());
    for (key, value) in pairs {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.finish()
}

/// Encode a flat parameter struct as a form-urlencoded string.
///
/// `None` fields are dropped; non-string scalars are stringified. Fails
/// if `params` does not serialize to a JSON object.
pub fn encode_params<T: Serialize>(params: &T) -> Result<String> {
    let value = serde_json::to_value(params).map_err(|e| Error::Encode(e.to_string()))?;
    let map = match value {
        Value::Object(map) => map,
        Value::Null => return Ok(String::new()),
        other => {
            return Err(Error::Encode(format!(
                "expected a flat parameter object, got {other}"
            )));
        }
    };

    let mut serializer = Serializer::new(String::new());
    for (key, value) in &map {
        match value {
            Value::Null => continue,
            Value::String(text) => {
                serializer.append_pair(key, text);
            }
            Value::Bool(b) => {
                serializer.append_pair(key, if *b { "true" } else { "false" });
            }
            Value::Number(n) => {
                serializer.append_pair(key, &n.to_string());
            }
            // Nested values have no form-urlencoded representation
            other => {
                return Err(Error::Encode(format!(
                    "field `{key}` is not a scalar: {other}"
                )));
            }
        }
    }
    Ok(serializer.finish())
}
