use ahash::{HashMap, HashMapExt};
use json::number::Number;
use json::JsonValue;
use ordo::{Key, Value};

use crate::error;

/// Parse a JSON document into a value.
pub(crate) fn parse(src: &str) -> error::Result<Value> {
    let parsed = json::parse(src)?;
    let value = to_value(&parsed);
    log::debug!("parsed a {}", value.kind_name());
    Ok(value)
}

/// Convert parsed JSON into a value.
///
/// Numbers written without a fraction become integers, all other numbers
/// become floats. Object member names become string keys.
pub(crate) fn to_value(json: &JsonValue) -> Value {
    match json {
        JsonValue::Null => Value::Null,
        JsonValue::Boolean(b) => Value::from(*b),
        JsonValue::Short(s) => Value::from(s.as_str()),
        JsonValue::String(s) => Value::from(s.as_str()),
        JsonValue::Number(n) => number_to_value(*n),
        JsonValue::Array(items) => items.iter().map(to_value).collect::<Vec<_>>().into(),
        JsonValue::Object(object) => {
            let mut m = HashMap::with_capacity(object.len());
            for (name, member) in object.iter() {
                m.insert(Key::from(name), to_value(member));
            }
            m.into()
        }
    }
}

fn number_to_value(n: Number) -> Value {
    let (positive, mantissa, exponent) = n.as_parts();
    if exponent >= 0 {
        let integer = i64::try_from(mantissa).ok().and_then(|mantissa| {
            10i64
                .checked_pow(exponent.unsigned_abs().into())
                .and_then(|scale| mantissa.checked_mul(scale))
        });
        if let Some(integer) = integer {
            return Value::from(if positive { integer } else { -integer });
        }
    }
    Value::from(f64::from(n))
}
